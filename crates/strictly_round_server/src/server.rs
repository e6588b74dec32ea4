//! HTTP surface: routing, handlers and the serve loop.

use crate::config::ServerConfig;
use crate::form::round_input_from_fields;
use crate::render::{HtmlRenderer, Renderer};
use axum::{
    Json, Router,
    body::Body,
    extract::{Form, State, rejection::JsonRejection},
    http::{Request, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    routing::post,
};
use derive_more::{Display, Error, From};
use std::collections::HashMap;
use std::sync::Arc;
use strictly_round::{
    InputError, LegalityError, RoundInput, RoundResult, check_legality, evaluate_submission,
};
use tower::ServiceBuilder;
use tracing::{error, info, instrument, warn};

/// Why a round was refused before evaluation.
#[derive(Debug, Display, Error, From)]
pub enum RoundRejection {
    /// Input didn't parse.
    #[display("{}", _0)]
    Input(#[error(not(source))] InputError),
    /// Input parsed but failed the legality checks.
    #[display("{}", _0)]
    Illegal(#[error(not(source))] LegalityError),
}

impl RoundRejection {
    /// Status code reported to the client.
    pub fn status(&self) -> StatusCode {
        match self {
            RoundRejection::Input(_) => StatusCode::BAD_REQUEST,
            RoundRejection::Illegal(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

/// Validates raw input and evaluates the round.
///
/// With `strict` set, submissions that fail the legality checks are
/// refused instead of evaluated.
#[instrument(skip(input), fields(turn = %input.turn))]
pub fn play_round(input: &RoundInput, strict: bool) -> Result<RoundResult, RoundRejection> {
    let submission = input.validate()?;
    if strict {
        check_legality(&submission)?;
    }
    Ok(evaluate_submission(&submission))
}

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ServerConfig>,
    renderer: Arc<dyn Renderer>,
}

impl AppState {
    /// Creates state around an injected renderer.
    pub fn new(config: ServerConfig, renderer: Arc<dyn Renderer>) -> Self {
        Self {
            config: Arc::new(config),
            renderer,
        }
    }

    /// Creates state with an [`HtmlRenderer`] titled from the config.
    pub fn with_html(config: ServerConfig) -> Self {
        let renderer = Arc::new(HtmlRenderer::new(config.title().clone()));
        Self::new(config, renderer)
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/game", get(game_page).post(game_page))
        .route("/api/round", post(api_round))
        .layer(ServiceBuilder::new().map_request(log_request))
        .with_state(state)
}

fn log_request(req: Request<Body>) -> Request<Body> {
    info!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
    req
}

async fn index() -> Redirect {
    Redirect::to("/game")
}

async fn health() -> &'static str {
    "ok"
}

#[instrument(skip(state, fields))]
async fn game_page(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> Response {
    let input = round_input_from_fields(&fields);
    let (status, page) = match play_round(&input, *state.config.strict_legality()) {
        Ok(result) => (StatusCode::OK, state.renderer.render_round(&result)),
        Err(rejection) => {
            warn!(error = %rejection, "Round rejected");
            (
                rejection.status(),
                state.renderer.render_rejection(&rejection.to_string()),
            )
        }
    };

    match page {
        Ok(page) => (status, Html(page)).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to render page");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[instrument(skip(state, body))]
async fn api_round(
    State(state): State<AppState>,
    body: Result<Json<RoundInput>, JsonRejection>,
) -> Response {
    let Json(input) = match body {
        Ok(body) => body,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "Malformed JSON body");
            return json_error(rejection.status(), rejection.body_text());
        }
    };

    match play_round(&input, *state.config.strict_legality()) {
        Ok(result) => Json(result).into_response(),
        Err(rejection) => {
            warn!(error = %rejection, "Round rejected");
            json_error(rejection.status(), rejection.to_string())
        }
    }
}

fn json_error(status: StatusCode, message: String) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

/// Binds the configured address and serves until the process stops.
#[instrument(skip(state))]
pub async fn serve(state: AppState) -> anyhow::Result<()> {
    let addr = state.config().bind_addr();
    let strict = *state.config().strict_legality();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, strict, "Server ready at http://{}/game", addr);

    axum::serve(listener, router(state)).await?;
    Ok(())
}
