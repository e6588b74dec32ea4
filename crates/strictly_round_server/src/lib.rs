//! Strictly Round server - stateless HTTP front end for round evaluation
//!
//! Each request carries the full board and the turn that just moved; the
//! server evaluates it with [`strictly_round`] and renders the result. No
//! game session lives on the server.
//!
//! # Architecture
//!
//! - **Config**: TOML file, environment and CLI overrides
//! - **Form**: `turn` and `c{row},{col}` fields to raw round input
//! - **Render**: injected [`Renderer`], HTML by default
//! - **Server**: axum router with `/game`, `/api/round` and `/health`
//! - **CLI**: `serve` and `evaluate` subcommands

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod form;
mod render;
mod server;

pub use config::{ConfigError, HOST_ENV, PORT_ENV, STRICT_ENV, ServerConfig};
pub use form::{TURN_FIELD, cell_field, fields_from_round_input, round_input_from_fields};
pub use render::{HtmlRenderer, RenderError, Renderer, escape_html};
pub use server::{AppState, RoundRejection, play_round, router, serve};
