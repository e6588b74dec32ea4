//! Page rendering.
//!
//! Handlers receive a [`Renderer`] through the router state rather than
//! reaching for a global, so tests and alternative front ends can swap it.

use crate::form::fields_from_round_input;
use derive_more::{Display, Error, From};
use std::fmt::Write;
use strictly_round::{Cell, Position, RoundInput, RoundPhase, RoundResult, Submission, Turn};
use tracing::instrument;

/// Failure while producing a page.
#[derive(Debug, Display, Error, From)]
#[display("Render error: {}", _0)]
pub struct RenderError(std::fmt::Error);

/// Turns round outcomes into response bodies.
pub trait Renderer: Send + Sync {
    /// Renders the page for an evaluated round.
    fn render_round(&self, result: &RoundResult) -> Result<String, RenderError>;

    /// Renders the page shown when input was refused.
    fn render_rejection(&self, message: &str) -> Result<String, RenderError>;
}

/// Plain HTML renderer.
///
/// Every empty cell of a running game is its own form. Its hidden fields
/// carry the whole board with that cell taken by the next mark, so the
/// server never needs to remember anything between requests.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    title: String,
}

impl HtmlRenderer {
    /// Creates a renderer with the given page title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    fn open_page(&self, out: &mut String) -> Result<(), RenderError> {
        let title = escape_html(&self.title);
        write!(
            out,
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n<h1>{title}</h1>\n"
        )?;
        Ok(())
    }

    fn close_page(&self, out: &mut String) -> Result<(), RenderError> {
        write!(
            out,
            "<p><a href=\"/game\">New game</a></p>\n</body>\n</html>\n"
        )?;
        Ok(())
    }

    fn status(result: &RoundResult) -> String {
        match result.phase() {
            RoundPhase::Won => format!("{} wins!", result.winner_label()),
            RoundPhase::Drawn => "Draw.".to_string(),
            RoundPhase::Opening | RoundPhase::Continuing => {
                format!("Next: {}", result.next_turn())
            }
        }
    }

    fn write_cell(
        out: &mut String,
        result: &RoundResult,
        position: Position,
    ) -> Result<(), RenderError> {
        let cell = result.board().get(position);
        if result.is_over() || cell != Cell::Empty {
            write!(
                out,
                "<td><span class=\"cell\">{}</span></td>",
                escape_html(cell.symbol())
            )?;
            return Ok(());
        }

        let mark = result.next_turn();
        let submission = Submission::new(
            result.board().with(position, Cell::Occupied(mark)),
            Turn::Played(mark),
        );
        write!(out, "<td><form method=\"post\" action=\"/game\">")?;
        for (name, value) in fields_from_round_input(&RoundInput::from(&submission)) {
            write!(
                out,
                "<input type=\"hidden\" name=\"{}\" value=\"{}\">",
                escape_html(&name),
                escape_html(&value)
            )?;
        }
        write!(
            out,
            "<button type=\"submit\" aria-label=\"{}\">&nbsp;</button></form></td>",
            position.label()
        )?;
        Ok(())
    }
}

impl Renderer for HtmlRenderer {
    #[instrument(skip(self, result), fields(phase = %result.phase()))]
    fn render_round(&self, result: &RoundResult) -> Result<String, RenderError> {
        let mut out = String::new();
        self.open_page(&mut out)?;
        writeln!(
            out,
            "<p class=\"status\">{}</p>",
            escape_html(&Self::status(result))
        )?;

        writeln!(out, "<table class=\"board\">")?;
        for row in 0..3 {
            write!(out, "<tr>")?;
            for col in 0..3 {
                if let Some(position) = Position::from_row_col(row, col) {
                    Self::write_cell(&mut out, result, position)?;
                }
            }
            writeln!(out, "</tr>")?;
        }
        writeln!(out, "</table>")?;

        self.close_page(&mut out)?;
        Ok(out)
    }

    #[instrument(skip(self))]
    fn render_rejection(&self, message: &str) -> Result<String, RenderError> {
        let mut out = String::new();
        self.open_page(&mut out)?;
        writeln!(out, "<p class=\"error\">{}</p>", escape_html(message))?;
        self.close_page(&mut out)?;
        Ok(out)
    }
}

/// Escapes text for HTML bodies and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
