//! Form-field mapping for the `/game` endpoint.
//!
//! The page posts the turn that just moved as `turn` and each cell as
//! `c{row},{col}`, e.g. `c0,2` for the top-right cell.

use std::collections::HashMap;
use strictly_round::{Position, RoundInput};
use tracing::{debug, instrument};

/// Name of the turn field.
pub const TURN_FIELD: &str = "turn";

/// Name of the form field carrying one cell.
pub fn cell_field(position: Position) -> String {
    format!("c{},{}", position.row(), position.col())
}

/// Builds raw round input from submitted form fields.
///
/// Missing fields read as empty strings, so a bare `GET /game` is an
/// opening request. Unrecognized fields are ignored.
#[instrument(skip(fields), fields(field_count = fields.len()))]
pub fn round_input_from_fields(fields: &HashMap<String, String>) -> RoundInput {
    let mut input = RoundInput {
        turn: fields.get(TURN_FIELD).cloned().unwrap_or_default(),
        ..Default::default()
    };

    for position in Position::ALL {
        let name = cell_field(position);
        let value = fields.get(&name).cloned().unwrap_or_default();
        debug!(field = %name, %value, "Form cell");
        input.set_cell(position, value);
    }

    input
}

/// Inverse of [`round_input_from_fields`]: the fields a page must post.
pub fn fields_from_round_input(input: &RoundInput) -> Vec<(String, String)> {
    let mut fields = vec![(TURN_FIELD.to_string(), input.turn.clone())];
    fields.extend(
        Position::ALL
            .iter()
            .map(|&position| (cell_field(position), input.cell(position).to_string())),
    );
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_field_names() {
        assert_eq!(cell_field(Position::TopLeft), "c0,0");
        assert_eq!(cell_field(Position::MiddleRight), "c1,2");
        assert_eq!(cell_field(Position::BottomCenter), "c2,1");
    }

    #[test]
    fn test_missing_fields_are_empty() {
        let input = round_input_from_fields(&HashMap::new());
        assert_eq!(input, RoundInput::default());
    }

    #[test]
    fn test_fields_map_to_cells() {
        let fields: HashMap<String, String> = [
            ("turn", "O"),
            ("c0,0", "X"),
            ("c1,1", "O"),
            ("c2,2", ""),
            ("unrelated", "ignored"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let input = round_input_from_fields(&fields);
        assert_eq!(input.turn, "O");
        assert_eq!(input.cell(Position::TopLeft), "X");
        assert_eq!(input.cell(Position::Center), "O");
        assert_eq!(input.cell(Position::BottomRight), "");
    }

    #[test]
    fn test_fields_round_trip_through_map() {
        let mut input = RoundInput::new("X".to_string(), Default::default());
        input.set_cell(Position::TopRight, "X");
        let fields: HashMap<String, String> =
            fields_from_round_input(&input).into_iter().collect();
        assert_eq!(fields.len(), 10);
        assert_eq!(round_input_from_fields(&fields), input);
    }
}
