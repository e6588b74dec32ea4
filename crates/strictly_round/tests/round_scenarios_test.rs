//! End-to-end round scenarios, driven from raw client strings.

use strictly_round::{
    Board, Cell, Mark, Position, RoundInput, RoundPhase, Turn, evaluate_round,
    evaluate_submission, finalize, has_won, is_draw, next_turn,
};

fn input(turn: &str, rows: [[&str; 3]; 3]) -> RoundInput {
    RoundInput::new(turn.to_string(), rows.map(|row| row.map(str::to_string)))
}

#[test]
fn test_opening_on_empty_board() {
    let submission = input("", [[""; 3]; 3]).validate().expect("Valid input");
    let result = evaluate_submission(&submission);

    assert_eq!(result.phase(), RoundPhase::Opening);
    assert_eq!(result.next_turn(), Mark::X);
    assert!(!result.win());
    assert!(!result.draw());
    assert_eq!(result.winner(), None);
    assert_eq!(*result.board(), Board::new());
}

#[test]
fn test_x_wins_top_row() {
    let submission = input("X", [["X", "X", "X"], ["", "", ""], ["", "", ""]])
        .validate()
        .expect("Valid input");
    let result = evaluate_submission(&submission);

    assert_eq!(result.phase(), RoundPhase::Won);
    assert!(result.win());
    assert!(!result.draw());
    assert_eq!(result.winner(), Some(Mark::X));
    for position in Position::ALL {
        let expected = if position.row() == 0 {
            Cell::Occupied(Mark::X)
        } else {
            Cell::Blocked
        };
        assert_eq!(result.board().get(position), expected, "{}", position);
    }
}

#[test]
fn test_o_draws_full_board() {
    let submission = input("O", [["X", "O", "X"], ["X", "O", "O"], ["O", "X", "X"]])
        .validate()
        .expect("Valid input");
    let result = evaluate_submission(&submission);

    assert_eq!(result.phase(), RoundPhase::Drawn);
    assert!(!result.win());
    assert!(result.draw());
    assert_eq!(result.winner_label(), "");
    assert_eq!(result.board(), submission.board());
}

#[test]
fn test_one_empty_cell_continues() {
    let submission = input("X", [["X", "O", "X"], ["X", "O", "O"], ["O", "X", ""]])
        .validate()
        .expect("Valid input");
    let result = evaluate_submission(&submission);

    assert_eq!(result.phase(), RoundPhase::Continuing);
    assert!(!result.win());
    assert!(!result.draw());
    assert_eq!(result.next_turn(), Mark::O);
    assert_eq!(result.board(), submission.board());
}

#[test]
fn test_o_wins_main_diagonal() {
    let submission = input("O", [["O", "X", ""], ["X", "O", ""], ["X", "", "O"]])
        .validate()
        .expect("Valid input");
    let result = evaluate_submission(&submission);

    assert!(result.win());
    assert_eq!(result.winner(), Some(Mark::O));
    assert_eq!(result.board().get(Position::TopRight), Cell::Blocked);
    assert_eq!(result.board().get(Position::MiddleRight), Cell::Blocked);
    assert_eq!(result.board().get(Position::BottomCenter), Cell::Blocked);
    assert_eq!(result.board().get(Position::TopCenter), Cell::Occupied(Mark::X));
    assert!(!result.board().cells().contains(&Cell::Empty));
}

#[test]
fn test_result_invariants_hold_for_every_single_cell_board() {
    let cells = [Cell::Empty, Cell::Occupied(Mark::X), Cell::Occupied(Mark::O)];
    let turns = [Turn::NotStarted, Turn::Played(Mark::X), Turn::Played(Mark::O)];

    // Every board reachable by filling row 0 and the center, under every turn.
    for a in cells {
        for b in cells {
            for c in cells {
                for d in cells {
                    let board = Board::new()
                        .with(Position::TopLeft, a)
                        .with(Position::TopCenter, b)
                        .with(Position::TopRight, c)
                        .with(Position::Center, d);
                    for turn in turns {
                        let result = evaluate_round(board, turn);
                        assert!(!(result.win() && result.draw()));
                        assert_eq!(result.winner().is_some(), result.win());
                        if result.win() {
                            assert!(!result.board().cells().contains(&Cell::Empty));
                        } else {
                            assert_eq!(result.board(), &board);
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn test_rules_compose_like_the_controller() {
    let x = Cell::Occupied(Mark::X);
    let o = Cell::Occupied(Mark::O);
    let e = Cell::Empty;
    let board = Board::from_rows([[x, o, e], [o, x, e], [e, e, x]]);

    assert!(has_won(&board, Mark::X));
    assert!(!is_draw(&board));
    assert_eq!(finalize(finalize(board)), finalize(board));
    assert_eq!(next_turn(Turn::Played(Mark::X)), Mark::O);
}

#[test]
fn test_result_serializes_for_clients() {
    let submission = input("X", [["X", "X", "X"], ["O", "O", ""], ["", "", ""]])
        .validate()
        .expect("Valid input");
    let json = serde_json::to_value(evaluate_submission(&submission)).expect("Serializable");

    assert_eq!(json["phase"], "won");
    assert_eq!(json["next_turn"], "O");
    assert_eq!(json["win"], true);
    assert_eq!(json["draw"], false);
    assert_eq!(json["winner"], "X");
    assert_eq!(
        json["board"],
        serde_json::json!([["X", "X", "X"], ["O", "O", "-"], ["-", "-", "-"]])
    );
}
