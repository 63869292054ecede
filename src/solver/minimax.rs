use crate::board::Board;
use crate::engine::score::terminal_value;
use crate::types::Player;

/// Result of a search: the exact game-theoretic value of the position and the
/// cell achieving it. `best_cell` is only meaningful at the root of a search;
/// it is `None` when the searched board is already terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub value: i8,
    pub best_cell: Option<u8>,
}

/// Classic full-width minimax. No pruning and no cross-call memoisation: the
/// space below any one position is bounded by 9! leaf paths (far fewer in
/// practice because most lines end early), and the graph builder calls this
/// at most once per O-to-move board.
///
/// Values are from O's perspective: O maximises, X minimises. Precondition:
/// do not call on a terminal board expecting a move - the base case fires and
/// `best_cell` stays `None`.
pub fn evaluate(board: &Board, to_move: Player) -> Evaluation {
    if board.winning_player().is_some() || board.is_full() {
        return Evaluation {
            value: terminal_value(board),
            best_cell: None,
        };
    }

    let mut best_val: Option<i8> = None;
    let mut best_cell: Option<u8> = None;

    for cell in 0u8..9 {
        if !board.is_empty(cell) {
            continue;
        }
        let child = board.place(cell, to_move);
        let v = evaluate(&child, to_move.other()).value;

        match (to_move, best_val) {
            (_, None) => {
                best_val = Some(v);
                best_cell = Some(cell);
            }
            (Player::O, Some(cur)) => {
                if v > cur {
                    best_val = Some(v);
                    best_cell = Some(cell);
                }
                // tie: keep first encountered, lowest cell index
            }
            (Player::X, Some(cur)) => {
                if v < cur {
                    best_val = Some(v);
                    best_cell = Some(cell);
                }
                // tie: keep first encountered
            }
        }
    }

    // Non-terminal boards always have at least one empty cell, so both are set.
    Evaluation {
        value: best_val.unwrap_or(0),
        best_cell,
    }
}
