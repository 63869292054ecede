use crate::board::Board;
use crate::types::{Outcome, Player};

/// Classify a position given whose turn comes next.
///
/// Win detection runs against the board *after* the winning mark was placed,
/// while `next` already names the upcoming player, so a completed line belongs
/// to `next.other()` - the side that just moved. Preserve that off-by-one
/// relation; "whoever's turn it is" would attribute every win to the loser.
#[inline]
pub fn classify(board: &Board, next: Player) -> Outcome {
    if let Some(winner) = board.winning_player() {
        debug_assert_eq!(winner, next.other(), "line owner disagrees with mover");
        Outcome::Win(next.other())
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

/// Minimax leaf value for a terminal board: +1 when the completed line belongs
/// to O (the maximizing side), -1 for X, 0 for a draw.
#[inline]
pub fn terminal_value(board: &Board) -> i8 {
    match board.winning_player() {
        Some(Player::O) => 1,
        Some(Player::X) => -1,
        None => 0,
    }
}
