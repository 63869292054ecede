use crate::state::{GameState, Move};

/// Apply a move as a pure transform: returns a new GameState on success.
/// Validates: cell in range, cell empty, state not already decided.
pub fn apply_move(state: &GameState, mv: Move) -> Result<GameState, String> {
    if mv.cell >= 9 {
        return Err("Cell index out of range".to_string());
    }
    if !state.board.is_empty(mv.cell) {
        return Err("Cell is not empty".to_string());
    }
    if state.board.winning_player().is_some() {
        return Err("Game is already decided".to_string());
    }

    let board = state.board.place(mv.cell, state.next);
    Ok(GameState {
        board,
        next: state.next.other(),
    })
}
