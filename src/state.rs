use crate::board::Board;
use crate::types::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub cell: u8, // 0..=8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub next: Player,
}

impl GameState {
    #[inline]
    pub fn new_empty(first: Player) -> Self {
        Self {
            board: Board::new(),
            next: first,
        }
    }

    #[inline]
    pub fn with_board(board: Board, next: Player) -> Self {
        Self { board, next }
    }

    /// Returns ordered legal moves for the current player.
    /// Order: by cell index ascending. The graph builder and the renderer both
    /// rely on this order to map empty cells to successors positionally.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity((9 - self.board.filled_count()) as usize);
        for cell in 0u8..9u8 {
            if self.board.is_empty(cell) {
                moves.push(Move { cell });
            }
        }
        moves
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.board.winning_player().is_some() || self.board.is_full()
    }
}

/// Re-export minimal surface for callers as free functions to align with the planned API.
#[inline]
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    state.legal_moves()
}

#[inline]
pub fn is_terminal(state: &GameState) -> bool {
    state.is_terminal()
}
