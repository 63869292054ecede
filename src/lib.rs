#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited

pub mod types;
pub mod board;
pub mod state;
pub mod hash;

pub mod engine {
    pub mod apply;
    pub mod score;
}

pub mod solver;

pub mod plan;
pub mod plan_writer;

// Re-exports: stable minimal API surface for external callers
pub use crate::board::Board;
pub use crate::engine::apply::apply_move;
pub use crate::engine::score::{classify, terminal_value};
pub use crate::hash::board_key;
pub use crate::state::{is_terminal, legal_moves, GameState, Move};
pub use crate::types::{Outcome, Player};
