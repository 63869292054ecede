// Render-plan assembly: everything the external document renderer needs to
// lay out one page per state with clickable regions, without knowing anything
// about how the graph was built. Page geometry, typography, outline structure
// and compression stay on the renderer's side of the boundary.

use serde::Serialize;

use crate::hash::board_key;
use crate::solver::graph::StateGraph;
use crate::types::{Outcome, Player};

pub const DOC_TITLE: &str = "The Complete Tic-Tac-Toe";

/// First line of the exported plan.
#[derive(Debug, Clone, Serialize)]
pub struct PlanHeader {
    pub title: String,
    pub pages: u32,
    /// Page the cover links to: the empty-board state, or the build root when
    /// the empty board was collapsed away (vs-AI with O moving first).
    pub entry_page: u32,
    /// Print mode: the renderer prints destination page numbers into the
    /// clickable regions instead of emitting hyperlinks.
    pub print_mode: bool,
    pub first_player: char,
    pub ai_opponent: bool,
}

/// A clickable region: the empty cell and the page of the resulting state.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PlanLink {
    pub cell: u8,
    pub page: u32,
}

/// One page of the document, one reachable position.
#[derive(Debug, Clone, Serialize)]
pub struct PlanPage {
    pub page: u32,
    pub state_hash: String,
    /// 9-char row-major text form: 'X', 'O' or ' ' per cell.
    pub board: String,
    pub outcome: String,
    /// Upcoming player's mark; absent on terminal pages where it carries no
    /// meaning.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_move: Option<char>,
    /// One link per empty cell, ascending cell order. Empty on terminal pages.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<PlanLink>,
    /// Game-over overlay text for terminal pages; such pages link back to the
    /// cover instead of carrying per-cell links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_over: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RenderPlan {
    pub header: PlanHeader,
    pub pages: Vec<PlanPage>,
}

#[inline]
fn outcome_label(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::InProgress => "in_progress",
        Outcome::Win(Player::X) => "x_wins",
        Outcome::Win(Player::O) => "o_wins",
        Outcome::Draw => "draw",
    }
}

#[inline]
fn game_over_message(outcome: Outcome) -> Option<&'static str> {
    match outcome {
        Outcome::InProgress => None,
        Outcome::Win(Player::X) => Some("X Won!"),
        Outcome::Win(Player::O) => Some("O Won!"),
        Outcome::Draw => Some("A draw. Wow."),
    }
}

/// Assign page numbers in discovery order (pages count from 1) and resolve
/// every successor link to its destination page.
///
/// Fails only if a non-terminal node's successor list disagrees with its
/// empty-cell count, which the builder's invariants rule out.
pub fn assemble(graph: &StateGraph, print_mode: bool) -> Result<RenderPlan, String> {
    let options = graph.options();

    let mut pages = Vec::with_capacity(graph.len());
    for (id, node) in graph.iter() {
        let page = id + 1;

        let empty_cells: Vec<u8> = (0u8..9).filter(|&c| node.board.is_empty(c)).collect();
        let links = if node.is_terminal() {
            Vec::new()
        } else {
            if empty_cells.len() != node.successors.len() {
                return Err(format!(
                    "Page {page}: {} empty cells but {} successors",
                    empty_cells.len(),
                    node.successors.len()
                ));
            }
            empty_cells
                .iter()
                .zip(node.successors.iter())
                .map(|(&cell, &succ)| PlanLink {
                    cell,
                    page: succ + 1,
                })
                .collect()
        };

        pages.push(PlanPage {
            page,
            state_hash: format!("{:08x}", board_key(&node.board)),
            board: node.board.to_text(),
            outcome: outcome_label(node.outcome).to_string(),
            to_move: (!node.is_terminal()).then(|| node.next.mark()),
            links,
            game_over: game_over_message(node.outcome).map(str::to_string),
        });
    }

    // Navigation entry: the all-empty board when it exists as a page.
    let entry = graph
        .find(&crate::board::Board::new())
        .unwrap_or_else(|| graph.root());

    Ok(RenderPlan {
        header: PlanHeader {
            title: DOC_TITLE.to_string(),
            pages: pages.len() as u32,
            entry_page: entry + 1,
            print_mode,
            first_player: options.first_player.mark(),
            ai_opponent: options.ai_opponent,
        },
        pages,
    })
}
