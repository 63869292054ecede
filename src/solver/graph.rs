// Recursive full-graph enumeration with content-addressed dedup.
//
// The reachable positions of tic-tac-toe form a DAG with shared descendants
// (transpositions), not a tree, so nodes live in an arena and successors hold
// arena indices. The dedup index maps packed board keys to node ids; a board
// is inserted before its children are expanded so transpositions through
// shared descendants terminate on lookup.

use std::hash::BuildHasherDefault;

use hashbrown::HashMap as HbHashMap;

use crate::board::Board;
use crate::hash::board_key;
use crate::solver::minimax;
use crate::state::GameState;
use crate::types::{Outcome, Player};

type FastHasher = BuildHasherDefault<ahash::AHasher>;
type DedupIndex = HbHashMap<u32, NodeId, FastHasher>;

pub type NodeId = u32;

/// One distinct reachable position plus its classification and ordered links.
///
/// `successors` is parallel to the board's empty cells in ascending cell
/// order: the i-th successor is the position after the mover fills the i-th
/// empty cell. Empty for terminal nodes. In vs-AI builds the linked node for
/// an X move is the position after O's forced reply, not the O-to-move board
/// itself.
#[derive(Debug, Clone)]
pub struct GameNode {
    pub board: Board,
    pub next: Player,
    pub outcome: Outcome,
    pub successors: Vec<NodeId>,
}

impl GameNode {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BuildOptions {
    pub first_player: Player,
    /// When true, O's turns are collapsed: instead of enumerating O's legal
    /// moves, only the single minimax-optimal reply is materialised.
    pub ai_opponent: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            first_player: Player::X,
            ai_opponent: false,
        }
    }
}

/// The finished graph: arena of nodes plus the content-keyed dedup index.
/// Built once per run, never mutated afterwards.
#[derive(Debug)]
pub struct StateGraph {
    nodes: Vec<GameNode>,
    index: DedupIndex,
    root: NodeId,
    options: BuildOptions,
}

impl StateGraph {
    #[inline]
    pub fn node(&self, id: NodeId) -> &GameNode {
        &self.nodes[id as usize]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node the build started from. This is the empty-board state except in
    /// vs-AI builds where O moves first (the empty board is then collapsed
    /// into the position after O's opening reply).
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[inline]
    pub fn options(&self) -> BuildOptions {
        self.options
    }

    /// O(1) content lookup, used by the renderer to find the designated
    /// empty-board entry state.
    #[inline]
    pub fn find(&self, board: &Board) -> Option<NodeId> {
        self.index.get(&board_key(board)).copied()
    }

    /// Nodes in discovery order, which is deterministic because cell
    /// iteration is fixed ascending.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &GameNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (i as NodeId, n))
    }

    /// State counts bucketed by filled-cell depth 0..=9.
    pub fn totals_by_depth(&self) -> [u64; 10] {
        let mut totals = [0u64; 10];
        for node in &self.nodes {
            totals[node.board.filled_count() as usize] += 1;
        }
        totals
    }
}

/// Enumerate every position reachable from the empty board.
pub fn build_graph(options: BuildOptions) -> Result<StateGraph, String> {
    build_graph_from(Board::new(), options)
}

/// Enumerate every position reachable from `initial`, deduplicated by board
/// content. Fails only on an internal-consistency defect, never on input.
pub fn build_graph_from(initial: Board, options: BuildOptions) -> Result<StateGraph, String> {
    let mut builder = Builder {
        nodes: Vec::new(),
        index: DedupIndex::default(),
        ai_opponent: options.ai_opponent,
    };
    let root = builder.expand(initial, options.first_player)?;
    Ok(StateGraph {
        nodes: builder.nodes,
        index: builder.index,
        root,
        options,
    })
}

struct Builder {
    nodes: Vec<GameNode>,
    index: DedupIndex,
    ai_opponent: bool,
}

impl Builder {
    /// Recursive expansion with memoisation. Depth is hard-bounded at 9: every
    /// step fills a cell, so direct recursion is safe.
    fn expand(&mut self, board: Board, to_move: Player) -> Result<NodeId, String> {
        // Transposition: already materialised, no new node, no further work.
        if let Some(&id) = self.index.get(&board_key(&board)) {
            return Ok(id);
        }

        let outcome = crate::engine::score::classify(&board, to_move);

        // vs-AI collapse: skip the O-to-move board entirely and recurse into
        // the position after O's optimal reply. Terminal boards are excluded;
        // search on a terminal board has no move to return.
        if self.ai_opponent && to_move == Player::O && outcome == Outcome::InProgress {
            let eval = minimax::evaluate(&board, Player::O);
            let Some(cell) = eval.best_cell else {
                return Err(format!(
                    "Search returned no move for in-progress board [{}]",
                    board.to_text()
                ));
            };
            let replied = board.place(cell, Player::O);
            return self.expand(replied, Player::X);
        }

        // Insert before recursing so shared descendants see this node.
        let id = self.push_node(board, to_move, outcome)?;

        if outcome == Outcome::InProgress {
            let mut successors = Vec::with_capacity((9 - board.filled_count()) as usize);
            for cell in 0u8..9 {
                if !board.is_empty(cell) {
                    continue;
                }
                let child_board = board.place(cell, to_move);
                let child = self.expand(child_board, to_move.other())?;
                successors.push(child);
            }
            self.nodes[id as usize].successors = successors;
        }

        Ok(id)
    }

    fn push_node(&mut self, board: Board, next: Player, outcome: Outcome) -> Result<NodeId, String> {
        let id = u32::try_from(self.nodes.len())
            .map_err(|_| "Node arena exceeded u32 range".to_string())?;
        self.nodes.push(GameNode {
            board,
            next,
            outcome,
            successors: Vec::new(),
        });
        let prior = self.index.insert(board_key(&board), id);
        if prior.is_some() {
            return Err(format!(
                "Duplicate dedup entry for board [{}]",
                board.to_text()
            ));
        }
        Ok(id)
    }
}

// Convenience for tests and callers that think in states rather than boards.
impl StateGraph {
    pub fn state_of(&self, id: NodeId) -> GameState {
        let node = self.node(id);
        GameState::with_board(node.board, node.next)
    }
}
