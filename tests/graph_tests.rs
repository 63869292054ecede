use hashbrown::HashSet;

use tictacpress::hash::{board_key, key_to_board};
use tictacpress::solver::graph::{build_graph, build_graph_from, BuildOptions, StateGraph};
use tictacpress::solver::minimax::evaluate;
use tictacpress::{classify, Board, Outcome, Player};

fn assert_graph_invariants(graph: &StateGraph) {
    let mut seen_keys: HashSet<u32> = HashSet::new();

    for (id, node) in graph.iter() {
        // Dedup: no two nodes share board content, and keys decode back.
        let key = board_key(&node.board);
        assert!(seen_keys.insert(key), "duplicate board at node {id}");
        assert_eq!(key_to_board(key).expect("decode"), node.board);

        // Exactly one classification holds, and it matches the board.
        assert_eq!(node.outcome, classify(&node.board, node.next));

        // successors non-empty iff in progress.
        match node.outcome {
            Outcome::InProgress => assert!(
                !node.successors.is_empty(),
                "in-progress node {id} has no successors"
            ),
            _ => assert!(
                node.successors.is_empty(),
                "terminal node {id} has successors"
            ),
        }

        for &succ in &node.successors {
            assert!((succ as usize) < graph.len(), "dangling successor on {id}");
        }
    }
}

#[test]
fn full_enumeration_reaches_the_classical_state_count() {
    let graph = build_graph(BuildOptions::default()).expect("build");
    assert_eq!(graph.len(), 5478);

    let totals = graph.totals_by_depth();
    assert_eq!(totals[0], 1);
    assert_eq!(totals.iter().sum::<u64>(), 5478);

    assert_graph_invariants(&graph);
}

#[test]
fn successors_follow_ascending_empty_cells() {
    let graph = build_graph(BuildOptions::default()).expect("build");

    for (_, node) in graph.iter() {
        if node.outcome != Outcome::InProgress {
            continue;
        }
        let empty_cells: Vec<u8> = (0u8..9).filter(|&c| node.board.is_empty(c)).collect();
        assert_eq!(empty_cells.len(), node.successors.len());

        // Without AI collapse, the i-th successor is exactly the board with
        // the i-th empty cell filled by the mover.
        for (&cell, &succ) in empty_cells.iter().zip(node.successors.iter()) {
            let child_board = node.board.place(cell, node.next);
            assert_eq!(graph.find(&child_board), Some(succ));
        }
    }
}

#[test]
fn root_is_the_empty_board() {
    let graph = build_graph(BuildOptions::default()).expect("build");
    let root = graph.node(graph.root());
    assert_eq!(root.board, Board::new());
    assert_eq!(root.next, Player::X);
    assert_eq!(graph.find(&Board::new()), Some(graph.root()));

    let root_state = graph.state_of(graph.root());
    assert!(!tictacpress::is_terminal(&root_state));
    assert_eq!(tictacpress::legal_moves(&root_state).len(), 9);
}

#[test]
fn rebuilds_are_isomorphic() {
    let a = build_graph(BuildOptions::default()).expect("build");
    let b = build_graph(BuildOptions::default()).expect("build");

    assert_eq!(a.len(), b.len());
    for (_, node) in a.iter() {
        let other_id = b.find(&node.board).expect("board present in both builds");
        let other = b.node(other_id);
        assert_eq!(node.outcome, other.outcome);
        assert_eq!(node.successors.len(), other.successors.len());
    }
}

#[test]
fn o_first_build_is_internally_consistent() {
    let graph = build_graph(BuildOptions {
        first_player: Player::O,
        ai_opponent: false,
    })
    .expect("build");

    // X<->O mirror of the X-first space.
    assert_eq!(graph.len(), 5478);
    assert_graph_invariants(&graph);
    assert_eq!(graph.node(graph.root()).next, Player::O);
}

#[test]
fn terminal_initial_board_is_a_single_node() {
    let drawn = Board::from_text("XOXXOOOXO").expect("parse");
    let graph = build_graph_from(drawn, BuildOptions::default()).expect("build");
    assert_eq!(graph.len(), 1);
    let root = graph.node(graph.root());
    assert_eq!(root.outcome, Outcome::Draw);
    assert!(root.successors.is_empty());
}

#[test]
fn ai_mode_materialises_no_o_turn_positions() {
    let graph = build_graph(BuildOptions {
        first_player: Player::X,
        ai_opponent: true,
    })
    .expect("build");

    assert_graph_invariants(&graph);
    assert!(graph.len() < 5478, "collapse must shrink the space");

    for (id, node) in graph.iter() {
        if node.next == Player::O {
            assert!(
                node.is_terminal(),
                "node {id} is O-to-move but was not collapsed"
            );
        }
    }
}

#[test]
fn ai_mode_links_through_the_optimal_reply() {
    let graph = build_graph(BuildOptions {
        first_player: Player::X,
        ai_opponent: true,
    })
    .expect("build");

    let root = graph.node(graph.root());
    assert_eq!(root.board, Board::new());

    // X opens in the corner (cell 0); O's only drawing reply is the center,
    // so the linked successor is the board after both marks.
    let after_corner = graph.node(root.successors[0]);
    assert_eq!(
        after_corner.board,
        Board::from_text("X   O    ").expect("parse")
    );
    assert_eq!(after_corner.next, Player::X);

    // Every X-to-move successor agrees with an independently recomputed reply.
    for (_, node) in graph.iter() {
        if node.outcome != Outcome::InProgress {
            continue;
        }
        let empty_cells: Vec<u8> = (0u8..9).filter(|&c| node.board.is_empty(c)).collect();
        for (&cell, &succ) in empty_cells.iter().zip(node.successors.iter()) {
            let after_x = node.board.place(cell, Player::X);
            let expected = if after_x.winning_player().is_some() || after_x.is_full() {
                after_x
            } else {
                let reply = evaluate(&after_x, Player::O)
                    .best_cell
                    .expect("non-terminal reply");
                after_x.place(reply, Player::O)
            };
            assert_eq!(graph.node(succ).board, expected);
        }
    }
}

#[test]
fn ai_mode_with_o_first_collapses_the_empty_board() {
    let graph = build_graph(BuildOptions {
        first_player: Player::O,
        ai_opponent: true,
    })
    .expect("build");

    // The empty board itself is skipped; the root is O's opening reply
    // (all openings draw, tie-break keeps cell 0).
    assert_eq!(graph.find(&Board::new()), None);
    let root = graph.node(graph.root());
    assert_eq!(root.board, Board::from_text("O        ").expect("parse"));
    assert_eq!(root.next, Player::X);
    assert_graph_invariants(&graph);
}
