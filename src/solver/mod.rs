pub mod graph;
pub mod minimax;

pub use graph::{build_graph, BuildOptions, GameNode, NodeId, StateGraph};
pub use minimax::{evaluate, Evaluation};
