pub mod forest;
pub mod graph;
pub mod node;

pub use graph::StoryGraph;
pub use node::{Choice, Ending, NodeKind, StoryNode};
