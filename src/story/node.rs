use serde::{Deserialize, Serialize};

/// A single node in the story graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryNode {
    /// Unique identifier for this node (e.g. "start", "forest_path").
    pub id: String,
    /// The narrative prose shown when the player reaches this node.
    pub text: String,
    /// Terminal (with an ending) or a decision point (with choices).
    pub kind: NodeKind,
}

/// What kind of node this is. Encoding the distinction as an enum means a
/// terminal node structurally cannot carry choices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum NodeKind {
    /// The story ends here, classified by an [`Ending`].
    Terminal(Ending),
    /// The player picks one of these by 1-based number. Vector order is
    /// the presentation order.
    Decision(Vec<Choice>),
}

/// A labeled option on a decision node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    /// What the player reads as the option.
    pub label: String,
    /// ID of the node this choice leads to. Must exist in the graph.
    pub target: String,
}

/// The closed set of ending classifications. Adding one is a data change
/// here plus a row in the presentation banner table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ending {
    Victory,
    Defeat,
    Mystery,
    Wisdom,
    /// Fallback classification for endings that fit no other category.
    Other,
}

impl StoryNode {
    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, NodeKind::Terminal(_))
    }

    /// The ending classification, when this node is terminal.
    pub fn ending(&self) -> Option<Ending> {
        match self.kind {
            NodeKind::Terminal(ending) => Some(ending),
            NodeKind::Decision(_) => None,
        }
    }

    /// The choices offered here; empty for terminal nodes.
    pub fn choices(&self) -> &[Choice] {
        match &self.kind {
            NodeKind::Terminal(_) => &[],
            NodeKind::Decision(choices) => choices,
        }
    }
}
