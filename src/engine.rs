use log::{debug, info};

use crate::error::{AdvanceError, IntegrityError, InvalidChoice};
use crate::story::node::{Ending, NodeKind, StoryNode};
use crate::story::StoryGraph;

// ---------------------------------------------------------------------------
// Traversal engine
// ---------------------------------------------------------------------------

/// Walks a [`StoryGraph`] one choice at a time. The only mutable state is
/// the current-position cursor; nodes themselves are never touched.
pub struct Traversal<'a> {
    graph: &'a StoryGraph,
    current: String,
}

impl<'a> Traversal<'a> {
    /// Start a traversal at the graph's designated start node.
    pub fn new(graph: &'a StoryGraph) -> Self {
        Self {
            graph,
            current: graph.start().to_string(),
        }
    }

    /// The node at the current position. Only fails on a cursor that no
    /// longer resolves, which a validated graph rules out.
    pub fn current_node(&self) -> Result<&StoryNode, IntegrityError> {
        self.graph
            .get(&self.current)
            .ok_or_else(|| IntegrityError::MissingNode(self.current.clone()))
    }

    pub fn current_id(&self) -> &str {
        &self.current
    }

    pub fn is_terminal(&self) -> bool {
        self.current_node().map(|n| n.is_terminal()).unwrap_or(false)
    }

    /// The ending classification, once a terminal node has been reached.
    pub fn ending(&self) -> Option<Ending> {
        self.current_node().ok().and_then(|n| n.ending())
    }

    /// Take the choice with the given 1-based index on the current node.
    ///
    /// On success the cursor moves to the choice's target and the new node
    /// is returned. An index that is not offered (including any index on a
    /// terminal node) leaves the cursor untouched and is recoverable. The
    /// next state comes only from the explicit choice mapping; there is no
    /// fallthrough of any kind.
    pub fn advance(&mut self, index: usize) -> Result<&'a StoryNode, AdvanceError> {
        let node = self.current_node()?;

        let choices = match &node.kind {
            NodeKind::Decision(choices) => choices,
            NodeKind::Terminal(_) => {
                debug!("advance({index}) called on terminal node {}", node.id);
                return Err(InvalidChoice::OutOfRange { given: index, max: 0 }.into());
            }
        };

        let choice = match index.checked_sub(1).and_then(|i| choices.get(i)) {
            Some(choice) => choice,
            None => {
                debug!(
                    "choice {index} not offered at {} (1-{} available)",
                    node.id,
                    choices.len()
                );
                return Err(InvalidChoice::OutOfRange {
                    given: index,
                    max: choices.len(),
                }
                .into());
            }
        };

        let target = choice.target.clone();
        let next = self
            .graph
            .get(&target)
            .ok_or_else(|| IntegrityError::MissingNode(target.clone()))?;

        info!("Transition: {} -> {}", self.current, target);
        self.current = target;
        Ok(next)
    }

    /// Put the cursor back at the graph's start node for a fresh
    /// playthrough. Replays always restart from the same designated start.
    pub fn reset(&mut self) {
        info!("Resetting to start node: {}", self.graph.start());
        self.current = self.graph.start().to_string();
    }
}
