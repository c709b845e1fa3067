use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::IntegrityError;
use crate::story::node::{NodeKind, StoryNode};

/// The full story: a map of node-id -> StoryNode plus the designated
/// start id. Built once at startup and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryGraph {
    pub nodes: HashMap<String, StoryNode>,
    pub start_id: String,
}

impl StoryGraph {
    /// Build a graph from a flat node list. Node ids become the map keys.
    pub fn from_nodes(start_id: impl Into<String>, nodes: Vec<StoryNode>) -> Self {
        let mut map = HashMap::new();
        for node in nodes {
            map.insert(node.id.clone(), node);
        }
        Self {
            nodes: map,
            start_id: start_id.into(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&StoryNode> {
        self.nodes.get(id)
    }

    pub fn start(&self) -> &str {
        &self.start_id
    }

    /// Walk the whole graph and confirm it is playable: the start id
    /// resolves, every decision node offers at least one choice, and every
    /// choice target points at an existing node. All violations are
    /// collected so a broken graph is reported in one pass rather than one
    /// dangling reference at a time.
    pub fn validate(&self) -> Result<(), IntegrityError> {
        if !self.nodes.contains_key(&self.start_id) {
            return Err(IntegrityError::MissingStart(self.start_id.clone()));
        }

        let mut problems = Vec::new();

        for (id, node) in &self.nodes {
            match &node.kind {
                NodeKind::Terminal(_) => {}
                NodeKind::Decision(choices) => {
                    if choices.is_empty() {
                        problems.push(format!("node \"{id}\" offers no choices"));
                    }
                    for (i, choice) in choices.iter().enumerate() {
                        if !self.nodes.contains_key(&choice.target) {
                            problems.push(format!(
                                "node \"{id}\" choice {} leads to unknown node \"{}\"",
                                i + 1,
                                choice.target
                            ));
                        }
                    }
                }
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            problems.sort();
            Err(IntegrityError::Malformed(problems))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::forest::enchanted_forest;
    use crate::story::node::{Choice, Ending};

    fn decision(id: &str, targets: &[&str]) -> StoryNode {
        StoryNode {
            id: id.into(),
            text: format!("You are at {id}."),
            kind: NodeKind::Decision(
                targets
                    .iter()
                    .map(|t| Choice {
                        label: format!("Go to {t}"),
                        target: (*t).into(),
                    })
                    .collect(),
            ),
        }
    }

    fn terminal(id: &str, ending: Ending) -> StoryNode {
        StoryNode {
            id: id.into(),
            text: format!("The end at {id}."),
            kind: NodeKind::Terminal(ending),
        }
    }

    #[test]
    fn shipped_story_is_valid() {
        let graph = enchanted_forest();
        graph.validate().expect("shipped story must validate");
        assert!(graph.get(graph.start()).is_some());
    }

    #[test]
    fn shipped_story_nodes_are_well_formed() {
        let graph = enchanted_forest();
        for node in graph.nodes.values() {
            if node.is_terminal() {
                assert!(node.choices().is_empty(), "terminal {} has choices", node.id);
                assert!(node.ending().is_some());
            } else {
                assert!(
                    !node.choices().is_empty(),
                    "decision {} has no choices",
                    node.id
                );
                for choice in node.choices() {
                    assert!(
                        graph.get(&choice.target).is_some(),
                        "{} -> {} dangles",
                        node.id,
                        choice.target
                    );
                }
            }
        }
    }

    #[test]
    fn missing_start_is_rejected() {
        let graph = StoryGraph::from_nodes("nowhere", vec![terminal("end", Ending::Other)]);
        match graph.validate() {
            Err(IntegrityError::MissingStart(id)) => assert_eq!(id, "nowhere"),
            other => panic!("expected MissingStart, got {other:?}"),
        }
    }

    #[test]
    fn dangling_choice_target_is_named_in_the_report() {
        let graph = StoryGraph::from_nodes(
            "start",
            vec![decision("start", &["ghost"]), terminal("end", Ending::Victory)],
        );
        let err = graph.validate().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("ghost"), "report was: {message}");
        assert!(message.contains("start"), "report was: {message}");
    }

    #[test]
    fn empty_decision_node_is_rejected() {
        let graph = StoryGraph::from_nodes("start", vec![decision("start", &[])]);
        let err = graph.validate().unwrap_err();
        assert!(err.to_string().contains("offers no choices"));
    }

    #[test]
    fn all_violations_are_collected_in_one_report() {
        let graph = StoryGraph::from_nodes(
            "start",
            vec![decision("start", &["a", "b"]), decision("stuck", &[])],
        );
        match graph.validate() {
            Err(IntegrityError::Malformed(problems)) => assert_eq!(problems.len(), 3),
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn graph_loads_from_json() {
        let json = r#"{
            "start_id": "start",
            "nodes": {
                "start": {
                    "id": "start",
                    "text": "A fork in the road.",
                    "kind": { "Decision": [
                        { "label": "Left", "target": "end" }
                    ] }
                },
                "end": {
                    "id": "end",
                    "text": "You made it.",
                    "kind": { "Terminal": "Victory" }
                }
            }
        }"#;
        let graph: StoryGraph = serde_json::from_str(json).unwrap();
        graph.validate().unwrap();
        assert_eq!(graph.get("end").unwrap().ending(), Some(Ending::Victory));
    }
}
