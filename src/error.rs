use thiserror::Error;

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------
//
// Two categories exist. Integrity errors mean the story data itself is
// broken and the session cannot continue. Invalid choices are the normal
// result of the player typing something unexpected and are always handled
// by re-prompting.

/// Fatal: the story graph is malformed. With `StoryGraph::validate` run at
/// startup, none of these should ever surface mid-session.
#[derive(Debug, Error)]
pub enum IntegrityError {
    /// The designated start id is not a node in the graph.
    #[error("start node \"{0}\" does not exist in the story graph")]
    MissingStart(String),

    /// The current-position cursor points at an id with no node behind it.
    #[error("story node \"{0}\" does not exist in the story graph")]
    MissingNode(String),

    /// Load-time validation report. Each entry describes one violation
    /// (dangling choice target or a decision node with no choices).
    #[error("story graph failed validation:\n  {}", .0.join("\n  "))]
    Malformed(Vec<String>),
}

/// Recoverable: the player's input did not resolve to an offered choice.
/// The session re-prompts; this never terminates a playthrough.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidChoice {
    /// The raw line did not parse as an integer.
    #[error("input was not a number")]
    NotANumber,

    /// Parsed fine, but is not a key in the current node's choice set.
    #[error("choice {given} is not between 1 and {max}")]
    OutOfRange { given: usize, max: usize },
}

/// Everything `Traversal::advance` can fail with.
#[derive(Debug, Error)]
pub enum AdvanceError {
    #[error(transparent)]
    Integrity(#[from] IntegrityError),

    #[error(transparent)]
    InvalidChoice(#[from] InvalidChoice),
}
