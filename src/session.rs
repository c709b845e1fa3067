use std::io::Write;

use anyhow::Result;
use log::{debug, info};

use crate::console::{InputSource, Presenter};
use crate::engine::Traversal;
use crate::error::{AdvanceError, InvalidChoice};
use crate::story::node::{Ending, NodeKind};
use crate::story::StoryGraph;

// ---------------------------------------------------------------------------
// Choice input resolution
// ---------------------------------------------------------------------------

/// Parse a raw input line into a candidate 1-based choice index. Range
/// checking is the engine's job; this only rejects non-numbers.
fn resolve_choice(raw: &str) -> Result<usize, InvalidChoice> {
    raw.trim().parse().map_err(|_| InvalidChoice::NotANumber)
}

/// Replay policy: after trimming and lowercasing, exactly "yes" or "y"
/// means play again. Everything else, including an empty line, means stop.
fn wants_replay(raw: &str) -> bool {
    matches!(raw.trim().to_lowercase().as_str(), "yes" | "y")
}

// ---------------------------------------------------------------------------
// Single playthrough
// ---------------------------------------------------------------------------

/// Walk the story from the engine's current position to a terminal node.
///
/// Bad input never ends the playthrough: both unparsable lines and
/// out-of-range numbers re-prompt (without re-printing the story text)
/// until a valid choice arrives. Retries are unbounded.
fn play_story<W: Write>(
    engine: &mut Traversal,
    input: &mut dyn InputSource,
    presenter: &mut Presenter<W>,
) -> Result<Ending> {
    loop {
        let node = engine.current_node()?.clone();
        presenter.story_block(&node.text)?;

        let choices = match &node.kind {
            NodeKind::Terminal(ending) => {
                info!("Playthrough ended at {} ({ending:?})", node.id);
                presenter.ending_banner(*ending)?;
                return Ok(*ending);
            }
            NodeKind::Decision(choices) => choices,
        };

        presenter.choice_list(choices)?;

        // Prompt until one of the offered numbers comes in.
        loop {
            presenter.choice_prompt(choices.len())?;
            let raw = input.next_line()?;
            debug!("Raw choice input: {:?}", raw.trim_end());

            let index = match resolve_choice(&raw) {
                Ok(index) => index,
                Err(err) => {
                    presenter.retry_notice(&err, choices.len())?;
                    continue;
                }
            };

            match engine.advance(index) {
                Ok(_) => {
                    presenter.selected(&choices[index - 1].label)?;
                    break;
                }
                Err(AdvanceError::InvalidChoice(err)) => {
                    presenter.retry_notice(&err, choices.len())?;
                }
                Err(AdvanceError::Integrity(err)) => return Err(err.into()),
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry point — plays adventures until the player declines a replay
// ---------------------------------------------------------------------------

pub fn run<W: Write>(
    graph: &StoryGraph,
    input: &mut dyn InputSource,
    presenter: &mut Presenter<W>,
) -> Result<()> {
    let mut engine = Traversal::new(graph);

    presenter.welcome()?;
    info!("Session started at node: {}", engine.current_id());

    loop {
        play_story(&mut engine, input, presenter)?;
        debug_assert!(engine.is_terminal());
        info!("Adventure finished with {:?}", engine.ending());

        presenter.replay_prompt()?;
        let answer = input.next_line()?;
        if !wants_replay(&answer) {
            break;
        }

        info!("Player chose to replay");
        engine.reset();
        presenter.restart_banner()?;
    }

    presenter.farewell()?;
    Ok(())
}
