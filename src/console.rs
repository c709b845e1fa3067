use std::io::{self, BufRead, Write};

use crate::error::InvalidChoice;
use crate::story::node::{Choice, Ending};

/// Width the story prose is wrapped to.
const WRAP_WIDTH: usize = 70;

// ---------------------------------------------------------------------------
// Input adapter
// ---------------------------------------------------------------------------

/// The single input capability the game needs: one line of text at a time.
pub trait InputSource {
    fn next_line(&mut self) -> io::Result<String>;
}

/// Reads lines from stdin.
pub struct ConsoleInput;

impl InputSource for ConsoleInput {
    fn next_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            // Closed stdin would otherwise spin the retry loop forever.
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
        }
        Ok(line)
    }
}

/// Test double: serves a fixed sequence of lines, then empty strings.
#[cfg(test)]
pub struct ScriptedInput {
    lines: std::collections::VecDeque<String>,
}

#[cfg(test)]
impl ScriptedInput {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
impl InputSource for ScriptedInput {
    fn next_line(&mut self) -> io::Result<String> {
        Ok(self.lines.pop_front().unwrap_or_default())
    }
}

// ---------------------------------------------------------------------------
// Presentation adapter
// ---------------------------------------------------------------------------

/// Renders the game to any writer. Owns all formatting decisions: wrap
/// width, border characters, banner wording.
pub struct Presenter<W: Write> {
    out: W,
}

impl<W: Write> Presenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn welcome(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", "=".repeat(60))?;
        writeln!(self.out, "      WELCOME TO THE ENCHANTED FOREST ADVENTURE")?;
        writeln!(self.out, "{}", "=".repeat(60))?;
        writeln!(
            self.out,
            "Your choices will determine your fate in this magical world..."
        )?;
        writeln!(self.out)
    }

    /// The story prose, word-wrapped between horizontal rules.
    pub fn story_block(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", "-".repeat(50))?;
        for line in wrap(text, WRAP_WIDTH) {
            writeln!(self.out, "{line}")?;
        }
        writeln!(self.out, "{}", "-".repeat(50))
    }

    pub fn choice_list(&mut self, choices: &[Choice]) -> io::Result<()> {
        writeln!(self.out, "\nWhat do you choose?")?;
        for (i, choice) in choices.iter().enumerate() {
            writeln!(self.out, "{}. {}", i + 1, choice.label)?;
        }
        Ok(())
    }

    pub fn choice_prompt(&mut self, count: usize) -> io::Result<()> {
        write!(self.out, "\nEnter your choice (1-{count}): ")?;
        self.out.flush()
    }

    /// Echo the option the player picked.
    pub fn selected(&mut self, label: &str) -> io::Result<()> {
        writeln!(self.out, "\n> {label}")
    }

    /// Corrective message for a rejected choice input. The two failure
    /// kinds get distinct wording.
    pub fn retry_notice(&mut self, error: &InvalidChoice, count: usize) -> io::Result<()> {
        match error {
            InvalidChoice::NotANumber => writeln!(self.out, "Please enter a valid number."),
            InvalidChoice::OutOfRange { .. } => writeln!(
                self.out,
                "Invalid choice. Please select a number between 1 and {count}"
            ),
        }
    }

    pub fn ending_banner(&mut self, ending: Ending) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", "*".repeat(60))?;
        writeln!(self.out, "{}", banner_line(ending))?;
        writeln!(self.out, "{}", "*".repeat(60))
    }

    pub fn replay_prompt(&mut self) -> io::Result<()> {
        write!(
            self.out,
            "\nWould you like to try a different path? (yes/y or no/n): "
        )?;
        self.out.flush()
    }

    pub fn restart_banner(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n{}", "=".repeat(60))?;
        writeln!(self.out, "Starting a new adventure...")?;
        writeln!(self.out, "{}", "=".repeat(60))
    }

    pub fn farewell(&mut self) -> io::Result<()> {
        writeln!(
            self.out,
            "\nThank you for playing! May your real adventures be as exciting!"
        )
    }
}

/// Banner wording per ending kind. Adding an ending means adding a row
/// here and a variant on [`Ending`], nothing else.
fn banner_line(ending: Ending) -> &'static str {
    match ending {
        Ending::Victory => "           CONGRATULATIONS! YOU ACHIEVED VICTORY!",
        Ending::Defeat => "              GAME OVER - Better luck next time!",
        Ending::Mystery => "        THE MYSTERY CONTINUES... What happens next?",
        Ending::Wisdom => "           YOU HAVE GAINED GREAT WISDOM!",
        Ending::Other => "                    THE END",
    }
}

/// Greedy word wrap on spaces. A word longer than `width` gets a line of
/// its own rather than being split.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + word.len() + 1 > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_keeps_lines_within_width() {
        let text = "You find yourself standing at the edge of an ancient, mystical forest \
                    where the trees tower above you and very little sunlight gets through.";
        let lines = wrap(text, 70);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.len() <= 70, "line too long: {line:?}");
        }
        // No words lost in the process.
        let rejoined = lines.join(" ");
        assert_eq!(rejoined, text.split_whitespace().collect::<Vec<_>>().join(" "));
    }

    #[test]
    fn wrap_of_short_text_is_a_single_line() {
        assert_eq!(wrap("hello there", 70), vec!["hello there".to_string()]);
    }

    #[test]
    fn wrap_puts_overlong_words_on_their_own_line() {
        let lines = wrap("a Llanfairpwllgwyngyllgogerychwyrndrobwllllantysiliogogogoch b", 10);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "a");
        assert_eq!(lines[2], "b");
    }

    #[test]
    fn every_ending_has_a_banner() {
        for ending in [
            Ending::Victory,
            Ending::Defeat,
            Ending::Mystery,
            Ending::Wisdom,
            Ending::Other,
        ] {
            assert!(!banner_line(ending).trim().is_empty());
        }
    }

    #[test]
    fn story_block_draws_borders_around_wrapped_text() {
        let mut buf = Vec::new();
        Presenter::new(&mut buf).story_block("A quiet clearing.").unwrap();
        let rendered = String::from_utf8(buf).unwrap();
        assert!(rendered.contains(&"-".repeat(50)));
        assert!(rendered.contains("A quiet clearing."));
    }

    #[test]
    fn scripted_input_returns_lines_then_empties() {
        let mut input = ScriptedInput::new(&["1", "no"]);
        assert_eq!(input.next_line().unwrap(), "1");
        assert_eq!(input.next_line().unwrap(), "no");
        assert_eq!(input.next_line().unwrap(), "");
    }
}
