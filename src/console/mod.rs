//! Where the human sits.
//!
//! The game loop only talks to a [`Console`]; it doesn't care whether the
//! keystrokes come from an interactive terminal or a pipe.
//!
//! - [`Terminal`]: interactive TTY via `dialoguer`
//! - [`Lines`]: plain line-oriented reader/writer pair (pipes, tests)
mod lines;
mod terminal;

pub use lines::*;
pub use terminal::*;

use crate::choice::Choice;

/// Blocking, line-at-a-time interaction with the human player.
///
/// Bad input never escapes an implementation: `choice` and `proceed` keep
/// reprompting until they get something valid. Errors are reserved for the
/// stream itself failing or closing.
pub trait Console {
    /// Show the options and read a valid throw.
    fn choice(&mut self) -> anyhow::Result<Choice>;
    /// Ask whether to play another round.
    fn proceed(&mut self) -> anyhow::Result<bool>;
    /// Print a block of text followed by a newline.
    fn show(&mut self, text: &str) -> anyhow::Result<()>;
    /// Wipe the screen between rounds. No-op where that means nothing.
    fn clear(&mut self) -> anyhow::Result<()>;
}

/// Prompt shown when asking for a throw.
pub const CHOICE_PROMPT: &str = "👤 Your turn (1-3)";
/// Prompt shown at the end of every round.
pub const AGAIN_PROMPT: &str = "🔄 Do you want to play again? (Y/N)";

/// Which [`Console`] a process should drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Terminal,
    Lines,
}

impl Mode {
    /// Inspect the process's own stdin and stdout.
    pub fn detect() -> Self {
        use std::io::IsTerminal;
        Self::from((
            std::io::stdin().is_terminal(),
            std::io::stdout().is_terminal(),
        ))
    }
}

/// `dialoguer` needs a terminal on both ends: redirecting either side
/// falls back to plain lines.
impl From<(bool, bool)> for Mode {
    fn from((stdin, stdout): (bool, bool)) -> Self {
        match (stdin, stdout) {
            (true, true) => Self::Terminal,
            _ => Self::Lines,
        }
    }
}
