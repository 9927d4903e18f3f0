//! Rock Paper Scissors against the computer, in the terminal.
//!
//! ## Modules
//!
//! - [`choice`]: the three hands, their art, and the beats-relation
//! - [`outcome`]: who won a single round
//! - [`score`]: running tally owned by the game loop
//! - [`answer`]: parsing the play-again reply
//! - [`players`]: computer opponents
//! - [`console`]: reading and validating human input
//! - [`render`]: pure formatting of everything printed
//! - [`game`]: the round-by-round state machine
//! - [`args`]: command-line flags
pub mod answer;
pub mod args;
pub mod choice;
pub mod console;
pub mod game;
pub mod outcome;
pub mod players;
pub mod render;
pub mod score;

pub use choice::Choice;
pub use game::Game;
pub use outcome::Outcome;
pub use score::Score;

/// Initialize terminal logging on stderr.
/// Location, target and thread columns are switched off to keep lines short.
pub fn log(level: log::LevelFilter) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}
