//! Computer opponents.
//!
//! - [`Fish`]: throws uniformly at random from an owned RNG
//! - `Rigged`: replays a fixed script of throws (tests only)
mod fish;
#[cfg(test)]
mod rigged;

pub use fish::*;
#[cfg(test)]
pub use rigged::*;

use crate::choice::Choice;

/// Anything that can throw a hand without asking the console.
pub trait Opponent {
    fn throw(&mut self) -> Choice;
}
