use crate::choice::Choice;

/// Result of one round, always from the human player's point of view.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    PlayerWin,
    ComputerWin,
    Tie,
}

impl Outcome {
    /// Applies the beats-relation to a pair of throws.
    pub fn decide(player: Choice, computer: Choice) -> Self {
        match (player, computer) {
            (p, c) if p == c => Self::Tie,
            (p, c) if p.beats(&c) => Self::PlayerWin,
            _ => Self::ComputerWin,
        }
    }
}

impl From<(Choice, Choice)> for Outcome {
    fn from((player, computer): (Choice, Choice)) -> Self {
        Self::decide(player, computer)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PlayerWin => write!(f, "player"),
            Self::ComputerWin => write!(f, "computer"),
            Self::Tie => write!(f, "tie"),
        }
    }
}
