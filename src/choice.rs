use rand::Rng;
use std::num::IntErrorKind;

const NOT_A_NUMBER: &str = "Please enter a valid number (1, 2, or 3)";
const OUT_OF_RANGE: &str = "Please enter a valid choice (1, 2, or 3)";

const ROCK: &str = r"
    _______
---'   ____)
      (_____)
      (_____)
      (____)
---.__(___)";

const PAPER: &str = r"
     _______
---'    ____)____
           ______)
          _______)
         _______)
---.__________)";

const SCISSORS: &str = r"
    _______
---'   ____)____
          ______)
       __________)
      (____)
---.__(___)";

/// One of the three hands a player can throw.
///
/// Menu numbers, labels, glyphs and art are associated data on the variant,
/// so nothing downstream compares against raw integers.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Choice {
    /// Beats Scissors, loses to Paper.
    Rock,
    /// Beats Rock, loses to Scissors.
    Paper,
    /// Beats Paper, loses to Rock.
    Scissors,
}

impl Choice {
    /// All three choices in menu order.
    pub const fn all() -> [Self; 3] {
        [Self::Rock, Self::Paper, Self::Scissors]
    }
    /// Position in the prompt menu, 1-based.
    pub const fn number(&self) -> u8 {
        match self {
            Self::Rock => 1,
            Self::Paper => 2,
            Self::Scissors => 3,
        }
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Rock => "Rock",
            Self::Paper => "Paper",
            Self::Scissors => "Scissors",
        }
    }
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::Rock => "🗿",
            Self::Paper => "📄",
            Self::Scissors => "✂️",
        }
    }
    /// Multi-line hand drawing, without leading or trailing newline.
    pub fn art(&self) -> &'static str {
        let art = match self {
            Self::Rock => ROCK,
            Self::Paper => PAPER,
            Self::Scissors => SCISSORS,
        };
        art.trim_start_matches('\n')
    }
    /// The single choice this one defeats.
    pub const fn victim(&self) -> Self {
        match self {
            Self::Rock => Self::Scissors,
            Self::Paper => Self::Rock,
            Self::Scissors => Self::Paper,
        }
    }
    pub fn beats(&self, other: &Self) -> bool {
        self.victim() == *other
    }
    /// Uniform draw from an injected source of randomness.
    pub fn sample<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        match rng.random_range(0..3) {
            0 => Self::Rock,
            1 => Self::Paper,
            _ => Self::Scissors,
        }
    }
}

impl TryFrom<u8> for Choice {
    type Error = String;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Self::Rock),
            2 => Ok(Self::Paper),
            3 => Ok(Self::Scissors),
            _ => Err(OUT_OF_RANGE.to_string()),
        }
    }
}

/// Parses a menu entry as typed at the prompt.
impl TryFrom<&str> for Choice {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let n = s.trim().parse::<i64>().map_err(|e| match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => OUT_OF_RANGE.to_string(),
            _ => NOT_A_NUMBER.to_string(),
        })?;
        u8::try_from(n)
            .map_err(|_| OUT_OF_RANGE.to_string())
            .and_then(Self::try_from)
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.glyph(), self.label())
    }
}
