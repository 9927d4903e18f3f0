use crate::outcome::Outcome;

/// Running tally for one session. Lives inside the game loop and only ever
/// grows; a fresh process starts from zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    player: usize,
    computer: usize,
    ties: usize,
}

impl Score {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PlayerWin => self.player += 1,
            Outcome::ComputerWin => self.computer += 1,
            Outcome::Tie => self.ties += 1,
        }
    }
    pub fn player(&self) -> usize {
        self.player
    }
    pub fn computer(&self) -> usize {
        self.computer
    }
    pub fn ties(&self) -> usize {
        self.ties
    }
    pub fn rounds(&self) -> usize {
        self.player + self.computer + self.ties
    }
    /// Overall verdict, decided on wins alone. Ties don't count toward it.
    pub fn leader(&self) -> Outcome {
        match self.player.cmp(&self.computer) {
            std::cmp::Ordering::Greater => Outcome::PlayerWin,
            std::cmp::Ordering::Less => Outcome::ComputerWin,
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }
}

impl From<(usize, usize, usize)> for Score {
    fn from((player, computer, ties): (usize, usize, usize)) -> Self {
        Self {
            player,
            computer,
            ties,
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "You {} | Computer {} | Ties {}",
            self.player, self.computer, self.ties
        )
    }
}
