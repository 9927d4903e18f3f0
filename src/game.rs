use crate::choice::Choice;
use crate::console::Console;
use crate::outcome::Outcome;
use crate::players::Opponent;
use crate::render;
use crate::score::Score;

/// Where the loop is between two prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the human's throw.
    AwaitingChoice,
    /// Both hands are in; reveal and score them.
    ShowResult { player: Choice, computer: Choice },
    /// Round scored; ask whether to go again.
    AwaitingContinue,
    /// Player declined. Print the summary and stop.
    Finished,
}

/// One session of rounds between a human at a [`Console`] and an
/// [`Opponent`]. Owns the running score for its whole lifetime.
#[derive(Debug)]
pub struct Game<C, O> {
    console: C,
    opponent: O,
    score: Score,
    round: usize,
}

impl<C, O> Game<C, O>
where
    C: Console,
    O: Opponent,
{
    pub fn new(console: C, opponent: O) -> Self {
        Self {
            console,
            opponent,
            score: Score::default(),
            round: 0,
        }
    }
    pub fn score(&self) -> &Score {
        &self.score
    }
    pub fn into_console(self) -> C {
        self.console
    }

    /// Play until the human declines, then return the final tally.
    pub fn run(&mut self) -> anyhow::Result<Score> {
        self.console.show(&render::title())?;
        self.console.show(&render::rules())?;
        let mut phase = Phase::AwaitingChoice;
        while phase != Phase::Finished {
            phase = self.step(phase)?;
        }
        self.console.show(&render::summary(&self.score))?;
        log::info!("[game] session over after {} rounds: {}", self.score.rounds(), self.score);
        Ok(self.score)
    }

    /// Advance the state machine by one transition.
    pub fn step(&mut self, phase: Phase) -> anyhow::Result<Phase> {
        match phase {
            Phase::AwaitingChoice => {
                self.round += 1;
                self.console.show(&render::round(self.round))?;
                let player = self.console.choice()?;
                let computer = self.opponent.throw();
                Ok(Phase::ShowResult { player, computer })
            }
            Phase::ShowResult { player, computer } => {
                let outcome = self.settle(player, computer);
                self.console.show(&render::throws(player, computer))?;
                self.console.show(&render::outcome(outcome, player, computer))?;
                self.console.show(&render::score(&self.score))?;
                Ok(Phase::AwaitingContinue)
            }
            Phase::AwaitingContinue => match self.console.proceed()? {
                true => {
                    self.console.clear()?;
                    self.console.show(&render::title())?;
                    Ok(Phase::AwaitingChoice)
                }
                false => Ok(Phase::Finished),
            },
            Phase::Finished => Ok(Phase::Finished),
        }
    }

    /// Play one round against the opponent with a known player throw.
    /// Records the result and returns it without touching the console.
    pub fn round(&mut self, player: Choice) -> Outcome {
        self.round += 1;
        let computer = self.opponent.throw();
        self.settle(player, computer)
    }

    fn settle(&mut self, player: Choice, computer: Choice) -> Outcome {
        let outcome = Outcome::decide(player, computer);
        self.score.record(outcome);
        log::debug!(
            "[game] round {} {} vs {} -> {}",
            self.round,
            player.label(),
            computer.label(),
            outcome
        );
        outcome
    }
}
