use super::*;

/// Opponent that replays a fixed script, cycling when it runs out.
#[derive(Debug)]
pub struct Rigged {
    script: Vec<Choice>,
    next: usize,
}

impl From<Vec<Choice>> for Rigged {
    fn from(script: Vec<Choice>) -> Self {
        assert!(!script.is_empty(), "rigged opponent needs at least one throw");
        Self { script, next: 0 }
    }
}

impl Opponent for Rigged {
    fn throw(&mut self) -> Choice {
        let throw = self.script[self.next % self.script.len()];
        self.next += 1;
        throw
    }
}
