/// Reply to the play-again prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    pub fn proceed(&self) -> bool {
        matches!(self, Self::Yes)
    }
}

/// Case-insensitive Y / YES / N / NO, surrounding whitespace ignored.
impl TryFrom<&str> for Answer {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().as_str() {
            "Y" | "YES" => Ok(Self::Yes),
            "N" | "NO" => Ok(Self::No),
            _ => Err("Please enter Y for Yes or N for No".to_string()),
        }
    }
}

impl From<Answer> for bool {
    fn from(answer: Answer) -> bool {
        answer.proceed()
    }
}
