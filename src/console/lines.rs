use super::*;
use crate::answer::Answer;
use crate::render;
use anyhow::Context;
use std::io::BufRead;
use std::io::StdinLock;
use std::io::Stdout;
use std::io::Write;

/// Line-oriented console over any reader and writer.
///
/// Used when either stdin or stdout is not a terminal, and by tests with an
/// in-memory `Cursor` on one side and a `Vec<u8>` on the other.
#[derive(Debug)]
pub struct Lines<R, W> {
    input: R,
    output: W,
}

impl Lines<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R, W> Lines<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
    /// Print the prompt and read one raw line.
    fn ask(&mut self, prompt: &str) -> anyhow::Result<String> {
        write!(self.output, "\n{}: ", prompt).context("write prompt")?;
        self.output.flush().context("flush prompt")?;
        let mut buffer = String::new();
        match self.input.read_line(&mut buffer).context("read input")? {
            0 => anyhow::bail!("input closed while waiting for an answer"),
            _ => Ok(buffer),
        }
    }
    /// Keep asking until `parse` accepts the line.
    fn retry<T, F>(&mut self, prompt: &str, parse: F) -> anyhow::Result<T>
    where
        F: Fn(&str) -> Result<T, String>,
    {
        loop {
            let line = self.ask(prompt)?;
            match parse(line.as_str()) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    log::debug!("[console] rejected {:?}: {}", line.trim(), e);
                    writeln!(self.output, "❌ {}", e).context("write rejection")?;
                }
            }
        }
    }
}

impl<R, W> Console for Lines<R, W>
where
    R: BufRead,
    W: Write,
{
    fn choice(&mut self) -> anyhow::Result<Choice> {
        self.show(&render::menu())?;
        self.retry(CHOICE_PROMPT, |s| Choice::try_from(s))
    }
    fn proceed(&mut self) -> anyhow::Result<bool> {
        self.retry(AGAIN_PROMPT, |s| Answer::try_from(s)).map(bool::from)
    }
    fn show(&mut self, text: &str) -> anyhow::Result<()> {
        writeln!(self.output, "{}", text).context("write output")
    }
    fn clear(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Lines<Cursor<Vec<u8>>, Vec<u8>> {
        Lines::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn printed(console: Lines<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_inner().1).unwrap()
    }

    #[test]
    fn accepts_each_menu_entry() {
        for choice in Choice::all() {
            let ref mut console = console(&format!("{}\n", choice.number()));
            assert_eq!(console.choice().unwrap(), choice);
        }
    }

    #[test]
    fn reprompts_until_valid_choice() {
        let mut console = console("0\n4\nabc\n\n3\n");
        assert_eq!(console.choice().unwrap(), Choice::Scissors);
        let out = printed(console);
        assert_eq!(out.matches(CHOICE_PROMPT).count(), 5);
        assert_eq!(out.matches("valid choice").count(), 2);
        assert_eq!(out.matches("valid number").count(), 2);
        assert_eq!(out.matches("Make your choice").count(), 1);
    }

    #[test]
    fn continuation_answers() {
        for (input, expected) in [
            ("y\n", true),
            ("Y\n", true),
            ("yes\n", true),
            ("YES\n", true),
            ("n\n", false),
            ("N\n", false),
            ("no\n", false),
            ("NO\n", false),
        ] {
            assert_eq!(console(input).proceed().unwrap(), expected, "{input:?}");
        }
    }

    #[test]
    fn reprompts_until_valid_answer() {
        let mut console = console("maybe\n1\nq\nNo\n");
        assert!(!console.proceed().unwrap());
        let out = printed(console);
        assert_eq!(out.matches(AGAIN_PROMPT).count(), 4);
        assert_eq!(out.matches("Please enter Y for Yes or N for No").count(), 3);
    }

    #[test]
    fn closed_input_is_an_error() {
        assert!(console("").choice().is_err());
        assert!(console("abc\n").choice().is_err());
        assert!(console("").proceed().is_err());
    }

    #[test]
    fn input_without_trailing_newline() {
        assert_eq!(console("2").choice().unwrap(), Choice::Paper);
        assert!(console("yes").proceed().unwrap());
    }
}
