use super::*;
use crate::answer::Answer;
use crate::render;
use dialoguer::Input;
use dialoguer::console::Term;

/// Interactive console on a real terminal.
///
/// Reprompting is handled by `dialoguer`'s validators, which print the
/// rejection inline and ask again.
#[derive(Debug)]
pub struct Terminal(Term);

impl Default for Terminal {
    fn default() -> Self {
        Self(Term::stdout())
    }
}

impl Terminal {
    fn input<T, F>(&self, prompt: &str, parse: F) -> anyhow::Result<T>
    where
        F: Fn(&str) -> Result<T, String>,
    {
        let line = Input::<String>::new()
            .with_prompt(format!("\n{}", prompt))
            .report(false)
            .validate_with(|i: &String| -> Result<(), String> {
                parse(i.as_str()).map(|_| ()).inspect_err(|e| {
                    log::debug!("[console] rejected {:?}: {}", i.trim(), e);
                })
            })
            .interact_text_on(&self.0)?;
        parse(line.as_str()).map_err(anyhow::Error::msg)
    }
}

impl Console for Terminal {
    fn choice(&mut self) -> anyhow::Result<Choice> {
        self.show(&render::menu())?;
        self.input(CHOICE_PROMPT, |s| Choice::try_from(s))
    }
    fn proceed(&mut self) -> anyhow::Result<bool> {
        self.input(AGAIN_PROMPT, |s| Answer::try_from(s)).map(bool::from)
    }
    fn show(&mut self, text: &str) -> anyhow::Result<()> {
        Ok(self.0.write_line(text)?)
    }
    fn clear(&mut self) -> anyhow::Result<()> {
        Ok(self.0.clear_screen()?)
    }
}
