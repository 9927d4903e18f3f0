//! Pure text formatting for everything the game prints.
//!
//! Every function here builds a `String` and touches no state; the
//! [`Console`](crate::console::Console) decides where the text goes.
use crate::choice::Choice;
use crate::outcome::Outcome;
use crate::score::Score;
use colored::Colorize;

/// Width of the heavy `=` rules around banners.
pub const BANNER_WIDTH: usize = 60;
/// Width of the light `-` rule under each round header.
pub const HEADER_WIDTH: usize = 30;

fn rule() -> String {
    "=".repeat(BANNER_WIDTH)
}

pub fn title() -> String {
    format!(
        "{}\n{}\n{}",
        rule(),
        "🗿  📄  ✂️   ROCK PAPER SCISSORS GAME   🗿  📄  ✂️".bold(),
        rule()
    )
}

pub fn rules() -> String {
    let lines = Choice::all()
        .into_iter()
        .flat_map(|a| Choice::all().into_iter().map(move |b| (a, b)))
        .filter(|(a, b)| a < b)
        .map(|(a, b)| {
            let winner = if a.beats(&b) { a } else { b };
            format!("   {} vs {} → {} wins", a, b, winner.label())
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!("\n{}\n{}\n{}", "🎮 GAME RULES:".cyan(), lines, rule())
}

pub fn round(n: usize) -> String {
    format!("\n{}\n{}", format!("🎮 ROUND {}", n).bold(), "-".repeat(HEADER_WIDTH))
}

/// The numbered option list shown before asking for a choice.
pub fn menu() -> String {
    let options = Choice::all()
        .iter()
        .map(|c| format!("   {}. {}", c.number(), c))
        .collect::<Vec<_>>()
        .join("\n");
    format!("\n🎯 Make your choice:\n{}", options)
}

pub fn throws(player: Choice, computer: Choice) -> String {
    format!(
        "\n👤 You chose: {}\n{}\n\n{}\n\n🤖 Computer chose: {}\n{}\n",
        player,
        player.art(),
        "⚡ VS ⚡".yellow(),
        computer,
        computer.art()
    )
}

pub fn outcome(outcome: Outcome, player: Choice, computer: Choice) -> String {
    let body = match outcome {
        Outcome::Tie => format!(
            "{}\n   Great minds think alike!",
            "🤝 IT'S A TIE! 🤝".yellow().bold()
        ),
        Outcome::PlayerWin => format!(
            "{}\n   {} beats {}!",
            "🎉 YOU WIN! 🎉".green().bold(),
            player,
            computer
        ),
        Outcome::ComputerWin => format!(
            "{}\n   {} beats {}!",
            "🤖 COMPUTER WINS! 🤖".red().bold(),
            computer,
            player
        ),
    };
    format!("{}\n{}\n{}", rule(), body, rule())
}

pub fn score(score: &Score) -> String {
    format!("\n📊 SCORE: {}", score)
}

pub fn summary(score: &Score) -> String {
    let verdict = match score.leader() {
        Outcome::PlayerWin => "🏆 You win overall! Congratulations! 🏆".green().bold(),
        Outcome::ComputerWin => "🤖 Computer wins overall! Better luck next time! 🤖".red().bold(),
        Outcome::Tie => "🤝 It's a tie overall! You're evenly matched! 🤝".yellow().bold(),
    };
    format!(
        "\n{}\n{}\n📈 Final Score: {}\n{}\n{}",
        rule(),
        "🙏 THANKS FOR PLAYING! 🙏".bold(),
        score,
        verdict,
        rule()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_cover_every_pairing() {
        let text = rules();
        assert!(text.contains("Rock vs 📄 Paper → Paper wins"));
        assert!(text.contains("Rock vs ✂️ Scissors → Rock wins"));
        assert!(text.contains("Paper vs ✂️ Scissors → Scissors wins"));
    }

    #[test]
    fn menu_lists_numbered_options() {
        let text = menu();
        assert!(text.contains("1. 🗿 Rock"));
        assert!(text.contains("2. 📄 Paper"));
        assert!(text.contains("3. ✂️ Scissors"));
    }

    #[test]
    fn throws_show_both_drawings() {
        let text = throws(Choice::Rock, Choice::Paper);
        assert!(text.contains("You chose: 🗿 Rock"));
        assert!(text.contains("Computer chose: 📄 Paper"));
        assert!(text.contains(Choice::Rock.art()));
        assert!(text.contains(Choice::Paper.art()));
    }

    #[test]
    fn winner_named_first() {
        let text = outcome(Outcome::ComputerWin, Choice::Scissors, Choice::Rock);
        assert!(text.contains("COMPUTER WINS"));
        assert!(text.contains("🗿 Rock beats ✂️ Scissors!"));
        let text = outcome(Outcome::PlayerWin, Choice::Scissors, Choice::Paper);
        assert!(text.contains("YOU WIN"));
        assert!(text.contains("✂️ Scissors beats 📄 Paper!"));
    }

    #[test]
    fn tie_banner() {
        let text = outcome(Outcome::Tie, Choice::Paper, Choice::Paper);
        assert!(text.contains("IT'S A TIE"));
        assert!(!text.contains("beats"));
    }

    #[test]
    fn summary_verdicts() {
        assert!(summary(&Score::from((1, 0, 1))).contains("You win overall"));
        assert!(summary(&Score::from((0, 1, 0))).contains("Computer wins overall"));
        assert!(summary(&Score::from((2, 2, 0))).contains("tie overall"));
        assert!(summary(&Score::from((1, 0, 1))).contains("Final Score: You 1 | Computer 0 | Ties 1"));
    }
}
