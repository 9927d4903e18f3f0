use clap::Parser;
use roshambo::Game;
use roshambo::args::Args;
use roshambo::console::Console;
use roshambo::console::Lines;
use roshambo::console::Mode;
use roshambo::console::Terminal;
use roshambo::players::Fish;

fn main() {
    let args = Args::parse();
    if let Err(e) = roshambo::log(args.level()) {
        eprintln!("logging unavailable: {}", e);
    }
    if args.plain {
        colored::control::set_override(false);
    }
    let fish = match args.seed {
        Some(seed) => Fish::seeded(seed),
        None => Fish::new(),
    };
    let result = match Mode::detect() {
        Mode::Terminal => play(Terminal::default(), fish),
        Mode::Lines => play(Lines::stdio(), fish),
    };
    if let Err(e) = result {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn play<C>(console: C, fish: Fish) -> anyhow::Result<()>
where
    C: Console,
{
    let mut game = Game::new(console, fish);
    game.run()?;
    Ok(())
}
