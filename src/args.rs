use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Seed the computer's throws for a reproducible session
    #[arg(long)]
    pub seed: Option<u64>,
    /// Disable colored output
    #[arg(long)]
    pub plain: bool,
    /// Log every round to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn level(&self) -> log::LevelFilter {
        match self.verbose {
            true => log::LevelFilter::Debug,
            false => log::LevelFilter::Warn,
        }
    }
}
