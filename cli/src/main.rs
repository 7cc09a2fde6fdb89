use clap::Parser;
use colored::Colorize;
use tailrec_cli::{Cli, launch};

fn main() {
    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut out = std::io::stdout().lock();
    if let Err(err) = launch(cli, &mut out) {
        eprintln!("{} {}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}
