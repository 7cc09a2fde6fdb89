//! Command-line runner for the tailrec demonstration functions.

pub mod cli;
pub mod conf;
pub mod demo;
pub mod err;

pub use cli::{Cli, Commands, Demo};
pub use conf::Conf;
pub use demo::Answer;
pub use err::{CliError, Result};

use clap::ValueEnum;
use colored::Colorize;
use std::io::Write;
use tailrec::Limits;

/// Load the configuration and run the requested command, writing the
/// results to `out`.
pub fn launch(cli: Cli, out: &mut impl Write) -> Result<()> {
    let Cli { command, fuel, conf, verbose: _ } = cli;
    let conf = match conf {
        | Some(path) => Conf::load_from(path)?,
        | None => Conf::load(),
    };
    if let Some(color) = conf.color {
        colored::control::set_override(color);
    }
    let limits = conf.limits(fuel);
    log::debug!("limits: {:?}", limits);
    execute(command, &limits, out)
}

pub fn execute(command: Commands, limits: &Limits, out: &mut impl Write) -> Result<()> {
    match command {
        | Commands::Run { demo, args } => {
            let answer = demo.run(&args, limits)?;
            writeln!(out, "{}", answer)?;
        }
        | Commands::Table { demo, upto } => {
            for (n, res) in demo.table(upto, limits)? {
                match res {
                    | Ok(answer) => writeln!(out, "{:>8}  {}", n, answer)?,
                    | Err(err) => writeln!(out, "{:>8}  {}", n, err.to_string().red())?,
                }
            }
        }
        | Commands::List => {
            for &demo in Demo::value_variants() {
                let name = demo.to_string();
                writeln!(out, "{:<10} {}  {}", name.green(), demo.arity(), demo.about())?;
            }
        }
    }
    Ok(())
}
