use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tailrec", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// Maximum number of bounces per run, overriding the configuration
    #[arg(long, global = true)]
    pub fuel: Option<u64>,
    /// Configuration file to use instead of the one in the config directory
    #[arg(long, global = true, value_name = "FILE")]
    pub conf: Option<PathBuf>,
    /// Level of verbosity
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a demo function through the trampoline
    Run {
        #[arg(value_enum)]
        demo: Demo,
        /// Arguments passed to the demo
        #[arg(value_name = "ARG")]
        args: Vec<u64>,
    },
    /// Evaluate a one-argument demo on every input up to a bound
    Table {
        #[arg(value_enum)]
        demo: Demo,
        /// Largest input
        #[arg(long, default_value_t = 20)]
        upto: u64,
    },
    /// List the available demos
    List,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Demo {
    /// Sum of 1..=N
    Sum,
    /// N!
    Factorial,
    /// The N-th fibonacci number
    Fib,
    /// Greatest common divisor of A and B
    Gcd,
    /// Number of collatz steps from N down to 1
    Collatz,
    /// Whether N is even, by counting down in twos
    Even,
    /// Number of digits of N in base B
    Digits,
}
