//! `pbox`: terminal front end for the Pythagorean box workbench.
//!
//! **Usage:**
//! ```text
//! pbox [-v|-vv] generate <M> <N> <K> [--json]
//! pbox [-v|-vv] check <A> <B> <C>
//! pbox [-v|-vv] geometry <A> <B> <C> [--json]
//! pbox [-v|-vv] interactive [--max-magnitude <LIMIT>]
//! ```
//!
//! Logs go to stderr. `RUST_LOG` overrides the `-v` level.

use std::io;

use anyhow::Result;
use box_session::{ParameterTriple, Session};
use clap::{ArgAction, Parser, Subcommand};
use config::constants::{SessionConfig, MAX_PARAMETER_MAGNITUDE};
use tracing_subscriber::EnvFilter;

mod commands;

/// Generate and inspect Pythagorean boxes.
#[derive(Parser)]
#[command(name = "pbox", version, about = "Generate and inspect Pythagorean boxes")]
struct Args {
    /// Raise log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the box for parameters m, n, k.
    Generate {
        #[arg(allow_negative_numbers = true)]
        m: i64,
        #[arg(allow_negative_numbers = true)]
        n: i64,
        #[arg(allow_negative_numbers = true)]
        k: i64,
        /// Print the history entry as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Report whether three edge lengths are coprime.
    Check {
        #[arg(allow_negative_numbers = true)]
        a: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
        #[arg(allow_negative_numbers = true)]
        c: i64,
    },
    /// Print the wireframe of an a × b × c box.
    Geometry {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
        #[arg(allow_negative_numbers = true)]
        c: f64,
        /// Print the geometry as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Read "m n k" lines from stdin and keep a session history.
    Interactive {
        /// Largest accepted |m|, |n| or |k|.
        #[arg(long, default_value_t = MAX_PARAMETER_MAGNITUDE)]
        max_magnitude: i64,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Generate { m, n, k, json } => {
            commands::generate(&mut out, ParameterTriple::new(m, n, k), json)
        }
        Command::Check { a, b, c } => commands::check(&mut out, a, b, c),
        Command::Geometry { a, b, c, json } => commands::geometry(&mut out, a, b, c, json),
        Command::Interactive { max_magnitude } => {
            let config = SessionConfig::new(max_magnitude)?;
            let mut session = Session::new(config);
            commands::interactive(io::stdin().lock(), &mut out, &mut session)
        }
    }
}
