//! People model CLI.
//!
//! Loads a roster (`people.toml`, or a built-in demo roster when missing) and
//! renders, greets, or compares its people. `calc` runs the arithmetic helpers.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use people::core::arith::{ArithError, Number, Operation};
use people::io::config::RosterSource;
use people::{cli, exit_codes, logging};

#[derive(Parser)]
#[command(
    name = "people",
    version,
    about = "Model people by role and age, plus arithmetic helpers"
)]
struct Cli {
    /// Roster file to load [default: people.toml, or the demo roster if absent].
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print each person and the population count.
    Show {
        /// Emit a JSON array instead of text lines.
        #[arg(long)]
        json: bool,
    },
    /// Have each person say hello and talk about their job.
    Greet,
    /// Compare two people by age.
    Compare { left: String, right: String },
    /// Run one arithmetic helper (add, subtract, multiply, divide, square).
    #[command(allow_negative_numbers = true)]
    Calc {
        op: Operation,
        x: Number,
        y: Option<Number>,
    },
}

fn main() {
    logging::init();
    let code = match run() {
        Ok(()) => exit_codes::OK,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_code_for(&err)
        }
    };
    std::process::exit(code);
}

fn run() -> Result<()> {
    let args = Cli::parse();
    let source = RosterSource::from_arg(args.config);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.command {
        Command::Show { json } => cli::show(&source, json, &mut out)?,
        Command::Greet => cli::greet(&source, &mut out)?,
        Command::Compare { left, right } => cli::compare(&source, &left, &right, &mut out)?,
        Command::Calc { op, x, y } => cli::calc(op, x, y, &mut out)?,
    }
    out.flush().context("flush stdout")
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<ArithError>() {
        Some(ArithError::DivideByZero) => exit_codes::UNDEFINED,
        _ => exit_codes::INVALID,
    }
}
