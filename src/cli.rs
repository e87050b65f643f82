//! CLI definitions and entry point

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::debug;

use armcheck::config::Config;
use armcheck::input;
use armcheck::output::{self, OutputMode};

/// armcheck - three-digit Armstrong number check
#[derive(Parser, Debug)]
#[command(
    name = "armcheck",
    version,
    about = "Check whether an integer is a three-digit Armstrong number",
    long_about = "Reads one integer from standard input and prints DA if it is an Armstrong \
                  number, i.e. equal to the sum of the cubes of its ones, tens and hundreds \
                  digits, NE otherwise.\n\n\
                  Negative input produces no output."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output a JSON report instead of the bare token
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a config file (defaults to $ARMCHECK_CONFIG, then the user config dir)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    debug!("config: {config:?}");

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        config.output.format
    };

    let value = input::read_number_with_policy(io::stdin().lock(), config.input.on_parse_error)
        .context("Failed to read an integer from standard input")?;

    output::write_verdict(value, output_mode, &mut io::stdout().lock())
        .context("Failed to write verdict")?;

    Ok(())
}
