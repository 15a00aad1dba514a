//! Deterministic String Derivation CLI
//!
//! Reads seed material from an argument or stdin and prints the derived
//! string. Diagnostics go to stderr so stdout carries only the output.

use clap::Parser;
use dgen::{encode, Configuration, CoverageReport};
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, Level};

#[derive(Debug, Parser)]
#[command(name = "dgen", version, about = "Derive a deterministic string from input bytes")]
struct Cli {
    /// Seed material. Read from stdin when omitted or with --stdin.
    input: Option<String>,

    /// Read raw seed material from stdin, byte for byte.
    #[arg(long, conflicts_with = "input")]
    stdin: bool,

    /// Output length (overrides the configuration file).
    #[arg(short, long)]
    length: Option<usize>,

    /// TOML configuration file with character groups.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print a group coverage report to stderr.
    #[arg(long)]
    report: bool,

    /// Print the effective configuration as TOML and exit.
    #[arg(long)]
    dump_config: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => Configuration::from_file(path)?,
        None => Configuration::default(),
    };
    if let Some(length) = cli.length {
        config.length = length;
    }

    if cli.dump_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let input = match cli.input {
        Some(input) if !cli.stdin => input.into_bytes(),
        _ => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };

    debug!(
        "dgen v{}: {} input bytes, length {}",
        dgen::VERSION,
        input.len(),
        config.length
    );

    let output = encode(&input, &config)?;

    if cli.report {
        eprint!("{}", CoverageReport::analyze(&config.charset, &output));
    }

    println!("{}", String::from_utf8_lossy(&output));
    Ok(())
}
