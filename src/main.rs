use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use zcalc::config::Config;
use zcalc::ui::{run_interactive, run_keys};

/// A four-function keypad calculator for the terminal.
#[derive(Parser, Debug)]
#[command(name = "zcalc", version, about)]
struct Cli {
    /// Path to a config file (defaults to ~/.config/zcalc/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Copy every computed result to the clipboard
    #[arg(long)]
    copy: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Press the given keys on a fresh calculator and print the display
    Eval {
        /// Keys to press, e.g. `3 + 4 =`
        #[arg(required = true, allow_hyphen_values = true)]
        keys: Vec<String>,
    },
    /// Print the effective configuration as TOML
    Config,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = Config::load(cli.config.as_deref())?;
    if cli.copy {
        config.copy_results = true;
    }

    match cli.command {
        Some(Command::Eval { keys }) => {
            let (text, is_error) = run_keys(&keys.join(" "), config)?;
            println!("{}", text);
            Ok(if is_error {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
        Some(Command::Config) => {
            let toml = toml::to_string_pretty(&config).context("Failed to serialize config")?;
            print!("{}", toml);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            run_interactive(config).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("ZCALC_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
