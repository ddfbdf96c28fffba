//! CLI entry and dispatch.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use nikanor_core::config::Config;

mod commands;
mod logging;
mod prompt;

#[derive(Parser, Debug)]
#[command(name = "nikanor")]
#[command(version)]
#[command(about = "Nikanor says your message in a speech bubble, then shows up in ASCII art")]
#[command(
    after_help = "Examples:\n  nikanor \"Hello world!\"\n  nikanor \"I am Nikanor\" /home/user/nikanor_art.txt\n  nikanor \"Message text\" ./my_art.txt"
)]
struct Cli {
    /// Message to put in the bubble (prompted for when omitted)
    #[arg(value_name = "MESSAGE", allow_hyphen_values = true)]
    message: Option<String>,

    /// ASCII art file shown under the bubble (default: /home/$USER/asciinikanor.txt)
    #[arg(value_name = "ART_PATH", allow_hyphen_values = true)]
    art_path: Option<PathBuf>,

    /// Maximum width of a message line, in columns
    #[arg(long, value_name = "COLUMNS")]
    width: Option<usize>,

    /// Pause after each art line, in milliseconds (0 disables)
    #[arg(long, value_name = "MS", env = "NIKANOR_DELAY_MS")]
    delay_ms: Option<u64>,

    /// Print the bubble only
    #[arg(long, conflicts_with = "art_path")]
    no_art: bool,

    /// Write a default config file and exit
    #[arg(long, conflicts_with_all = ["message", "art_path"])]
    init_config: bool,

    /// Log layout diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // help and version go to stdout and exit 0
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => return Err(err.into()),
    };

    logging::init(cli.verbose);

    if cli.init_config {
        return commands::config::init();
    }

    let mut config = Config::load().context("load config")?;
    if let Some(width) = cli.width {
        config.max_width = width;
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.line_delay_ms = delay_ms;
    }
    config.validate().context("invalid configuration")?;

    let Cli {
        message,
        art_path,
        no_art,
        ..
    } = cli;

    let (message, art_path) = match message {
        Some(message) => (message, art_path),
        None => {
            let answers = prompt::ask(
                &mut io::stdin().lock(),
                &mut io::stdout().lock(),
                !no_art,
            )
            .context("read interactive input")?;
            (answers.message, answers.art_path)
        }
    };

    // typed at the prompt, help still shows usage
    if matches!(message.as_str(), "-h" | "--help") {
        Cli::command().print_help().context("print help")?;
        return Ok(());
    }

    let art_path = if no_art {
        None
    } else {
        Some(
            config
                .resolve_art_path(art_path.as_deref())
                .context("resolve ASCII art path")?,
        )
    };

    commands::say::run(&commands::say::SayOptions {
        message: &message,
        art_path: art_path.as_deref(),
        config: &config,
    })
}
