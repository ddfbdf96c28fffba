//! Bubble and art rendering to the terminal.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use nikanor_core::art::ArtUnavailable;
use nikanor_core::bubble::Bubble;
use nikanor_core::config::Config;

pub struct SayOptions<'a> {
    pub message: &'a str,
    /// `None` skips the art.
    pub art_path: Option<&'a Path>,
    pub config: &'a Config,
}

/// Prints the bubble, then streams the art.
///
/// A missing or unreadable art file is reported on stderr and does not fail
/// the command; the bubble has already been printed by then. Failing to
/// write to stdout does fail it.
pub fn run(options: &SayOptions<'_>) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let bubble = Bubble::new(options.message, &options.config.bubble_options());
    bubble.render(&mut out).context("write bubble")?;

    let Some(art_path) = options.art_path else {
        return Ok(());
    };

    match options.config.art_streamer().stream(art_path, &mut out) {
        Ok(_) => Ok(()),
        Err(e) if e.is::<ArtUnavailable>() => {
            tracing::debug!(error = ?e, "art streaming failed");
            eprintln!("Error: {e:#}");
            eprintln!("Check the file path.");
            Ok(())
        }
        Err(e) => Err(e).context("write ASCII art"),
    }
}
