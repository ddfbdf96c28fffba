//! Config command handlers.

use anyhow::{Context, Result};
use nikanor_core::config::{self, Config};

pub fn init() -> Result<()> {
    let config_path = config::paths::config_path()?;
    Config::init(&config_path)
        .with_context(|| format!("init config at {}", config_path.display()))?;
    println!("Created config at {}", config_path.display());
    Ok(())
}
