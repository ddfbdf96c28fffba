//! Configuration management for Nikanor.
//!
//! Loads configuration from ${NIKANOR_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::art::ArtStreamer;
use crate::bubble::{BubbleOptions, TailPolicy};
use crate::text::DEFAULT_MAX_WIDTH;

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for Nikanor configuration and the default art file.
    //!
    //! NIKANOR_HOME resolution order:
    //! 1. NIKANOR_HOME environment variable (if set)
    //! 2. ~/.config/nikanor (default)

    use std::path::{Path, PathBuf};

    use anyhow::{Context, Result, bail};

    /// File name of the default ASCII art in the user's home.
    pub const DEFAULT_ART_FILE: &str = "asciinikanor.txt";

    /// Environment variable naming the invoking user.
    pub const USER_ENV: &str = "USER";

    /// Returns the Nikanor home directory.
    ///
    /// Checks NIKANOR_HOME env var first, falls back to ~/.config/nikanor
    pub fn nikanor_home() -> Result<PathBuf> {
        if let Some(home) = std::env::var_os("NIKANOR_HOME") {
            return Ok(PathBuf::from(home));
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("nikanor"))
            .context("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> Result<PathBuf> {
        Ok(nikanor_home()?.join("config.toml"))
    }

    /// Returns `/home/<user>/asciinikanor.txt`.
    pub fn art_path_for_user(user: &str) -> PathBuf {
        Path::new("/home").join(user).join(DEFAULT_ART_FILE)
    }

    /// Returns the default art path for the user named by `$USER`.
    pub fn default_art_path() -> Result<PathBuf> {
        match std::env::var(USER_ENV) {
            Ok(user) if !user.trim().is_empty() => Ok(art_path_for_user(user.trim())),
            Ok(_) => bail!(
                "{USER_ENV} is empty; pass an art path or set art_path in the config"
            ),
            Err(e) => Err(e).with_context(|| {
                format!("{USER_ENV} is not set; pass an art path or set art_path in the config")
            }),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum width of a wrapped message line, in columns
    pub max_width: usize,

    /// Pause after each art line in milliseconds (0 disables)
    pub line_delay_ms: u64,

    /// Art file override (defaults to /home/$USER/asciinikanor.txt)
    pub art_path: Option<PathBuf>,

    /// Tail placement
    #[serde(default)]
    pub tail: TailPolicy,
}

impl Config {
    const DEFAULT_LINE_DELAY_MS: u64 = 50;

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path()?)
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Rejects values that would produce a nonsensical bubble.
    pub fn validate(&self) -> Result<()> {
        if self.max_width == 0 {
            bail!("max_width must be at least 1");
        }
        if !self.tail.ratio.is_finite() || self.tail.ratio < 0.0 {
            bail!(
                "tail.ratio must be a non-negative number (got {})",
                self.tail.ratio
            );
        }
        if self.tail.min > self.tail.max {
            bail!(
                "tail.min ({}) must not exceed tail.max ({})",
                self.tail.min,
                self.tail.max
            );
        }
        Ok(())
    }

    pub fn line_delay(&self) -> Duration {
        Duration::from_millis(self.line_delay_ms)
    }

    pub fn bubble_options(&self) -> BubbleOptions {
        BubbleOptions {
            max_width: self.max_width,
            tail: self.tail,
        }
    }

    pub fn art_streamer(&self) -> ArtStreamer {
        ArtStreamer::new(self.line_delay())
    }

    /// Picks the art file to stream.
    ///
    /// Resolution order:
    /// 1) Path given on the command line
    /// 2) `art_path` from the config
    /// 3) `/home/$USER/asciinikanor.txt`
    pub fn resolve_art_path(&self, cli_override: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = cli_override {
            return Ok(path.to_path_buf());
        }
        if let Some(path) = &self.art_path {
            return Ok(path.clone());
        }
        paths::default_art_path()
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            line_delay_ms: Self::DEFAULT_LINE_DELAY_MS,
            art_path: None,
            tail: TailPolicy::default(),
        }
    }
}
