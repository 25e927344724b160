//! Application settings and configuration

use crate::{poller, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Client configuration
///
/// Persistent configuration for a Parley client. Settings are stored in
/// JSON format and can be loaded/saved from disk; a missing file yields the
/// defaults.
///
/// # Example
/// ```rust,no_run
/// use parley::settings::Settings;
///
/// # fn example() -> parley::Result<()> {
/// let settings = Settings::load("parley.json")?;
/// println!("Server: {}", settings.server_url);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Base URL of the remote chat service
    pub server_url: String,
    /// Long-poll window in milliseconds
    pub poll_timeout_ms: u64,
}

impl Settings {
    /// Load settings from a JSON file
    ///
    /// Returns the defaults when the file does not exist.
    ///
    /// # Errors
    /// Fails when the file exists but cannot be read, parsed, or validated.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let json = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Check that the settings values are usable
    ///
    /// # Errors
    /// Returns [`Error::Validation`] for an empty server URL or a zero poll
    /// window.
    pub fn validate(&self) -> Result<()> {
        if self.server_url.trim().is_empty() {
            return Err(Error::Validation(
                "Server URL must not be empty".to_string(),
            ));
        }
        if self.poll_timeout_ms == 0 {
            return Err(Error::Validation(
                "Poll timeout must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:5000".to_string(),
            poll_timeout_ms: poller::POLL_TIMEOUT_MS,
        }
    }
}
