use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::message::Author;

/// Environment variable that overrides the config file location
pub const CONFIG_ENV: &str = "PARLEY_CONFIG";

/// Chat session settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Author of the first committed message
    pub initial_author: Author,
    /// Display label for local messages
    pub local_label: String,
    /// Display label for remote messages
    pub remote_label: String,
}

impl SessionConfig {
    pub fn label(&self, author: Author) -> &str {
        match author {
            Author::Local => &self.local_label,
            Author::Remote => &self.remote_label,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { initial_author: Author::Local, local_label: "You".to_string(), remote_label: "Guest".to_string() }
    }
}

/// Terminal front-end settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    /// Render/animation tick in milliseconds
    pub tick_rate_ms: u64,
    /// Lines moved per tick while smooth scrolling
    pub scroll_step: u16,
    /// Show `HH:MM:SS` next to author labels
    pub show_timestamps: bool,
}

impl UiConfig {
    pub const MIN_TICK_MS: u64 = 10;
    pub const MAX_TICK_MS: u64 = 1000;
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 50, scroll_step: 2, show_timestamps: true }
    }
}

/// File logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileLoggingConfig {
    pub enabled: bool,
    /// Log directory; defaults to `<data_dir>/parley/logs`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

impl Default for FileLoggingConfig {
    fn default() -> Self {
        Self { enabled: true, directory: None }
    }
}

/// `[logging]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Filter directive used when no environment override is set
    pub level: String,
    /// pretty | json | compact
    pub format: String,
    pub file: FileLoggingConfig,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), format: "compact".to_string(), file: FileLoggingConfig::default() }
    }
}

/// Root configuration structure for parley.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub session: SessionConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(toml_str)
            .map_err(|e| crate::Error::Config(ConfigError::from(e).to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load from an explicit path, `$PARLEY_CONFIG`, or the default location
    ///
    /// An explicit path must exist. The other two fall back to defaults when
    /// the file is missing.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match Self::source(explicit) {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// File `load` reads from, or `None` when it falls back to defaults
    pub fn source(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        std::env::var_os(CONFIG_ENV).map(PathBuf::from).or_else(Self::default_path).filter(|path| path.exists())
    }

    /// `<config_dir>/parley/parley.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("parley").join("parley.toml"))
    }

    /// Serialize the effective configuration
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        use crate::Error;

        let local = self.session.local_label.trim();
        let remote = self.session.remote_label.trim();
        if local.is_empty() {
            return Err(Error::Config(ConfigError::EmptyLabel("local_label".to_string()).to_string()));
        }
        if remote.is_empty() {
            return Err(Error::Config(ConfigError::EmptyLabel("remote_label".to_string()).to_string()));
        }
        if local == remote {
            return Err(Error::Config(ConfigError::DuplicateLabel(local.to_string()).to_string()));
        }

        if !(UiConfig::MIN_TICK_MS..=UiConfig::MAX_TICK_MS).contains(&self.ui.tick_rate_ms) {
            return Err(Error::Config(ConfigError::TickRateOutOfRange(self.ui.tick_rate_ms).to_string()));
        }
        if self.ui.scroll_step == 0 {
            return Err(Error::Config(ConfigError::ZeroScrollStep.to_string()));
        }

        Ok(())
    }

    /// Get example configuration (as a string)
    pub fn example() -> &'static str {
        r#"# Parley Configuration Example
# Copy this file to ~/.config/parley/parley.toml or pass --config

[session]
# Author of the first message: "local" or "remote"
initial_author = "local"
# Labels shown above each message
local_label = "You"
remote_label = "Guest"

[ui]
# Render tick in milliseconds (10..=1000)
tick_rate_ms = 50
# Lines per tick while smooth scrolling to the newest message
scroll_step = 2
show_timestamps = true

[logging]
# Filter directive; PARLEY_LOG or RUST_LOG take precedence
level = "info"
# Output format: "pretty", "json", or "compact"
format = "compact"

[logging.file]
# Interactive screens only log to files
enabled = true
# directory = "/tmp/parley-logs"
"#
    }
}

/// Configuration-specific errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Unknown author tag
    #[error("invalid author: {0} (expected \"local\" or \"remote\")")]
    InvalidAuthor(String),

    /// Blank author label
    #[error("label must not be empty: {0}")]
    EmptyLabel(String),

    /// Both authors share a label
    #[error("local and remote labels must differ: {0}")]
    DuplicateLabel(String),

    /// Tick rate outside the accepted range
    #[error("tick_rate_ms must be between 10 and 1000, got {0}")]
    TickRateOutOfRange(u64),

    /// Smooth scroll would never move
    #[error("scroll_step must be at least 1")]
    ZeroScrollStep,

    /// TOML parse error
    #[error("TOML parse error: {0}")]
    TomlParse(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::TomlParse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.session.initial_author, Author::Local);
        assert_eq!(config.session.local_label, "You");
        assert_eq!(config.session.remote_label, "Guest");
        assert_eq!(config.ui.tick_rate_ms, 50);
        assert_eq!(config.ui.scroll_step, 2);
        assert!(config.ui.show_timestamps);
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.file.enabled);
    }

    #[test]
    fn test_example_parses_to_default() {
        let config = Config::from_toml_str(Config::example()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_empty_string_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_sections() {
        let toml = r#"
[session]
initial_author = "remote"
remote_label = "Alice"
"#;
        let config = Config::from_toml_str(toml).unwrap();
        assert_eq!(config.session.initial_author, Author::Remote);
        assert_eq!(config.session.local_label, "You");
        assert_eq!(config.session.label(Author::Remote), "Alice");
        assert_eq!(config.ui, UiConfig::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = Config::from_toml_str("[session]\nnickname = \"x\"\n").unwrap_err();
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_invalid_author_rejected() {
        assert!(Config::from_toml_str("[session]\ninitial_author = \"guest\"\n").is_err());
    }

    #[test]
    fn test_validate_labels() {
        let err = Config::from_toml_str("[session]\nlocal_label = \"  \"\n").unwrap_err();
        assert!(err.to_string().contains("local_label"));

        let err = Config::from_toml_str("[session]\nlocal_label = \"Bob\"\nremote_label = \"Bob\"\n").unwrap_err();
        assert!(err.to_string().contains("must differ"));
    }

    #[test]
    fn test_validate_ui() {
        let err = Config::from_toml_str("[ui]\ntick_rate_ms = 5\n").unwrap_err();
        assert!(err.to_string().contains("tick_rate_ms"));

        let err = Config::from_toml_str("[ui]\nscroll_step = 0\n").unwrap_err();
        assert!(err.to_string().contains("scroll_step"));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut config = Config::default();
        config.session.remote_label = "Alice".to_string();
        config.logging.file.directory = Some(PathBuf::from("/tmp/parley-logs"));

        let text = config.to_toml_string().unwrap();
        assert_eq!(Config::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ui]\nshow_timestamps = false").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert!(!config.ui.show_timestamps);
    }

    #[test]
    fn test_load_explicit_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(Config::load(Some(&missing)), Err(crate::Error::Io(_))));
    }

    #[test]
    fn test_explicit_source_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("parley.toml");
        assert_eq!(Config::source(Some(&path)), Some(path));
    }
}
