// TextFilter - platform/config.rs
//
// Platform config directory resolution and read-only config.toml loading
// with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance. The file is never written.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for TextFilter configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/textfilter/ or %APPDATA%\TextFilter\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Default location of config.toml.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[logging]` section.
    pub logging: LoggingSection,
    /// `[naming]` section.
    pub naming: NamingSection,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
    /// Log file path (empty = stderr only).
    pub file: Option<String>,
}

/// `[naming]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct NamingSection {
    /// Keyword segment used when the keyword sanitises to nothing.
    pub empty_keyword_placeholder: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce warnings and fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
    /// Log file path.
    pub log_file: Option<PathBuf>,
    /// Keyword segment used when the keyword sanitises to nothing.
    pub empty_keyword_placeholder: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: None,
            log_file: None,
            empty_keyword_placeholder: constants::DEFAULT_EMPTY_KEYWORD_PLACEHOLDER.to_string(),
        }
    }
}

/// Load and validate `config.toml` at `config_path`.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// A missing file returns defaults with no warnings. An unreadable or
/// unparseable file returns defaults with one warning; the operation still
/// runs but the user is informed.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(config_path) {
        Ok(c) => c,
        Err(e) => {
            let err = ConfigError::Io {
                path: config_path.to_path_buf(),
                source: e,
            };
            warnings.push(format!("{err}. Using defaults."));
            return (AppConfig::default(), warnings);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            let err = ConfigError::TomlParse {
                path: config_path.to_path_buf(),
                source: e,
            };
            warnings.push(format!("{err}. Using defaults."));
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");

    let (config, mut field_warnings) = validate(raw);
    warnings.append(&mut field_warnings);
    (config, warnings)
}

/// Validate each field of a parsed config, accumulating every problem.
fn validate(raw: RawConfig) -> (AppConfig, Vec<String>) {
    let mut config = AppConfig::default();
    let mut warnings = Vec::new();

    // -- Logging: level --
    if let Some(level) = raw.logging.level {
        let lower = level.to_lowercase();
        if constants::VALID_LOG_LEVELS.contains(&lower.as_str()) {
            config.log_level = Some(lower);
        } else {
            let err = ConfigError::ValueOutOfRange {
                field: "[logging] level".to_string(),
                value: level,
                expected: constants::VALID_LOG_LEVELS.join(", "),
            };
            warnings.push(format!(
                "{err}. Using default ({}).",
                constants::DEFAULT_LOG_LEVEL
            ));
        }
    }

    // -- Logging: file --
    if let Some(file) = raw.logging.file {
        if !file.is_empty() {
            config.log_file = Some(PathBuf::from(file));
        }
    }

    // -- Naming: empty_keyword_placeholder --
    if let Some(placeholder) = raw.naming.empty_keyword_placeholder {
        let safe = placeholder
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !placeholder.is_empty() && safe && placeholder.len() <= constants::MAX_PLACEHOLDER_LENGTH
        {
            config.empty_keyword_placeholder = placeholder;
        } else {
            let err = ConfigError::ValueOutOfRange {
                field: "[naming] empty_keyword_placeholder".to_string(),
                value: placeholder,
                expected: format!(
                    "1-{} characters from [A-Za-z0-9_-]",
                    constants::MAX_PLACEHOLDER_LENGTH
                ),
            };
            warnings.push(format!(
                "{err}. Using default ({}).",
                constants::DEFAULT_EMPTY_KEYWORD_PLACEHOLDER
            ));
        }
    }

    (config, warnings)
}
