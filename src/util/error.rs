// TextFilter - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation: the underlying io::Error is kept as the
// source and only flattened to a message at the outcome boundary.

use serde::Serialize;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// The step of the filter-export operation that touched the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IoStage {
    /// Reading the source file.
    Read,
    /// Writing the filtered output file.
    Write,
}

impl IoStage {
    /// Lowercase label used in messages and JSON output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Write => "write",
        }
    }
}

impl fmt::Display for IoStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Top-level error type for the filter-export operation.
///
/// The empty-result case is deliberately absent: it is an outcome, not an error.
#[derive(Debug)]
pub enum FilterExportError {
    /// Caller-supplied input was rejected before any file was opened.
    Validation(ValidationError),

    /// I/O error with stage and path context.
    Io {
        stage: IoStage,
        path: PathBuf,
        source: io::Error,
    },
}

impl FilterExportError {
    /// Build a read-stage I/O error for `path`.
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            stage: IoStage::Read,
            path: path.into(),
            source,
        }
    }

    /// Build a write-stage I/O error for `path`.
    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            stage: IoStage::Write,
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for FilterExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "Validation error: {e}"),
            Self::Io {
                stage,
                path,
                source,
            } => write!(
                f,
                "I/O error during {stage} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for FilterExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Validation errors
// ---------------------------------------------------------------------------

/// Caller-correctable input problems. Display output is the fixed message
/// reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Source path is empty, or the keyword is empty after trimming.
    MissingInput,

    /// Path does not resolve to an existing regular file.
    FileNotFound { path: PathBuf },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingInput => f.write_str("missing input"),
            Self::FileNotFound { .. } => f.write_str("file not found"),
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for FilterExportError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for filter-export results.
pub type Result<T> = std::result::Result<T, FilterExportError>;
