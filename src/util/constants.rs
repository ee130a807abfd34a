// TextFilter - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "TextFilter";

/// Application identifier used for config directories.
pub const APP_ID: &str = "TextFilter";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Output naming
// =============================================================================

/// Literal segment inserted between the source stem and the keyword.
pub const FILTERED_SEGMENT: &str = "_filtered_";

/// Extension given to the output when the source name has no `.` at all.
pub const DEFAULT_EXTENSION: &str = ".txt";

/// Stands in for the keyword in the output name when sanitisation strips
/// every character (e.g. a keyword of pure punctuation).
pub const DEFAULT_EMPTY_KEYWORD_PLACEHOLDER: &str = "keyword";

/// Upper bound on a configured placeholder, keeps derived names well below
/// common 255-byte filename limits.
pub const MAX_PLACEHOLDER_LENGTH: usize = 64;

// =============================================================================
// Logging
// =============================================================================

/// Default log level when neither RUST_LOG, --debug, nor config set one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Maximum characters of a keyword or line included in debug log output.
pub const DEBUG_MAX_LINE_PREVIEW: usize = 200;

// =============================================================================
// Files and exit codes
// =============================================================================

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Process exit code for success and for the no-match outcome.
pub const EXIT_OK: i32 = 0;

/// Process exit code when reading or writing failed.
pub const EXIT_IO_ERROR: i32 = 1;

/// Process exit code for caller-correctable input problems. Kept apart from
/// 2, which clap uses for command-line usage errors.
pub const EXIT_VALIDATION_ERROR: i32 = 3;
