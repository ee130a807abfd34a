// TextFilter - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no platform
// dependencies. These types are the shared vocabulary across all layers.

use crate::util::error::{FilterExportError, IoStage, ValidationError};
use serde::Serialize;
use std::path::{Path, PathBuf};

// =============================================================================
// Filter request
// =============================================================================

/// A validated request to filter one file by one keyword.
///
/// Only constructible through [`FilterRequest::new`], which enforces that
/// both inputs are present. Fields are private so the request cannot change
/// after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterRequest {
    source_path: PathBuf,
    keyword: String,
}

impl FilterRequest {
    /// Build a request from caller-supplied strings.
    ///
    /// The keyword is trimmed of every char up to and including U+0020
    /// (spaces and ASCII control characters, but not Unicode spaces such as
    /// U+00A0); the path is taken verbatim. Fails with
    /// [`ValidationError::MissingInput`] when either is empty. Existence of
    /// the file is not checked here (that needs the filesystem).
    pub fn new(source_path: &str, keyword: &str) -> Result<Self, ValidationError> {
        let keyword = keyword.trim_matches(|c: char| c <= ' ');
        if source_path.is_empty() || keyword.is_empty() {
            return Err(ValidationError::MissingInput);
        }
        Ok(Self {
            source_path: PathBuf::from(source_path),
            keyword: keyword.to_string(),
        })
    }

    /// Path of the file to filter, as supplied.
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Trimmed, non-empty keyword.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }
}

// =============================================================================
// Filter result
// =============================================================================

/// Lines that matched, and where they were written.
///
/// Only built when at least one line matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterResult {
    /// Matched lines in source order.
    pub matched_lines: Vec<String>,

    /// Absolute path of the written output file.
    pub output_path: PathBuf,
}

impl FilterResult {
    /// Number of lines written.
    pub fn count(&self) -> usize {
        self.matched_lines.len()
    }
}

/// Successful terminations of the operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportSummary {
    /// At least one line matched and the output file was written.
    Exported(FilterResult),

    /// Nothing matched; no file was created.
    NoMatches,
}

// =============================================================================
// Outcome (caller boundary)
// =============================================================================

/// The single result reported to the caller for one invocation.
///
/// Serialises as an internally tagged object, e.g.
/// `{"outcome":"success","count":2,"output_path":"/tmp/a_filtered_x.txt"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Success { count: usize, output_path: PathBuf },
    NoMatches,
    ValidationError { message: String },
    IoError { stage: IoStage, message: String },
}

impl Outcome {
    /// True for the two non-failure variants.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. } | Self::NoMatches)
    }
}

impl From<ExportSummary> for Outcome {
    fn from(summary: ExportSummary) -> Self {
        match summary {
            ExportSummary::Exported(result) => Self::Success {
                count: result.count(),
                output_path: result.output_path,
            },
            ExportSummary::NoMatches => Self::NoMatches,
        }
    }
}

impl From<FilterExportError> for Outcome {
    fn from(err: FilterExportError) -> Self {
        match err {
            FilterExportError::Validation(e) => Self::ValidationError {
                message: e.to_string(),
            },
            FilterExportError::Io { stage, source, .. } => Self::IoError {
                stage,
                message: source.to_string(),
            },
        }
    }
}

impl From<Result<ExportSummary, FilterExportError>> for Outcome {
    fn from(result: Result<ExportSummary, FilterExportError>) -> Self {
        match result {
            Ok(summary) => summary.into(),
            Err(e) => e.into(),
        }
    }
}
