// TextFilter - app/filter_export.rs
//
// The filter-export operation: validate -> read -> filter -> name -> write.
// Synchronous and stateless; every call owns all of its state.

use crate::core::export::export_lines;
use crate::core::filter::filter_lines;
use crate::core::model::{ExportSummary, FilterRequest, FilterResult, Outcome};
use crate::core::naming::output_file_name;
use crate::platform::config::AppConfig;
use crate::platform::fs;
use crate::util::constants;
use crate::util::error::{FilterExportError, Result, ValidationError};
use crate::util::logging::preview;
use std::path::PathBuf;

/// Settings that shape the operation but not its inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Keyword segment used when the keyword sanitises to nothing.
    pub empty_keyword_placeholder: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            empty_keyword_placeholder: constants::DEFAULT_EMPTY_KEYWORD_PLACEHOLDER.to_string(),
        }
    }
}

impl From<&AppConfig> for ExportOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            empty_keyword_placeholder: config.empty_keyword_placeholder.clone(),
        }
    }
}

/// Run the operation for caller-supplied strings and report exactly one
/// [`Outcome`].
pub fn run(source_path: &str, keyword: &str, options: &ExportOptions) -> Outcome {
    let result = FilterRequest::new(source_path, keyword)
        .map_err(FilterExportError::from)
        .and_then(|request| filter_and_export(&request, options));

    if let Err(ref e) = result {
        match e {
            FilterExportError::Validation(_) => {
                tracing::warn!(error = %e, "Filter-export rejected");
            }
            FilterExportError::Io { .. } => {
                tracing::error!(error = %e, "Filter-export failed");
            }
        }
    }

    result.into()
}

/// Filter `request.source_path()` by `request.keyword()` and write the
/// matches next to the source.
///
/// Returns [`ExportSummary::NoMatches`] without creating a file when no line
/// matches. The source file is never modified.
pub fn filter_and_export(request: &FilterRequest, options: &ExportOptions) -> Result<ExportSummary> {
    let source = request.source_path();

    if !fs::is_regular_file(source) {
        return Err(ValidationError::FileNotFound {
            path: source.to_path_buf(),
        }
        .into());
    }

    tracing::info!(path = %source.display(), "Filtering file");
    tracing::debug!(
        keyword = %preview(request.keyword(), constants::DEBUG_MAX_LINE_PREVIEW),
        "Keyword"
    );

    // -- Read --
    let lines = fs::read_lines(source).map_err(|e| FilterExportError::read(source, e))?;
    let total = lines.len();

    // -- Filter --
    let matched = filter_lines(lines, request.keyword());
    tracing::debug!(total, matched = matched.len(), "Lines filtered");

    if matched.is_empty() {
        tracing::info!(path = %source.display(), total, "No lines matched");
        return Ok(ExportSummary::NoMatches);
    }

    // -- Name --
    let output_path = output_path_for(request, options)?;

    // -- Write --
    let file = fs::create_output(&output_path)
        .map_err(|e| FilterExportError::write(&output_path, e))?;
    let count = export_lines(&matched, file, &output_path)?;

    tracing::info!(
        count,
        output = %output_path.display(),
        "Exported filtered lines"
    );

    Ok(ExportSummary::Exported(FilterResult {
        matched_lines: matched,
        output_path,
    }))
}

/// Absolute output path: the source's directory joined with the derived name.
fn output_path_for(request: &FilterRequest, options: &ExportOptions) -> Result<PathBuf> {
    let source = request.source_path();
    // Only fails when the working directory is gone; reported against the write.
    let absolute = fs::absolute_path(source).map_err(|e| FilterExportError::write(source, e))?;

    // A validated regular file always has a final component and a parent.
    let file_name = absolute
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let dir = absolute.parent().map(PathBuf::from).unwrap_or_default();

    let name = output_file_name(
        &file_name,
        request.keyword(),
        &options.empty_keyword_placeholder,
    );
    Ok(dir.join(name))
}
