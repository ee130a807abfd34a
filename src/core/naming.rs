// TextFilter - core/naming.rs
//
// Output filename derivation: `<stem>_filtered_<keyword><extension>`.
// Core layer: pure string logic, deterministic for a given input.

use crate::util::constants::{DEFAULT_EXTENSION, FILTERED_SEGMENT};

/// Characters allowed to survive keyword sanitisation.
pub fn is_filename_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Strip every character outside `[A-Za-z0-9_-]`.
pub fn sanitize_keyword(keyword: &str) -> String {
    keyword.chars().filter(|&c| is_filename_safe(c)).collect()
}

/// Split a base name at its last `.` into `(stem, extension)`.
///
/// The extension keeps its dot. A name without any dot yields the whole name
/// as stem and [`DEFAULT_EXTENSION`].
pub fn split_extension(file_name: &str) -> (&str, &str) {
    match file_name.rfind('.') {
        Some(idx) => file_name.split_at(idx),
        None => (file_name, DEFAULT_EXTENSION),
    }
}

/// Derive the output file name for `file_name` filtered by `keyword`.
///
/// `placeholder` replaces the keyword segment when sanitisation leaves
/// nothing.
pub fn output_file_name(file_name: &str, keyword: &str, placeholder: &str) -> String {
    let (stem, extension) = split_extension(file_name);
    let sanitized = sanitize_keyword(keyword);
    let keyword_part = if sanitized.is_empty() {
        placeholder
    } else {
        sanitized.as_str()
    };
    format!("{stem}{FILTERED_SEGMENT}{keyword_part}{extension}")
}
