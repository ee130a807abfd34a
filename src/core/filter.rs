// TextFilter - core/filter.rs
//
// Keyword line filter.
// Core layer: pure logic, no I/O.

/// Returns true if `line` contains `keyword` as a contiguous, case-sensitive
/// substring. Line content is not trimmed.
pub fn line_matches(line: &str, keyword: &str) -> bool {
    line.contains(keyword)
}

/// Keep the lines that contain `keyword`, in their original order.
///
/// Consumes the collection: it is not needed once filtering is done.
pub fn filter_lines(lines: Vec<String>, keyword: &str) -> Vec<String> {
    lines
        .into_iter()
        .filter(|line| line_matches(line, keyword))
        .collect()
}
