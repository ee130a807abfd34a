// TextFilter - app/report.rs
//
// Rendering of an Outcome for the command-line front end.

use crate::core::model::Outcome;
use crate::util::constants;

/// Human-readable message for `outcome`.
pub fn render_text(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Success { count, output_path } => {
            let noun = if *count == 1 { "line" } else { "lines" };
            format!("Exported {count} {noun} to:\n{}", output_path.display())
        }
        Outcome::NoMatches => "No lines found containing the keyword".to_string(),
        Outcome::ValidationError { message } => format!("Input error: {message}"),
        Outcome::IoError { stage, message } => {
            format!("Error processing file ({stage}): {message}")
        }
    }
}

/// Single-line JSON object for `outcome`.
pub fn render_json(outcome: &Outcome) -> serde_json::Result<String> {
    serde_json::to_string(outcome)
}

/// Process exit code for `outcome`.
pub fn exit_code(outcome: &Outcome) -> i32 {
    match outcome {
        Outcome::Success { .. } | Outcome::NoMatches => constants::EXIT_OK,
        Outcome::IoError { .. } => constants::EXIT_IO_ERROR,
        Outcome::ValidationError { .. } => constants::EXIT_VALIDATION_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::error::IoStage;
    use std::path::PathBuf;

    #[test]
    fn test_render_success() {
        let outcome = Outcome::Success {
            count: 2,
            output_path: PathBuf::from("/data/fruits_filtered_apple.txt"),
        };
        assert_eq!(
            render_text(&outcome),
            "Exported 2 lines to:\n/data/fruits_filtered_apple.txt"
        );
        assert_eq!(exit_code(&outcome), 0);
    }

    #[test]
    fn test_render_single_line() {
        let outcome = Outcome::Success {
            count: 1,
            output_path: PathBuf::from("/data/a_filtered_b.txt"),
        };
        assert!(render_text(&outcome).starts_with("Exported 1 line to:"));
    }

    #[test]
    fn test_render_failures() {
        let validation = Outcome::ValidationError {
            message: "missing input".into(),
        };
        assert_eq!(render_text(&validation), "Input error: missing input");
        assert_eq!(exit_code(&validation), 3);

        let io = Outcome::IoError {
            stage: IoStage::Read,
            message: "Permission denied (os error 13)".into(),
        };
        assert_eq!(
            render_text(&io),
            "Error processing file (read): Permission denied (os error 13)"
        );
        assert_eq!(exit_code(&io), 1);
    }

    #[test]
    fn test_render_no_matches() {
        assert_eq!(
            render_text(&Outcome::NoMatches),
            "No lines found containing the keyword"
        );
        assert_eq!(exit_code(&Outcome::NoMatches), 0);
    }

    #[test]
    fn test_render_json() {
        let outcome = Outcome::ValidationError {
            message: "file not found".into(),
        };
        assert_eq!(
            render_json(&outcome).unwrap(),
            r#"{"outcome":"validation_error","message":"file not found"}"#
        );
    }
}
