// TextFilter - main.rs
//
// Command-line entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading (platform default or --config)
// 3. Logging initialisation (debug mode support)
// 4. Running the filter-export operation and rendering its outcome

use clap::Parser;
use std::path::PathBuf;
use textfilter::app::filter_export::{self, ExportOptions};
use textfilter::app::report;
use textfilter::platform;
use textfilter::util;

/// TextFilter - keep only the lines of a text file that contain a keyword.
///
/// The matches are written next to the source as
/// `<stem>_filtered_<keyword><extension>`.
#[derive(Parser, Debug)]
#[command(name = "textfilter", version, about)]
struct Cli {
    /// Text file to filter.
    file: Option<String>,

    /// Keyword a line must contain (case-sensitive, surrounding whitespace ignored).
    /// May start with `-`; use `--` before it if it collides with a flag.
    #[arg(allow_hyphen_values = true)]
    keyword: Option<String>,

    /// Path to a config.toml to use instead of the platform default.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Print the outcome as a JSON object.
    #[arg(long = "json")]
    json: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config is read before logging exists; its warnings are replayed below.
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| platform::config::PlatformPaths::resolve().config_file());
    let (config, config_warnings) = platform::config::load_config(&config_path);

    util::logging::init(
        cli.debug,
        config.log_level.as_deref(),
        config.log_file.as_deref(),
    );

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "TextFilter starting"
    );

    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    // Absent arguments become empty strings so they surface as "missing input".
    let source = cli.file.unwrap_or_default();
    let keyword = cli.keyword.unwrap_or_default();

    let outcome = filter_export::run(&source, &keyword, &ExportOptions::from(&config));

    if cli.json {
        match report::render_json(&outcome) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialise outcome");
                eprintln!("Error: failed to serialise outcome: {e}");
                std::process::exit(util::constants::EXIT_IO_ERROR);
            }
        }
    } else if outcome.is_success() {
        println!("{}", report::render_text(&outcome));
    } else {
        eprintln!("{}", report::render_text(&outcome));
    }

    std::process::exit(report::exit_code(&outcome));
}
