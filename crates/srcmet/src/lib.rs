//! # srcmet
//!
//! **CLI Binary**
//!
//! Entry point for the `srcmet` command-line application. It validates the
//! payload at the boundary, hands valid text to the pure analysis pipeline,
//! and marshals the results into the JSON shapes callers consume.
//!
//! ## Responsibilities
//! * Parse command line arguments
//! * Enforce the transport rules (payload size, UTF-8)
//! * Dispatch commands and handle exit codes
//!
//! The engine crates never see an invalid payload and never fail on a
//! valid one.

pub mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands, DEFAULT_MAX_SOURCE_BYTES, UserConfig};

fn load_config() -> Option<UserConfig> {
    let config_path = dirs::config_dir()?.join("srcmet").join("config.json");
    if config_path.exists() {
        let content = std::fs::read_to_string(&config_path).ok()?;
        serde_json::from_str(&content).ok()
    } else {
        None
    }
}

fn now_ms() -> u128 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

fn tool_info() -> srcmet_types::ToolInfo {
    srcmet_types::ToolInfo {
        name: "srcmet".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

/// Entry point used by the `srcmet` binary.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config().unwrap_or_default();

    let pretty = cli.global.pretty || config.pretty.unwrap_or(false);
    let max_bytes = cli
        .global
        .max_bytes
        .or(config.max_source_bytes)
        .unwrap_or(DEFAULT_MAX_SOURCE_BYTES);

    match cli.command {
        Commands::Maintainability(args) => commands::maintainability(&args, pretty, max_bytes),
        Commands::LoopDepth(args) => commands::loop_depth(&args, max_bytes),
        Commands::Halstead(args) => commands::halstead(&args, pretty, max_bytes),
        Commands::LineCount(args) => commands::line_count(&args, pretty, max_bytes),
        Commands::Report(args) => commands::report(&args, pretty, max_bytes),
        Commands::Completions(args) => commands::completions(args.shell),
    }
}

/// Render an error chain for stderr.
pub fn format_error(err: &anyhow::Error) -> String {
    let mut out = format!("error: {err}");
    for cause in err.chain().skip(1) {
        out.push_str(&format!("\n  caused by: {cause}"));
    }
    out
}
