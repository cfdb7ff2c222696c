//! Command line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};

/// Default cap on accepted payload size (1 MiB).
pub const DEFAULT_MAX_SOURCE_BYTES: u64 = 1024 * 1024;

#[derive(Parser, Debug)]
#[command(name = "srcmet", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Maximum accepted payload size in bytes [default: 1048576].
    #[arg(long, value_name = "BYTES", global = true)]
    pub max_bytes: Option<u64>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Maintainability triple: [maintainabilityIndex, cyclomaticComplexity, linesOfCode].
    Maintainability(InputArgs),
    /// Maximum loop-nesting depth as a bare integer.
    LoopDepth(InputArgs),
    /// Halstead metrics: vocabulary, length, volume, effort, difficulty.
    Halstead(InputArgs),
    /// Line counts: code, comment, and blank lines plus unique functions.
    LineCount(InputArgs),
    /// Full metric receipt with tool info and source signature.
    Report(InputArgs),
    /// Generate shell completions.
    Completions(CompletionsArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Source file to analyze; stdin when omitted or "-".
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct CompletionsArgs {
    /// Shell to emit completions for.
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

/// Optional presentation defaults loaded from the user's config dir.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserConfig {
    pub pretty: Option<bool>,
    pub max_source_bytes: Option<u64>,
}
