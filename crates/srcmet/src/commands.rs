//! Command handlers: boundary validation, analysis, JSON marshaling.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Serialize;

use srcmet_analysis::{analyze, halstead_response, maintainability_response};
use srcmet_math::round_f64;
use srcmet_types::{METRICS_SCHEMA_VERSION, MetricsReceipt};

use crate::cli::InputArgs;

/// Read and validate the payload before the engine ever sees it.
///
/// Rejections here are the transport-level errors of the contract: the
/// engine itself assumes valid text once invoked.
fn read_payload(file: Option<&Path>, max_bytes: u64) -> Result<String> {
    let bytes = match file {
        Some(path) if path.as_os_str() != "-" => std::fs::read(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        _ => {
            let mut buffer = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };

    if bytes.len() as u64 > max_bytes {
        bail!(
            "payload is {} bytes, over the {max_bytes} byte limit; check your input",
            bytes.len()
        );
    }

    String::from_utf8(bytes)
        .map_err(|_| anyhow::anyhow!("payload is not valid UTF-8 text; check your input"))
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}

pub(crate) fn maintainability(args: &InputArgs, pretty: bool, max_bytes: u64) -> Result<()> {
    let source = read_payload(args.file.as_deref(), max_bytes)?;
    let result = analyze(&source);
    print_json(&maintainability_response(&result), pretty)
}

pub(crate) fn loop_depth(args: &InputArgs, max_bytes: u64) -> Result<()> {
    let source = read_payload(args.file.as_deref(), max_bytes)?;
    let result = analyze(&source);
    println!("{}", result.loop_depth);
    Ok(())
}

pub(crate) fn halstead(args: &InputArgs, pretty: bool, max_bytes: u64) -> Result<()> {
    let source = read_payload(args.file.as_deref(), max_bytes)?;
    let result = analyze(&source);
    print_json(&halstead_response(&result.halstead), pretty)
}

pub(crate) fn line_count(args: &InputArgs, pretty: bool, max_bytes: u64) -> Result<()> {
    let source = read_payload(args.file.as_deref(), max_bytes)?;
    let result = analyze(&source);
    print_json(&result.line_counts, pretty)
}

pub(crate) fn report(args: &InputArgs, pretty: bool, max_bytes: u64) -> Result<()> {
    let source = read_payload(args.file.as_deref(), max_bytes)?;
    let mut result = analyze(&source);

    // Presentation rounding happens here, at the edge.
    result.maintainability.index = round_f64(result.maintainability.index, 2);
    result.halstead.volume = round_f64(result.halstead.volume, 2);
    result.halstead.difficulty = round_f64(result.halstead.difficulty, 2);
    result.halstead.effort = round_f64(result.halstead.effort, 2);
    result.halstead.time_seconds = round_f64(result.halstead.time_seconds, 2);
    result.halstead.estimated_bugs = round_f64(result.halstead.estimated_bugs, 4);

    let receipt = MetricsReceipt {
        schema_version: METRICS_SCHEMA_VERSION,
        generated_at_ms: crate::now_ms(),
        tool: crate::tool_info(),
        source_signature: blake3::hash(source.as_bytes()).to_hex().to_string(),
        total_lines: result.total_lines,
        maintainability: result.maintainability,
        loop_depth: result.loop_depth,
        halstead: result.halstead,
        line_counts: result.line_counts,
    };
    print_json(&receipt, pretty)
}

pub(crate) fn completions(shell: clap_complete::Shell) -> Result<()> {
    use clap::CommandFactory;
    let mut command = crate::cli::Cli::command();
    clap_complete::generate(shell, &mut command, "srcmet", &mut std::io::stdout());
    Ok(())
}
