//! Result → human/json string formatting.
//!
//! Two modes:
//! - **Human** (default): one line per result or built file
//! - **JSON** (`--json`): `serde_json::to_string_pretty`

use serde_json::json;
use std::fmt::Display;
use std::path::Path;
use vcdb_core::{DatabaseKind, SearchResult};
use vcdb_search::BuildReport;

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Format search results.
pub fn format_results(results: &[SearchResult], mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => {
            serde_json::to_string_pretty(results).unwrap_or_else(|e| format_error(&e, mode))
        }
        OutputMode::Human => {
            if results.is_empty() {
                return "(no matches)".to_string();
            }
            results
                .iter()
                .enumerate()
                .map(|(i, r)| format!("{:>3}  {:.4}  {}", i + 1, r.similarity, describe(r)))
                .collect::<Vec<_>>()
                .join("\n")
        }
    }
}

fn describe(r: &SearchResult) -> String {
    match r.kind {
        DatabaseKind::Operation => format!("{}  {} [{}]", r.signature, r.op_name, r.database),
        DatabaseKind::CategoryManifest => match r.module_id {
            Some(id) => format!("module {} (id {})", r.module_name, id),
            None => format!("module {} (unregistered)", r.module_name),
        },
    }
}

/// Format the outcome of a build.
pub fn format_build_report(report: &BuildReport, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => {
            let built: Vec<_> = report
                .built
                .iter()
                .map(|b| {
                    json!({
                        "source": b.source.display().to_string(),
                        "output": b.output.display().to_string(),
                        "entries": b.entries,
                        "kind": b.kind,
                    })
                })
                .collect();
            let skipped: Vec<_> = report
                .skipped
                .iter()
                .map(|s| {
                    json!({
                        "source": s.source.display().to_string(),
                        "error": s.error.to_string(),
                    })
                })
                .collect();
            serde_json::to_string_pretty(&json!({
                "built": built,
                "skipped": skipped,
                "entries": report.total_entries(),
            }))
            .unwrap_or_else(|e| format_error(&e, mode))
        }
        OutputMode::Human => {
            let mut lines: Vec<String> = report
                .built
                .iter()
                .map(|b| {
                    format!(
                        "{} -> {} ({} entries)",
                        b.source.display(),
                        b.output.display(),
                        b.entries
                    )
                })
                .collect();
            lines.extend(
                report
                    .skipped
                    .iter()
                    .map(|s| format!("(skipped) {}: {}", s.source.display(), s.error)),
            );
            lines.push(format!(
                "{} indexed, {} skipped, {} entries",
                report.built.len(),
                report.skipped.len(),
                report.total_entries()
            ));
            lines.join("\n")
        }
    }
}

/// Format the outcome of `init`.
pub fn format_init(path: &Path, created: bool, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(&json!({
            "config": path.display().to_string(),
            "created": created,
        }))
        .unwrap_or_else(|e| format_error(&e, mode)),
        OutputMode::Human if created => format!("wrote {}", path.display()),
        OutputMode::Human => format!("{} already exists", path.display()),
    }
}

/// Format an error.
pub fn format_error(err: &dyn Display, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(&json!({
            "error": err.to_string()
        }))
        .unwrap_or_else(|_| format!("{{\"error\": \"{}\"}}", err)),
        OutputMode::Human => format!("(error) {}", err),
    }
}
