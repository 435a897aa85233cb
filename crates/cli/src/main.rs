//! vcdb CLI: build TF-IDF indexes from catalog files and query them.
//!
//! - `vcdb init`: write a default `vcdb.toml`
//! - `vcdb build`: vectorize every source file
//! - `vcdb search QUERY...`: rank entries of one index or all of them
//!
//! Logs go to stderr; results go to stdout so `--json` output stays clean.

mod commands;
mod format;
mod parse;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;
use vcdb_core::VcdbConfig;
use vcdb_search::{vectorize, Searcher};

use commands::build_cli;
use format::{format_build_report, format_error, format_init, format_results, OutputMode};
use parse::{matches_to_action, CliAction, SearchTarget};

fn main() {
    let matches = build_cli().get_matches();

    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let log_level = if matches.get_flag("debug") {
        Level::DEBUG
    } else {
        Level::INFO
    };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let action = match matches_to_action(&matches) {
        Ok(action) => action,
        Err(e) => {
            eprintln!("{}", format_error(&e, output_mode));
            process::exit(1);
        }
    };
    let config_path = matches
        .get_one::<PathBuf>("config")
        .cloned()
        .unwrap_or_else(|| PathBuf::from(vcdb_core::CONFIG_FILE_NAME));

    match run(action, &config_path, output_mode) {
        Ok(out) => println!("{}", out),
        Err(e) => {
            eprintln!("{}", format_error(&format!("{:#}", e), output_mode));
            process::exit(1);
        }
    }
}

fn run(action: CliAction, config_path: &Path, mode: OutputMode) -> Result<String> {
    match action {
        CliAction::Init => {
            let created = VcdbConfig::write_default_if_missing(config_path)
                .with_context(|| format!("writing {}", config_path.display()))?;
            Ok(format_init(config_path, created, mode))
        }
        CliAction::Build { source, out } => {
            let config = load_config(config_path)?;
            let source = source.unwrap_or_else(|| config.source_dir.clone());
            let out = out.unwrap_or_else(|| config.vectors_dir.clone());
            let report = vectorize(&source, &out, &config)?;
            Ok(format_build_report(&report, mode))
        }
        CliAction::Search { query, target, k } => {
            let config = load_config(config_path)?;
            let top_k = k.unwrap_or(config.default_top_k);
            let searcher = Searcher::new(config);
            let results = match target {
                SearchTarget::Index(path) => searcher.search(&query, &path, top_k)?,
                SearchTarget::Dir(dir) => searcher.search_all(&query, &dir, top_k)?,
                SearchTarget::Configured => searcher.search_configured(&query, top_k)?,
            };
            Ok(format_results(&results, mode))
        }
    }
}

fn load_config(path: &Path) -> Result<VcdbConfig> {
    let config = VcdbConfig::load_or_default(path)
        .with_context(|| format!("loading {}", path.display()))?;
    debug!(?config, "configuration loaded");
    Ok(config)
}
