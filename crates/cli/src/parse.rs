//! ArgMatches → CliAction conversion.

use clap::ArgMatches;
use std::path::PathBuf;

/// Where a search looks for indexes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchTarget {
    /// One index file
    Index(PathBuf),
    /// Every index in a directory
    Dir(PathBuf),
    /// The configured vectors directory
    Configured,
}

/// The result of parsing the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    /// Write the default configuration file.
    Init,
    /// Vectorize sources; `None` falls back to the configuration.
    Build {
        source: Option<PathBuf>,
        out: Option<PathBuf>,
    },
    /// Run a query.
    Search {
        query: String,
        target: SearchTarget,
        k: Option<usize>,
    },
}

/// Convert clap matches into an action.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, String> {
    match matches.subcommand() {
        Some(("init", _)) => Ok(CliAction::Init),
        Some(("build", m)) => Ok(CliAction::Build {
            source: m.get_one::<PathBuf>("source").cloned(),
            out: m.get_one::<PathBuf>("out").cloned(),
        }),
        Some(("search", m)) => parse_search(m),
        Some((other, _)) => Err(format!("Unknown command: {}", other)),
        None => Err("No command given".to_string()),
    }
}

fn parse_search(m: &ArgMatches) -> Result<CliAction, String> {
    // Words are joined so `vcdb search add two numbers` needs no quoting
    let query = m
        .get_many::<String>("query")
        .map(|words| words.cloned().collect::<Vec<_>>().join(" "))
        .ok_or_else(|| "Missing query".to_string())?;

    let target = match (m.get_one::<PathBuf>("index"), m.get_one::<PathBuf>("dir")) {
        (Some(index), _) => SearchTarget::Index(index.clone()),
        (None, Some(dir)) => SearchTarget::Dir(dir.clone()),
        (None, None) => SearchTarget::Configured,
    };

    Ok(CliAction::Search {
        query,
        target,
        k: m.get_one::<usize>("k").copied(),
    })
}
