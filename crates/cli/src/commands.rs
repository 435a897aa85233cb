//! Clap command tree definition.

use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;
use vcdb_core::CONFIG_FILE_NAME;

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    Command::new("vcdb")
        .about("TF-IDF catalog indexer and search")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .help("Configuration file (default: vcdb.toml)")
                .value_parser(value_parser!(PathBuf))
                .default_value(CONFIG_FILE_NAME)
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(build_init())
        .subcommand(build_build())
        .subcommand(build_search())
}

fn build_init() -> Command {
    Command::new("init").about("Write a default configuration file")
}

fn build_build() -> Command {
    Command::new("build")
        .about("Vectorize every source file into an index")
        .arg(
            Arg::new("source")
                .long("source")
                .help("Source directory (default: from config)")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("out")
                .long("out")
                .help("Index directory (default: from config)")
                .value_parser(value_parser!(PathBuf)),
        )
}

fn build_search() -> Command {
    Command::new("search")
        .about("Search one index or every index in a directory")
        .arg(
            Arg::new("query")
                .required(true)
                .num_args(1..)
                .help("Search query"),
        )
        .arg(
            Arg::new("index")
                .long("index")
                .help("Search a single index file")
                .value_parser(value_parser!(PathBuf))
                .conflicts_with("dir"),
        )
        .arg(
            Arg::new("dir")
                .long("dir")
                .help("Search every index in this directory (default: from config)")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("k")
                .short('k')
                .long("k")
                .help("Number of results (default: from config)")
                .value_parser(value_parser!(usize)),
        )
}
