//! CLI entry point for lsr

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use lsr::{ListConfig, Lister};

#[derive(Parser, Debug)]
#[command(name = "lsr")]
#[command(about = "A small cross-platform stand-in for ls")]
#[command(version)]
struct Args {
    /// Directory to list
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Show all files including hidden files
    #[arg(short, long)]
    all: bool,

    /// Show the directory structure of the target itself
    #[arg(short = 'd', long = "directory")]
    directory: bool,

    /// Show all subdirectories encountered
    #[arg(short = 'R', long = "recursive")]
    recursive: bool,

    /// Sort by modification time, most recent first
    #[arg(short = 't', long = "time")]
    time: bool,

    /// Group directories before files
    #[arg(short = 'G', long = "group")]
    group: bool,

    /// Show detailed directory structure in tabular form (reserved)
    #[arg(short = 'l', long = "tabular")]
    tabular: bool,

    /// Quote entry names (reserved)
    #[arg(short = 'Q', long = "quote")]
    quote: bool,
}

fn main() {
    let args = Args::parse();

    let config = ListConfig {
        show_all: args.all,
        directory_only: args.directory,
        group_dirs_first: args.group,
        recursive: args.recursive,
        time_sorted: args.time,
        long_format: args.tabular,
        quote: args.quote,
    };

    let stdout = io::stdout().lock();
    let mut lister = Lister::new(config, stdout);

    if let Err(e) = lister.list(&args.path) {
        eprintln!("lsr: {e}");
        process::exit(1);
    }
}
