use std::path::PathBuf;
use clap::{Arg, Command};
use crate::config::Args;
use crate::io::print_error;

fn command() -> Command {
    Command::new("sitemap-gen")
        .version("0.1.0")
        .about("Write sitemap.xml for a static website by scanning its directory tree for HTML pages.")
        .after_help("The BASE_URL environment variable sets the absolute URL prefix of every <loc>.")
        .arg(
            Arg::new("source")
                .short('s')
                .long("source")
                .value_parser(clap::value_parser!(PathBuf))
                .value_name("SOURCE_DIR")
                .help("Specifies the site root to scan (defaults to current directory if not provided)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(clap::ArgAction::SetTrue)
                .help("Enables verbose output"),
        )
}

/// parse command line arguments
pub fn parse_args() -> Args {
    args_from_matches(command().get_matches())
}

fn args_from_matches(matches: clap::ArgMatches) -> Args {
    let source = matches
        .get_one::<PathBuf>("source")
        .cloned()
        .unwrap_or_else(|| {
            std::env::current_dir().unwrap_or_else(|_| {
                print_error("Unable to determine the current directory.");
                std::process::exit(1);
            })
        });

    Args {
        source,
        verbose: matches.get_flag("verbose"),
    }
}
