use std::path::Path;

use clap::{value_parser, Arg, ArgAction, Command};
use karel::checking;
use karel::language::{Settings, DEFAULT_MAX_DIAGNOSTICS};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod editor;
mod problem;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    // stdout belongs to the protocol when running as a language server, so
    // logging always goes to stderr.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let matches = Command::new("karel")
        .version(VERSION)
        .propagate_version(true)
        .about("Validator and language server for the Karel robot language.")
        .disable_help_subcommand(true)
        .subcommand(
            Command::new("check")
                .about("Check the given program for illegal characters and bad procedure calls")
                .arg(
                    Arg::new("max")
                        .long("max")
                        .value_parser(value_parser!(usize))
                        .default_value("1000")
                        .help("The maximum number of problems to report in each category."),
                )
                .arg(
                    Arg::new("concise")
                        .long("concise")
                        .action(ArgAction::SetTrue)
                        .help("Report each problem on a single line."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the Karel program you want to check."),
                ),
        )
        .subcommand(
            Command::new("language")
                .about("Run the Karel Language Server on stdin and stdout"),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("check", submatches)) => {
            let filename = match submatches.get_one::<String>("filename") {
                Some(filename) => Path::new(filename),
                None => {
                    eprintln!("A filename is required.");
                    std::process::exit(2);
                }
            };
            let limit = submatches
                .get_one::<usize>("max")
                .copied()
                .unwrap_or(DEFAULT_MAX_DIAGNOSTICS);
            let concise = submatches.get_flag("concise");

            std::process::exit(check(filename, limit, concise));
        }
        Some(("language", _)) => {
            if let Err(error) = editor::run_language_server() {
                eprintln!("{}", error);
                std::process::exit(1);
            }
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: karel [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

/// Validate a file from disk and print whatever problems were found,
/// returning the exit code.
fn check(filename: &Path, limit: usize, concise: bool) -> i32 {
    debug!("Checking {}", filename.display());

    let content = match checking::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error));
            return 1;
        }
    };

    let report = checking::validate(&content, Settings::with_limit(limit));

    for issue in &report.problems {
        if concise {
            println!("{}", problem::concise_problem(issue, filename, &content));
        } else {
            println!("{}\n", problem::full_problem(issue, filename, &content));
        }
    }

    if report
        .problems
        .is_empty()
    {
        0
    } else {
        1
    }
}
