//! Thin CLI front end over the `robotstxt` library: reads a `robots.txt`
//! document from a file or standard input and reports whether any of the
//! given agents may fetch a given URL.

use std::io::Read;
use std::process::ExitCode;

use clap::Parser;

/// Check whether a URL is allowed by a robots.txt document for one or more
/// crawler identities.
#[derive(Parser, Debug)]
#[command(name = "robotstxt", version, about)]
struct Cli {
    /// Candidate user-agent token; may be repeated.
    #[arg(short, long = "agent", required = true)]
    agents: Vec<String>,

    /// The URL to check.
    #[arg(short, long)]
    url: String,

    /// Path to a robots.txt file; reads standard input if omitted.
    #[arg(short, long)]
    file: Option<std::path::PathBuf>,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read robots.txt bytes: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Matcher(#[from] robotstxt::Error),
}

fn read_input(file: &Option<std::path::PathBuf>) -> Result<Vec<u8>, std::io::Error> {
    match file {
        Some(path) => std::fs::read(path),
        None => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn run(cli: &Cli) -> Result<bool, CliError> {
    let bytes = read_input(&cli.file)?;
    let doc = robotstxt::parse(&bytes);
    let matcher = doc.matcher();
    let agents: Vec<&str> = cli.agents.iter().map(String::as_str).collect();
    Ok(matcher.allowed(&agents, &cli.url)?)
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(3);
        }
    };

    match run(&cli) {
        Ok(true) => {
            println!("ALLOWED");
            ExitCode::from(0)
        }
        Ok(false) => {
            println!("DISALLOWED");
            ExitCode::from(1)
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::from(2)
        }
    }
}
