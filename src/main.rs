use crate::{
    config::Overrides,
    utils::{
        logger::{LogLevel, Logger},
        version::get_version,
    },
};
use clap::{CommandFactory, FromArgMatches, Parser};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::io::{self, BufReader, BufWriter};

mod config;
mod selector;
mod stream;
mod utils;
mod version;

/// Every non-empty line was bumped.
const EXIT_OK: u8 = 0;
/// At least one line could not be bumped.
const EXIT_LINE_FAILED: u8 = 1;
/// Bad configuration or an I/O failure.
const EXIT_FATAL: u8 = 2;

#[derive(Parser)]
#[command(name = "verbump")]
#[command(about = "Reads versions from stdin, one per line, and prints each with one component bumped")]
struct Cli {
    /// Segment to bump: an index, major | minor | patch | pre. Leave empty to
    /// bump the prerelease counter if there is one, otherwise the last segment.
    #[arg(short, long, env = "VERBUMP_SEGMENT")]
    segment: Option<String>,

    /// Config file to use instead of searching for .verbump.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long, default_value_t = false)]
    /// Log every bump to stderr
    verbose: bool,

    #[arg(long, default_value_t = false)]
    /// Disable colored diagnostics
    no_color: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            segment: self.segment.clone(),
            config: self.config.clone(),
            verbose: self.verbose,
            no_color: self.no_color,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let version_static: &'static str = Box::leak(format!("v{}", get_version()).into_boxed_str());
    let matches = Cli::command().version(version_static).get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let settings = match config::load(&cli.overrides()) {
        Ok(settings) => settings,
        Err(e) => {
            let causes: Vec<String> = e.chain().skip(1).map(|c| c.to_string()).collect();
            Logger::new().color(!cli.no_color).log_message_with_trace(
                LogLevel::Error,
                &e.to_string(),
                causes.iter().map(String::as_str).collect(),
            );
            return ExitCode::from(EXIT_FATAL);
        }
    };

    let logger = Logger::new()
        .verbose(settings.verbose)
        .color(settings.color);
    if let Some(path) = &settings.config_path {
        logger.debug(&format!("using config {}", path.display()));
    }
    logger.debug(&format!("bumping segment: {}", settings.selector));

    let stdin = BufReader::new(io::stdin());
    let mut stdout = BufWriter::new(io::stdout());
    let summary = match stream::bump_lines(stdin, &mut stdout, settings.selector, &logger).await {
        Ok(summary) => summary,
        Err(e) => {
            logger.error(&format!("error processing input: {}", e));
            return ExitCode::from(EXIT_FATAL);
        }
    };

    if logger.is_verbose() {
        let level = if summary.is_success() {
            LogLevel::Success
        } else {
            LogLevel::Info
        };
        logger.log_message(
            level,
            &format!(
                "{} line(s) read, {} bumped, {} failed",
                summary.processed, summary.bumped, summary.failed
            ),
        );
    }

    if summary.is_success() {
        ExitCode::from(EXIT_OK)
    } else {
        logger.log_message(
            LogLevel::Warning,
            &format!(
                "{} of {} version(s) could not be bumped",
                summary.failed, summary.processed
            ),
        );
        ExitCode::from(EXIT_LINE_FAILED)
    }
}
