//! impress-isbn CLI
//!
//! Prints the check digit of an ISBN-10 or ISBN-13 given on the command line.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use impress_isbn::{
    render, token_at, verify_with_config, CheckConfig, IsbnError, IsbnKind, OutputFormat,
};

#[derive(Parser, Debug)]
#[command(
    name = "impress-isbn",
    about = "Compute and verify ISBN-10/ISBN-13 check digits",
    version
)]
struct Cli {
    /// ISBN with or without separators (or surrounding text with --cursor)
    isbn: String,

    /// Which algorithm to use
    #[arg(short, long, value_enum, default_value_t = KindArg::Auto)]
    kind: KindArg,

    /// Fail if the supplied check character is wrong
    #[arg(short, long)]
    strict: bool,

    /// Print the full report as JSON
    #[arg(long)]
    json: bool,

    /// Byte offset of the cursor; checks the ISBN-like token under it
    #[arg(long)]
    cursor: Option<usize>,

    /// Configuration file (TOML, or JSON with a .json extension)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log routing decisions to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum KindArg {
    Auto,
    Isbn10,
    Isbn13,
}

impl Cli {
    /// Config file values, overridden by explicit flags.
    fn check_config(&self) -> Result<CheckConfig, IsbnError> {
        let mut config = match &self.config {
            Some(path) => CheckConfig::load(path)?,
            None => CheckConfig::default(),
        };
        match self.kind {
            KindArg::Auto => {}
            KindArg::Isbn10 => config.kind = Some(IsbnKind::Isbn10),
            KindArg::Isbn13 => config.kind = Some(IsbnKind::Isbn13),
        }
        if self.strict {
            config.strict = true;
        }
        if self.json {
            config.output = OutputFormat::Json;
        }
        Ok(config)
    }

    /// The text to check: the whole argument, or the token under the cursor.
    fn input(&self) -> String {
        match self.cursor {
            Some(offset) => token_at(&self.isbn, offset)
                .map(|token| token.value)
                .unwrap_or_default(),
            None => self.isbn.clone(),
        }
    }
}

fn run(cli: &Cli) -> Result<String, IsbnError> {
    let config = cli.check_config()?;
    let report = verify_with_config(&cli.input(), &config)?;
    render(&report, config.output)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err @ IsbnError::Config(_)) => {
            eprintln!("Error: {err}");
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
