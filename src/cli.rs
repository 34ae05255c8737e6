use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use atty::Stream;
use clap::{ArgAction, Parser};
use glossary_rs::{
    DEFAULT_SEPARATORS, DEFAULT_TITLE, ScanBound, SeparatorSet, SiteConfig, SiteSummary, generate,
};
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "glossary-rs",
    about = "Generate cross-linked HTML pages from a glossary text file",
    version
)]
pub struct Cli {
    /// Glossary text file. Prompted for when omitted.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Folder that receives index.html and the term pages. Prompted for when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Characters that separate words inside definitions.
    #[arg(long, default_value = DEFAULT_SEPARATORS, hide_default_value = true)]
    separators: String,

    /// Title and heading of the index page.
    #[arg(long, default_value = DEFAULT_TITLE)]
    title: String,

    /// Stop each definition scan at the start of its final character, so a
    /// trailing separator such as a period is left out of the page.
    #[arg(long)]
    legacy_scan_bound: bool,

    /// Emit a JSON summary instead of human-readable text.
    #[arg(long)]
    json: bool,

    /// Raise log verbosity (-v for info, -vv for debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdin = io::stdin();
    let mut lines = stdin.lock();
    let input = match cli.input {
        Some(path) => path,
        None => prompt_path(&mut lines, "Enter the input file name:")?,
    };
    let output = match cli.output {
        Some(path) => path,
        None => prompt_path(&mut lines, "Enter the output folder name:")?,
    };

    let scan_bound = if cli.legacy_scan_bound {
        ScanBound::DropLast
    } else {
        ScanBound::Full
    };
    let config = SiteConfig::default()
        .with_separators(SeparatorSet::from_chars(&cli.separators))
        .with_scan_bound(scan_bound)
        .with_title(cli.title);

    let summary = generate(&input, &output, &config)?;

    if cli.json {
        let payload = json!({
            "input": input,
            "config": config,
            "site": summary,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        print_summary(&input, &summary);
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn prompt_path<R: BufRead>(reader: &mut R, message: &str) -> Result<PathBuf, Box<dyn Error>> {
    if atty::is(Stream::Stdin) {
        let mut stderr = io::stderr();
        writeln!(stderr, "{message}")?;
        stderr.flush()?;
    }
    read_path(reader).ok_or_else(|| format!("No answer given for {message:?}").into())
}

fn read_path<R: BufRead>(reader: &mut R) -> Option<PathBuf> {
    let mut answer = String::new();
    reader.read_line(&mut answer).ok()?;
    let trimmed = answer.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(PathBuf::from(trimmed))
    }
}

fn print_summary(input: &Path, summary: &SiteSummary) {
    println!(
        "Wrote {} term page{} from {} to {}",
        summary.pages.len(),
        if summary.pages.len() == 1 { "" } else { "s" },
        input.display(),
        summary.folder.display()
    );
    println!("  {}", summary.index.display());
    for page in &summary.pages {
        println!("  {}", page.display());
    }
}
