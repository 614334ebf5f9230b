//! `docsearch` builds the search payload the documentation site embeds in
//! every page, and checks payloads that were built elsewhere.

mod config;
mod content;
mod emit;
mod error;
mod front_matter;
mod href;
mod markdown;

use std::fs;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use search::{DocumentIndex, DocumentSet};
use tracing::Level;

use crate::config::{IndexerConfig, Overrides};
use crate::emit::{DocumentOptions, Format};
use crate::error::IndexerError;
use crate::href::HrefMode;

#[derive(Parser, Debug)]
#[command(name = "docsearch", about = "Documentation search payload builder")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Walk the content directory and emit the document payload.
    Build(BuildCommand),
    /// Validate a payload and optionally run a query against it.
    Check(CheckCommand),
}

#[derive(Args, Debug)]
struct BuildCommand {
    #[arg(long, env = "DOCSEARCH_CONTENT_DIR", default_value = "content")]
    content_dir: PathBuf,

    /// Site generator config supplying `baseURL` and `params.documentationSections`.
    #[arg(long, env = "DOCSEARCH_SITE_CONFIG")]
    site_config: Option<PathBuf>,

    /// Content sections to index (comma separated or repeated).
    #[arg(long = "section", env = "DOCSEARCH_SECTIONS", value_delimiter = ',')]
    sections: Vec<String>,

    #[arg(long, env = "DOCSEARCH_BASE_URL")]
    base_url: Option<String>,

    #[arg(long, value_enum, env = "DOCSEARCH_HREF_MODE", default_value_t = HrefMode::Permalink)]
    href_mode: HrefMode,

    /// Leave page bodies out of the payload.
    #[arg(long, env = "DOCSEARCH_NO_CONTENT")]
    no_content: bool,

    #[arg(long, value_enum, env = "DOCSEARCH_FORMAT", default_value_t = Format::Json)]
    format: Format,

    #[arg(long, env = "DOCSEARCH_SCRIPT_ID", default_value = emit::DEFAULT_SCRIPT_ID)]
    script_id: String,

    /// Output file; stdout when omitted.
    #[arg(short, long, env = "DOCSEARCH_OUTPUT")]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct CheckCommand {
    /// Payload file in either output format.
    payload: PathBuf,

    /// Print the suggestions this query would produce.
    #[arg(short, long)]
    query: Option<String>,
}

fn main() -> Result<(), IndexerError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Command::Build(build) => run_build(build),
        Command::Check(check) => run_check(&check),
    };
    if let Err(e) = &result {
        tracing::error!(error = %e, "docsearch failed");
    }
    result
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).with_writer(std::io::stderr).init();
}

fn run_build(build: BuildCommand) -> Result<(), IndexerError> {
    let config = IndexerConfig::resolve(Overrides {
        site_config: build.site_config,
        sections: build.sections,
        base_url: build.base_url,
    })?;
    tracing::debug!(base_url = %config.base_url, sections = ?config.sections, "resolved config");

    let pages = content::collect(&build.content_dir, &config.sections)?;
    let options =
        DocumentOptions { href_mode: build.href_mode, base_url: config.base_url, include_content: !build.no_content };
    let set = emit::documents(&pages, &options)?;
    let text = emit::render(&set, build.format, &build.script_id)?;
    emit::write(build.output.as_deref(), &text)?;

    tracing::info!(
        documents = set.len(),
        format = ?build.format,
        output = %build.output.as_deref().map_or_else(|| "<stdout>".to_owned(), |p| p.display().to_string()),
        "payload written"
    );
    Ok(())
}

fn run_check(check: &CheckCommand) -> Result<(), IndexerError> {
    let raw =
        fs::read_to_string(&check.payload).map_err(|source| IndexerError::Read { path: check.payload.clone(), source })?;
    let set = DocumentSet::from_json(emit::payload_json(&raw))?;
    tracing::info!(path = %check.payload.display(), documents = set.len(), "payload is valid");

    if let Some(query) = &check.query {
        let index = DocumentIndex::new(&set);
        for suggestion in search::suggest(&index, query) {
            println!("{}\t{}\t{}", suggestion.href, suggestion.title, suggestion.description);
        }
    }
    Ok(())
}
