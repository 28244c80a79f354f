//! CLI argument parsing.

use crate::config::Config;
use clap::Parser;
use docsieve_domain::{StorePolicy, TermVectorMode};
use docsieve_processor::FormatAdapter;
use std::path::PathBuf;

/// docsieve - Turn raw corpus documents into index-ready field sets.
#[derive(Debug, Parser)]
#[command(name = "docsieve")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input format
    #[arg(short, long, value_enum)]
    pub format: CliFormat,

    /// Input corpus file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output file for field sets, one JSON object per line (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, env = "DOCSIEVE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Store content field values (shorthand for `--store-policy STORE`)
    #[arg(long, conflicts_with = "store_policy")]
    pub store: bool,

    /// Store policy for content fields
    #[arg(long, value_parser = parse_store_policy)]
    pub store_policy: Option<StorePolicy>,

    /// Term vector mode for content fields
    #[arg(long, value_parser = parse_term_vector)]
    pub term_vector: Option<TermVectorMode>,

    /// Stopword file, one word per line
    #[arg(long)]
    pub stopwords: Option<PathBuf>,

    /// Disable stemming
    #[arg(long)]
    pub no_stem: bool,

    /// Index removed tags and URLs as a `meta` field (plain format)
    #[arg(long)]
    pub index_meta: bool,

    /// Attach the full field computed by the structural format
    #[arg(long)]
    pub attach_full: bool,
}

/// Input format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Tagged documents, full and clean fields
    Plain,
    /// Tagged news documents, clean field only
    Clean,
    /// Tagged documents cleaned by an HTML parser
    Structural,
    /// News-article JSON envelopes, one per line
    Json,
}

impl From<CliFormat> for FormatAdapter {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Plain => FormatAdapter::PlainFull,
            CliFormat::Clean => FormatAdapter::CleanOnly,
            CliFormat::Structural => FormatAdapter::StructuralParse,
            CliFormat::Json => FormatAdapter::JsonEnvelope,
        }
    }
}

fn parse_store_policy(s: &str) -> Result<StorePolicy, String> {
    s.parse()
}

fn parse_term_vector(s: &str) -> Result<TermVectorMode, String> {
    s.parse()
}

impl Cli {
    /// Apply command-line flags on top of file configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if self.store {
            config.processor.store_policy = StorePolicy::Store;
        }
        if let Some(policy) = self.store_policy {
            config.processor.store_policy = policy;
        }
        if let Some(mode) = self.term_vector {
            config.processor.term_vector = mode;
        }
        if let Some(path) = &self.stopwords {
            config.stopword_file = Some(path.clone());
        }
        if self.no_stem {
            config.analyzer.stem = false;
        }
        if self.index_meta {
            config.processor.index_meta = true;
        }
        if self.attach_full {
            config.processor.attach_structural_full = true;
        }
    }
}
