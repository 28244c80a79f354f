//! docsieve - Turn raw corpus documents into index-ready field sets.

use clap::Parser;
use docsieve_cli::{run_corpus, Cli, Config};
use docsieve_processor::{DocumentProcessor, FormatAdapter};
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr; stdout may carry field sets
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> docsieve_cli::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);

    let analyzer = config.build_analyzer()?;
    let adapter = FormatAdapter::from(cli.format);
    let processor = DocumentProcessor::with_scraper(analyzer, config.processor);
    info!(
        "Processing {} as {} (store: {}, term vectors: {})",
        cli.input.display(),
        adapter,
        processor.config().store_policy,
        processor.config().term_vector
    );

    let input = BufReader::new(File::open(&cli.input)?);

    match &cli.output {
        Some(path) => run_corpus(&processor, adapter, input, BufWriter::new(File::create(path)?))?,
        None => run_corpus(&processor, adapter, input, io::stdout().lock())?,
    };
    Ok(())
}
