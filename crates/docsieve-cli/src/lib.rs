//! docsieve CLI library.
//!
//! This library provides the pieces behind the `docsieve` binary: argument
//! parsing, configuration loading, corpus readers, the JSON-lines sink and
//! the batch runner.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod reader;

pub use cli::{Cli, CliFormat};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::JsonLinesSink;
pub use pipeline::{run_batch, run_corpus, BatchStats};
pub use reader::{JsonLinesReader, TrecReader};
