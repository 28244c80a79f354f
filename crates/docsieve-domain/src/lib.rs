//! docsieve Domain Layer
//!
//! Value types and trait interfaces shared by every docsieve crate. Like any
//! domain layer it has no external dependencies: the noise-removal pipeline,
//! the analyzers and the command-line runner all depend on it, never the other
//! way around.
//!
//! ## Key Concepts
//!
//! - **RawDocumentUnit**: one unparsed document as handed over by a reader
//! - **FieldSpec**: a named, typed unit destined for the text index
//! - **FieldSet**: the ordered fields produced for one document
//! - **StorePolicy / TermVectorMode**: per-field indexing policy
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Trait definitions for all external collaborators (analyzer, structural
//!   text parser, indexing engine)
//! - Implementations live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod field;
pub mod policy;
pub mod traits;

// Re-exports for convenience
pub use document::RawDocumentUnit;
pub use field::{FieldSet, FieldSpec, FieldValue};
pub use policy::{StorePolicy, TermVectorMode};
