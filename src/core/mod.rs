//! Core extraction engine.
//!
//! ## Pipeline
//!
//! 1. **Collection** (`collect`): comment streams, the per-file registry and
//!    the backward walk that attributes comments to a site
//! 2. **Parsing** (`parse`): tagged comment lines, string literals,
//!    documentation signatures and property arguments
//! 3. **Extraction** (`extract`, `docs`): candidate sites become annotation
//!    records or documentation records
//!
//! `parsers` turns JavaScript/TypeScript files into comments and candidate
//! sites; `context` runs the whole pipeline over a project in parallel.

pub mod collect;
pub mod context;
pub mod data;
pub mod docs;
pub mod extract;
pub mod markers;
pub mod parse;
pub mod parsers;
pub mod scan;

pub use context::{ContextOptions, DocOutput, ExtractContext, FileFailure, TranslationOutput};
pub use data::{AnnotationRecord, SourceLocation, SourceText};
pub use docs::DocRecord;
pub use markers::{MarkerKind, MarkerTable};
