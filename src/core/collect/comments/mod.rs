//! Comment collection.
//!
//! Two collectors produce the per-file comment stream the registry is built
//! from:
//!
//! - `collector`: flattens swc's leading/trailing comment maps of a parsed file
//! - `scanner`: lexer-level scan of raw C-family text, no parser needed

pub mod collector;
pub mod scanner;
