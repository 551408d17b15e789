//! Core data types shared by the collection, parsing and extraction phases.
//!
//! ## Module Structure
//!
//! - `comment`: Comment and CommentKind (line vs block comments)
//! - `record`: AnnotationRecord, the output of translation extraction
//! - `source`: SourceLocation and SourceText (raw buffer with line index)
//! - `tag`: TagMarker and TagLine, the alphabet of tagged comments

pub mod comment;
pub mod record;
pub mod source;
pub mod tag;

pub use comment::{Comment, CommentKind};
pub use record::AnnotationRecord;
pub use source::{SourceLocation, SourceText};
pub use tag::{TagLine, TagMarker};
