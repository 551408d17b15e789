//! Phase 1: Collection - Comments and their attribution to sites.
//!
//! This module owns everything between "the file's comments" and "the
//! comments that document this location":
//!
//! - `comments`: comment streams from parsed files or raw text
//! - `registry`: per-file ordered comment arena with a consumed bitset
//! - `adjacency`: accept/skip/stop rules for one candidate comment
//! - `finder`: the backward walk that assembles a site's comment block

pub mod adjacency;
pub mod comments;
pub mod finder;
pub mod registry;

pub use adjacency::{AdjacencyValidator, StopReason, Verdict};
pub use comments::collector::CommentCollector;
pub use comments::scanner::scan_comments;
pub use finder::{Attribution, CommentFinder};
pub use registry::CommentRegistry;
