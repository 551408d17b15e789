//! Phase 2: Extraction - Candidate sites to annotation records.
//!
//! A front-end hands each file's comments and candidate sites to the
//! [`Extractor`]. Attribution, tag parsing and record building happen here;
//! finished records go to a [`Catalog`] shared by all workers.

pub mod builder;
pub mod catalog;
pub mod engine;
pub mod site;

pub use builder::build_record;
pub use catalog::{Catalog, Located};
pub use engine::{ExtractError, Extractor, FileExtraction};
pub use site::{CandidateSite, DeclarationKind, SiteKind};
