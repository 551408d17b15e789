//! Per-file extraction engine.
//!
//! A file is processed by exactly one caller: the comment registry and its
//! consumed bitset live for the duration of [`Extractor::extract_file`] and
//! are never shared. Sites are handled in source order, so attribution is
//! first-come-first-served.

use thiserror::Error;
use tracing::debug;

use crate::core::collect::{CommentFinder, CommentRegistry};
use crate::core::data::{AnnotationRecord, Comment, SourceLocation, SourceText, TagLine};
use crate::core::extract::builder::build_record;
use crate::core::extract::site::CandidateSite;
use crate::core::markers::MarkerTable;
use crate::core::parse::parse_comment;

/// Malformed input that stops the rest of a file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("{file}: site at offset {offset} is outside the file ({len} bytes)")]
    OffsetOutOfRange {
        file: String,
        offset: usize,
        len: usize,
    },
    #[error("{file}: received a site located in {site_file}")]
    ForeignSite { file: String, site_file: String },
}

/// Outcome of one file.
#[derive(Debug, Default)]
pub struct FileExtraction {
    pub records: Vec<AnnotationRecord>,
    /// Sites that produced no record.
    pub unattributed: Vec<SourceLocation>,
    /// Set when processing stopped early; records before the failure are kept.
    pub error: Option<ExtractError>,
}

pub struct Extractor<'a> {
    markers: &'a MarkerTable,
}

impl<'a> Extractor<'a> {
    pub fn new(markers: &'a MarkerTable) -> Self {
        Self { markers }
    }

    pub fn extract_file(
        &self,
        source: &SourceText,
        comments: Vec<Comment>,
        mut sites: Vec<CandidateSite>,
    ) -> FileExtraction {
        sites.sort_by_key(|site| site.location.offset);

        let mut registry = CommentRegistry::new(comments);
        let mut finder = CommentFinder::new(&mut registry, source, self.markers);
        let mut outcome = FileExtraction::default();

        for (index, site) in sites.iter().enumerate() {
            if let Err(err) = check_site(source, site) {
                debug!(%err, "aborting remaining sites of file");
                outcome.error = Some(err);
                break;
            }

            let next_site = sites.get(index + 1).map(|next| next.location.offset);
            let attribution = finder.attribute(&site.location, next_site);
            let tags: Vec<TagLine> = finder
                .texts(&attribution)
                .into_iter()
                .flat_map(parse_comment)
                .collect();

            match build_record(site, &tags) {
                Some(record) if record.is_valid() => outcome.records.push(record),
                _ => outcome.unattributed.push(site.location.clone()),
            }
        }
        outcome
    }
}

fn check_site(source: &SourceText, site: &CandidateSite) -> Result<(), ExtractError> {
    if site.location.file_path != source.path() {
        return Err(ExtractError::ForeignSite {
            file: source.path().to_string(),
            site_file: site.location.file_path.clone(),
        });
    }
    if site.location.offset > source.len() {
        return Err(ExtractError::OffsetOutOfRange {
            file: source.path().to_string(),
            offset: site.location.offset,
            len: source.len(),
        });
    }
    Ok(())
}
