//! Record builder: turns a site plus its folded tags into a record.

use tracing::debug;

use crate::core::data::{AnnotationRecord, TagLine};
use crate::core::extract::site::{CandidateSite, SiteKind};
use crate::core::markers::{MarkerFamily, MarkerKind};
use crate::core::parse::{has_quote, literal_from_source};

/// Build the record for `site`, or `None` if the site is unattributable.
///
/// Only marker calls produce translation records; declarations belong to the
/// documentation front-end.
pub fn build_record(site: &CandidateSite, tags: &[TagLine]) -> Option<AnnotationRecord> {
    let SiteKind::Call { marker } = site.kind else {
        debug!(name = %site.name_hint, "declaration is not a translation site");
        return None;
    };

    let mut record = AnnotationRecord::at(&site.location, site.name_hint.as_str());
    for tag in tags {
        record.apply(tag);
    }
    resolve_call(site, marker, record)
}

/// Literal text of the argument in `slot`.
///
/// `Some(None)` when the call has no such argument, `None` when the argument
/// is present but is not a literal.
fn literal_argument(site: &CandidateSite, slot: Option<usize>) -> Option<Option<String>> {
    match site.argument(slot) {
        None => Some(None),
        Some(raw) if has_quote(raw) => Some(Some(literal_from_source(raw))),
        Some(raw) => {
            debug!(argument = raw, marker = %site.name_hint, "argument is not a literal");
            None
        }
    }
}

fn resolve_call(
    site: &CandidateSite,
    marker: MarkerKind,
    mut record: AnnotationRecord,
) -> Option<AnnotationRecord> {
    let slots = marker.slots();

    record.comment = site
        .argument(slots.comment)
        .map(literal_from_source)
        .unwrap_or_default();
    record.plural_arg_text = site
        .argument(slots.plural)
        .map(|text| text.trim().to_string())
        .unwrap_or_default();
    record.plural = marker.forces_plural() || !record.plural_arg_text.is_empty();

    match marker.family() {
        MarkerFamily::Tr | MarkerFamily::Translate => {
            let explicit = literal_argument(site, slots.context)?;
            if slots.context.is_some() && explicit.is_none() {
                debug!(marker = %site.name_hint, "call has no context argument");
                return None;
            }
            let Some(source) = literal_argument(site, slots.source)? else {
                debug!(marker = %site.name_hint, "call has no source text");
                return None;
            };
            record.source_text = source;
            record.context = explicit
                .filter(|context| !context.is_empty())
                .unwrap_or_else(|| site.structural_context.clone());

            if marker.family() == MarkerFamily::Tr && record.context.is_empty() {
                debug!(marker = %site.name_hint, "call has no context");
                return None;
            }
            if !record.source_text_when_id.is_empty() {
                debug!(marker = %site.name_hint, "//% is ignored without an id based marker");
            }
            record.id = record.id_metadata.clone();
        }
        MarkerFamily::TrId => {
            let Some(id) = literal_argument(site, slots.id)? else {
                debug!(marker = %site.name_hint, "call has no id");
                return None;
            };
            if !record.id_metadata.is_empty() {
                debug!(marker = %site.name_hint, "//= is ignored with an id based marker");
            }
            record.id = id;
            record.source_text = record.source_text_when_id.clone();
        }
    }
    Some(record)
}
