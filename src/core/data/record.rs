//! The structured output unit of translation extraction.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::data::{SourceLocation, TagLine, TagMarker};

/// Everything known about one translatable call site after its comments
/// have been attributed and parsed.
///
/// Created once per candidate site, mutated only while tags are folded in
/// and arguments are resolved, then handed to a single consumer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationRecord {
    /// Name of the marker function or declaration the record came from.
    pub function: String,
    pub context: String,
    pub source_text: String,
    /// Source text reconstructed from `//%` comments.
    pub source_text_when_id: String,
    /// Disambiguation comment passed as an argument.
    pub comment: String,
    /// Translator comment collected from `//:` lines.
    pub extra_comment: String,
    pub id_metadata: String,
    pub magic_metadata: BTreeMap<String, String>,
    pub plural_arg_text: String,
    pub plural: bool,
    pub id: String,
    pub location_file: String,
    pub location_line: usize,
    pub location_column: usize,
}

impl AnnotationRecord {
    pub fn at(location: &SourceLocation, function: impl Into<String>) -> Self {
        Self {
            function: function.into(),
            location_file: location.file_path.clone(),
            location_line: location.line,
            location_column: location.col,
            ..Default::default()
        }
    }

    /// Fold one tag contribution into the record.
    pub fn apply(&mut self, tag: &TagLine) {
        let Some(marker) = tag.marker else {
            return;
        };
        match marker {
            TagMarker::ExtraComment => {
                if !self.extra_comment.is_empty() {
                    self.extra_comment.push(' ');
                }
                self.extra_comment.push_str(&tag.text);
            }
            TagMarker::IdMetadata => {
                self.id_metadata = tag.text.clone();
            }
            TagMarker::Magic => {
                let text = tag.text.trim();
                let (key, value) = text
                    .split_once(char::is_whitespace)
                    .unwrap_or((text, ""));
                let value = value.trim();
                if !value.is_empty() {
                    self.magic_metadata
                        .insert(key.to_string(), value.to_string());
                }
            }
            TagMarker::SourceText => {
                self.source_text_when_id.push_str(&tag.text);
            }
        }
    }

    /// A record without a file is never handed to a consumer. Lines and
    /// columns are unsigned, so only the file can be missing.
    pub fn is_valid(&self) -> bool {
        !self.location_file.is_empty()
    }
}
