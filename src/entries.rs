//! Output entries: the records produced by both front-ends, behind one
//! reporting interface.

use enum_dispatch::enum_dispatch;
use serde::Serialize;

use crate::core::{
    data::AnnotationRecord,
    docs::{DocRecord, DocStatus},
    extract::DeclarationKind,
};

/// Trait for records that can be printed by the CLI.
///
/// Uses `enum_dispatch` for dispatch on the [`Entry`] enum.
#[enum_dispatch]
pub trait Report {
    /// `(file, line, column)` of the site the record came from.
    fn position(&self) -> (&str, usize, usize);

    /// Short label printed before the headline (`qsTr`, `property`, ...).
    fn label(&self) -> String;

    /// The text shown in quotes on the first line.
    fn headline(&self) -> String;

    /// Optional dimmed annotation after the headline.
    fn annotation(&self) -> Option<String> {
        None
    }

    /// `= name: value` lines, only the non-empty ones.
    fn notes(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

/// One reported record.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Entry {
    Translation(AnnotationRecord),
    Doc(DocRecord),
}

fn push_note(notes: &mut Vec<(&'static str, String)>, name: &'static str, value: &str) {
    if !value.is_empty() {
        notes.push((name, value.to_string()));
    }
}

impl Report for AnnotationRecord {
    fn position(&self) -> (&str, usize, usize) {
        (&self.location_file, self.location_line, self.location_column)
    }

    fn label(&self) -> String {
        self.function.clone()
    }

    fn headline(&self) -> String {
        if self.source_text.is_empty() {
            self.id.clone()
        } else {
            self.source_text.clone()
        }
    }

    fn annotation(&self) -> Option<String> {
        self.plural.then(|| "plural".to_string())
    }

    fn notes(&self) -> Vec<(&'static str, String)> {
        let mut notes = Vec::new();
        push_note(&mut notes, "context", &self.context);
        if !self.source_text.is_empty() {
            push_note(&mut notes, "id", &self.id);
        }
        push_note(&mut notes, "comment", &self.comment);
        push_note(&mut notes, "extra", &self.extra_comment);
        for (key, value) in &self.magic_metadata {
            notes.push(("meta", format!("{key}={value}")));
        }
        notes
    }
}

impl Report for DocRecord {
    fn position(&self) -> (&str, usize, usize) {
        (&self.location_file, self.location_line, self.location_column)
    }

    fn label(&self) -> String {
        let kind = match self.kind {
            DeclarationKind::Type => "type",
            DeclarationKind::Property => "property",
            DeclarationKind::Method => "method",
            DeclarationKind::Signal => "signal",
        };
        if self.attached {
            format!("attached {kind}")
        } else {
            kind.to_string()
        }
    }

    fn headline(&self) -> String {
        let mut name = self.qualifiers.clone();
        name.push(self.name.clone());
        name.join("::")
    }

    fn annotation(&self) -> Option<String> {
        match self.kind {
            DeclarationKind::Method | DeclarationKind::Signal if !self.parameters.is_empty() => {
                let params: Vec<String> = self
                    .parameters
                    .iter()
                    .map(|p| format!("{} {}", p.ty, p.name).trim().to_string())
                    .collect();
                Some(format!("({})", params.join(", ")))
            }
            _ if !self.data_type.is_empty() => Some(self.data_type.clone()),
            _ if !self.return_type.is_empty() => Some(self.return_type.clone()),
            _ => None,
        }
    }

    fn notes(&self) -> Vec<(&'static str, String)> {
        let mut notes = Vec::new();
        match self.status {
            DocStatus::Active => {}
            DocStatus::Deprecated => notes.push(("status", "deprecated".to_string())),
            DocStatus::Internal => notes.push(("status", "internal".to_string())),
            DocStatus::Preliminary => notes.push(("status", "preliminary".to_string())),
        }
        push_note(&mut notes, "module", &self.module);
        push_note(&mut notes, "inherits", &self.base);
        push_note(&mut notes, "since", &self.since);
        if !self.groups.is_empty() {
            notes.push(("groups", self.groups.join(", ")));
        }
        let flags: Vec<&str> = [
            (self.is_abstract, "abstract"),
            (self.default, "default"),
            (self.read_only, "readonly"),
            (self.wrapper, "wrapper"),
            (self.js, "js"),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
        .collect();
        if !flags.is_empty() {
            notes.push(("flags", flags.join(" ")));
        }
        push_note(&mut notes, "doc", &self.description);
        notes
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::data::SourceLocation;
    use crate::core::parse::Parameter;

    fn location() -> SourceLocation {
        SourceLocation::new("Main.js", 3, 5, 20)
    }

    #[test]
    fn test_translation_report() {
        let mut record = AnnotationRecord::at(&location(), "qsTr");
        record.context = "Main".to_string();
        record.source_text = "Hello".to_string();
        record.extra_comment = "Greeting".to_string();
        record.magic_metadata.insert("max".into(), "10".into());
        let entry = Entry::from(record);

        assert_eq!(entry.position(), ("Main.js", 3, 5));
        assert_eq!(entry.label(), "qsTr");
        assert_eq!(entry.headline(), "Hello");
        assert_eq!(entry.annotation(), None);
        assert_eq!(
            entry.notes(),
            vec![
                ("context", "Main".to_string()),
                ("extra", "Greeting".to_string()),
                ("meta", "max=10".to_string()),
            ]
        );
    }

    #[test]
    fn test_id_based_translation_headline() {
        let mut record = AnnotationRecord::at(&location(), "qsTrId");
        record.id = "msg.hello".to_string();
        record.plural = true;
        let entry = Entry::from(record);

        assert_eq!(entry.headline(), "msg.hello");
        assert_eq!(entry.annotation(), Some("plural".to_string()));
    }

    #[test]
    fn test_doc_report() {
        let mut record = DocRecord::new(DeclarationKind::Method, "move", &location());
        record.qualifiers = vec!["Item".to_string()];
        record.parameters = vec![Parameter::new("int", "x", ""), Parameter::new("", "y", "")];
        record.status = DocStatus::Deprecated;
        record.since = "5.0".to_string();
        record.js = true;
        let entry = Entry::from(record);

        assert_eq!(entry.label(), "method");
        assert_eq!(entry.headline(), "Item::move");
        assert_eq!(entry.annotation(), Some("(int x, y)".to_string()));
        assert_eq!(
            entry.notes(),
            vec![
                ("status", "deprecated".to_string()),
                ("since", "5.0".to_string()),
                ("flags", "js".to_string()),
            ]
        );
    }

    #[test]
    fn test_entry_serializes_as_record() {
        let record = DocRecord::new(DeclarationKind::Type, "Item", &location());
        let json = serde_json::to_value(Entry::from(record)).unwrap();
        assert_eq!(json["name"], "Item");
        assert_eq!(json["kind"], "type");
        assert_eq!(json["abstract"], false);
    }
}
