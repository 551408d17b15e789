//! Recognised translation marker functions.
//!
//! Markers form a closed enumeration built from a static name table. User
//! aliases are merged into a [`MarkerTable`] at construction, so lookups
//! never consult process-wide state.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use thiserror::Error;

/// Every translation marker the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MarkerKind {
    Tr,
    TrUtf8,
    QsTr,
    TrNoop,
    TrNoopUtf8,
    TrNNoop,
    Translate,
    QsTranslate,
    QsTranslateNoop,
    TranslateNoop,
    TranslateNoopUtf8,
    TranslateNoop3,
    TranslateNoop3Utf8,
    TranslateNNoop,
    TranslateNNoop3,
    QtTrId,
    QsTrId,
    QsTrIdNoop,
    TrIdNoop,
    TrIdNNoop,
}

/// Markers of one family share argument layout and record rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MarkerFamily {
    /// Context comes from the enclosing scope: `tr("source")`.
    Tr,
    /// Context is passed explicitly: `translate("Context", "source")`.
    Translate,
    /// Message is addressed by id: `qtTrId("msg-id")`.
    TrId,
}

/// Positions of the meaningful arguments of a marker call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArgumentSlots {
    pub context: Option<usize>,
    pub source: Option<usize>,
    pub comment: Option<usize>,
    pub plural: Option<usize>,
    pub id: Option<usize>,
}

const MARKERS: &[(&str, MarkerKind)] = &[
    ("tr", MarkerKind::Tr),
    ("trUtf8", MarkerKind::TrUtf8),
    ("qsTr", MarkerKind::QsTr),
    ("QT_TR_NOOP", MarkerKind::TrNoop),
    ("QT_TR_NOOP_UTF8", MarkerKind::TrNoopUtf8),
    ("QT_TR_N_NOOP", MarkerKind::TrNNoop),
    ("translate", MarkerKind::Translate),
    ("qsTranslate", MarkerKind::QsTranslate),
    ("qsTranslateNoOp", MarkerKind::QsTranslateNoop),
    ("QT_TRANSLATE_NOOP", MarkerKind::TranslateNoop),
    ("QT_TRANSLATE_NOOP_UTF8", MarkerKind::TranslateNoopUtf8),
    ("QT_TRANSLATE_NOOP3", MarkerKind::TranslateNoop3),
    ("QT_TRANSLATE_NOOP3_UTF8", MarkerKind::TranslateNoop3Utf8),
    ("QT_TRANSLATE_N_NOOP", MarkerKind::TranslateNNoop),
    ("QT_TRANSLATE_N_NOOP3", MarkerKind::TranslateNNoop3),
    ("qtTrId", MarkerKind::QtTrId),
    ("qsTrId", MarkerKind::QsTrId),
    ("qsTrIdNoOp", MarkerKind::QsTrIdNoop),
    ("QT_TRID_NOOP", MarkerKind::TrIdNoop),
    ("QT_TRID_N_NOOP", MarkerKind::TrIdNNoop),
];

impl MarkerKind {
    /// Canonical (built-in) name of the marker.
    pub fn name(self) -> &'static str {
        MARKERS
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(name, _)| *name)
            .unwrap_or_default()
    }

    pub fn from_name(name: &str) -> Option<Self> {
        MARKERS
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, kind)| *kind)
    }

    pub fn family(self) -> MarkerFamily {
        use MarkerKind::*;
        match self {
            Tr | TrUtf8 | QsTr | TrNoop | TrNoopUtf8 | TrNNoop => MarkerFamily::Tr,
            Translate | QsTranslate | QsTranslateNoop | TranslateNoop | TranslateNoopUtf8
            | TranslateNoop3 | TranslateNoop3Utf8 | TranslateNNoop | TranslateNNoop3 => {
                MarkerFamily::Translate
            }
            QtTrId | QsTrId | QsTrIdNoop | TrIdNoop | TrIdNNoop => MarkerFamily::TrId,
        }
    }

    /// The `_N_` variants always produce plural messages.
    pub fn forces_plural(self) -> bool {
        matches!(
            self,
            MarkerKind::TrNNoop
                | MarkerKind::TranslateNNoop
                | MarkerKind::TranslateNNoop3
                | MarkerKind::TrIdNNoop
        )
    }

    pub fn slots(self) -> ArgumentSlots {
        use MarkerKind::*;
        match self {
            Tr | TrUtf8 | QsTr => ArgumentSlots {
                source: Some(0),
                comment: Some(1),
                plural: Some(2),
                ..Default::default()
            },
            TrNoop | TrNoopUtf8 | TrNNoop => ArgumentSlots {
                source: Some(0),
                ..Default::default()
            },
            Translate | QsTranslate => ArgumentSlots {
                context: Some(0),
                source: Some(1),
                comment: Some(2),
                plural: Some(3),
                ..Default::default()
            },
            QsTranslateNoop | TranslateNoop3 | TranslateNoop3Utf8 | TranslateNNoop3 => {
                ArgumentSlots {
                    context: Some(0),
                    source: Some(1),
                    comment: Some(2),
                    ..Default::default()
                }
            }
            TranslateNoop | TranslateNoopUtf8 | TranslateNNoop => ArgumentSlots {
                context: Some(0),
                source: Some(1),
                ..Default::default()
            },
            QtTrId | QsTrId => ArgumentSlots {
                id: Some(0),
                plural: Some(1),
                ..Default::default()
            },
            QsTrIdNoop | TrIdNoop | TrIdNNoop => ArgumentSlots {
                id: Some(0),
                ..Default::default()
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("alias '{alias}' refers to unknown marker '{target}'")]
pub struct UnknownMarker {
    pub alias: String,
    pub target: String,
}

/// Name lookup for marker calls, built-in names plus configured aliases.
#[derive(Debug, Clone)]
pub struct MarkerTable {
    by_name: HashMap<String, MarkerKind>,
    /// `name(` needles used to spot marker calls in raw text.
    call_needles: Vec<String>,
}

impl Default for MarkerTable {
    fn default() -> Self {
        Self::from_entries(
            MARKERS
                .iter()
                .map(|(name, kind)| (name.to_string(), *kind)),
        )
    }
}

impl MarkerTable {
    /// Built-in markers plus `aliases` (alias name → canonical marker name).
    pub fn with_aliases(aliases: &BTreeMap<String, String>) -> Result<Self, UnknownMarker> {
        let mut entries: Vec<(String, MarkerKind)> = MARKERS
            .iter()
            .map(|(name, kind)| (name.to_string(), *kind))
            .collect();
        for (alias, target) in aliases {
            let kind = MarkerKind::from_name(target).ok_or_else(|| UnknownMarker {
                alias: alias.clone(),
                target: target.clone(),
            })?;
            entries.push((alias.clone(), kind));
        }
        Ok(Self::from_entries(entries))
    }

    fn from_entries(entries: impl IntoIterator<Item = (String, MarkerKind)>) -> Self {
        let by_name: HashMap<String, MarkerKind> = entries.into_iter().collect();
        let mut call_needles: Vec<String> = by_name.keys().map(|n| format!("{n}(")).collect();
        call_needles.sort();
        Self {
            by_name,
            call_needles,
        }
    }

    pub fn lookup(&self, name: &str) -> Option<MarkerKind> {
        self.by_name.get(name).copied()
    }

    /// True if `text` contains a call to any known marker, e.g. `tr(`.
    ///
    /// Plain substring search: `str(` also counts as a `tr(` call.
    pub fn contains_call(&self, text: &str) -> bool {
        self.call_needles.iter().any(|needle| text.contains(needle))
    }
}
