use serde::Serialize;

use crate::core::data::SourceLocation;
use crate::core::extract::{DeclarationKind, Located};
use crate::core::parse::Parameter;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DocStatus {
    #[default]
    Active,
    Deprecated,
    Internal,
    Preliminary,
}

/// Documentation attached to one declaration, or to a property that a doc
/// comment declares on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocRecord {
    pub kind: DeclarationKind,
    pub name: String,
    /// Property type.
    pub data_type: String,
    pub return_type: String,
    pub qualifiers: Vec<String>,
    pub parameters: Vec<Parameter>,
    pub attached: bool,
    pub js: bool,
    pub read_only: bool,
    pub default: bool,
    #[serde(rename = "abstract")]
    pub is_abstract: bool,
    pub wrapper: bool,
    pub status: DocStatus,
    pub since: String,
    pub module: String,
    pub base: String,
    pub groups: Vec<String>,
    pub description: String,
    pub location_file: String,
    pub location_line: usize,
    pub location_column: usize,
}

impl DocRecord {
    pub fn new(kind: DeclarationKind, name: impl Into<String>, location: &SourceLocation) -> Self {
        Self {
            kind,
            name: name.into(),
            data_type: String::new(),
            return_type: String::new(),
            qualifiers: Vec::new(),
            parameters: Vec::new(),
            attached: false,
            js: false,
            read_only: false,
            default: false,
            is_abstract: false,
            wrapper: false,
            status: DocStatus::Active,
            since: String::new(),
            module: String::new(),
            base: String::new(),
            groups: Vec::new(),
            description: String::new(),
            location_file: location.file_path.clone(),
            location_line: location.line,
            location_column: location.col,
        }
    }
}

impl Located for DocRecord {
    fn position(&self) -> (&str, usize, usize) {
        (&self.location_file, self.location_line, self.location_column)
    }
}
