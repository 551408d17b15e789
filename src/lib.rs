//! Glean - translator comment and documentation extractor
//!
//! Glean scans JavaScript and TypeScript sources for translation markers
//! (`qsTr`, `qsTranslate`, `qsTrId`, ...) and collects the translator
//! comments written next to them. The same comment machinery feeds a
//! documentation front-end that reads `/*! ... */` blocks above declarations.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine (collection, parsing, extraction)
//! - `entries`: Output records and their reporting interface

pub mod cli;
pub mod config;
pub mod core;
pub mod entries;
