use std::{
    cell::OnceCell,
    collections::{BTreeMap, BTreeSet},
    path::{Component, Path, PathBuf},
};

use anyhow::{Context as _, Result, anyhow};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{
    config::{Config, load_config},
    core::{
        data::{AnnotationRecord, SourceText},
        docs::{DocError, DocExtractor, DocRecord},
        extract::{Catalog, Extractor},
        markers::MarkerTable,
        parsers::{ParsedJs, SiteCollector, parse_js_source},
        scan::scan_files,
    },
};

/// A source file that could not be read, parsed or fully extracted.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileFailure {
    pub file_path: String,
    pub error: String,
}

/// Result of running the translation front-end over every file.
#[derive(Debug, Default)]
pub struct TranslationOutput {
    /// Sorted by file, line and column.
    pub records: Vec<AnnotationRecord>,
    pub failures: Vec<FileFailure>,
    /// Call sites that produced no record.
    pub unattributed: usize,
}

/// Result of running the documentation front-end over every file.
#[derive(Debug, Default)]
pub struct DocOutput {
    pub records: Vec<DocRecord>,
    pub failures: Vec<FileFailure>,
    /// Doc comments with a malformed signature or property argument.
    pub warnings: Vec<DocError>,
}

/// Options that change what a run reads, merged from CLI and config.
#[derive(Debug, Clone, Default)]
pub struct ContextOptions {
    pub source_root: Option<PathBuf>,
}

/// Orchestrates discovery, parsing and both front-ends for one project.
///
/// Files are parsed once, lazily, and shared by both front-ends. Each file
/// is then processed by exactly one rayon worker which owns the file's
/// comment registry; finished records meet in a [`Catalog`].
pub struct ExtractContext {
    pub config: Config,
    pub root_dir: PathBuf,
    /// Sorted source files to process.
    pub files: BTreeSet<String>,
    markers: MarkerTable,
    parsed_files: OnceCell<BTreeMap<String, ParsedJs>>,
    parse_failures: OnceCell<Vec<FileFailure>>,
}

impl ExtractContext {
    /// Load configuration from the source root and scan it for files.
    ///
    /// # Errors
    ///
    /// Returns error if the config file is invalid or the source root is
    /// not valid UTF-8.
    pub fn new(options: &ContextOptions) -> Result<Self> {
        let root_dir = options
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&root_dir)?;
        if !config_result.from_file {
            info!("No .gleanrc.json found, using default configuration");
        }
        Self::with_config(root_dir, config_result.config)
    }

    /// Build a context from an already loaded config.
    pub fn with_config(root_dir: PathBuf, config: Config) -> Result<Self> {
        let markers = config.markers()?;

        let scan_root = resolve_scan_root(&root_dir, &config.source_root);
        let path = scan_root
            .to_str()
            .with_context(|| anyhow!("Invalid path: {:?}", scan_root))?;

        let scan_result = scan_files(
            path,
            &config.includes,
            &config.ignores,
            config.ignore_test_files,
        );
        if scan_result.skipped_count > 0 {
            warn!(
                "{} path(s) skipped due to access errors",
                scan_result.skipped_count
            );
        }

        Ok(Self {
            config,
            root_dir,
            files: scan_result.files,
            markers,
            parsed_files: OnceCell::new(),
            parse_failures: OnceCell::new(),
        })
    }

    pub fn markers(&self) -> &MarkerTable {
        &self.markers
    }

    /// Parsed AST and comment stream of every file (lazy initialization).
    ///
    /// Files that cannot be read or parsed are left out and reported by
    /// [`ExtractContext::parse_failures`].
    pub fn parsed_files(&self) -> &BTreeMap<String, ParsedJs> {
        self.parsed_files.get_or_init(|| {
            let parse_results: Vec<_> = self
                .files
                .par_iter()
                .map(|file_path| {
                    let parse_result = std::fs::read_to_string(file_path)
                        .map_err(|e| anyhow!("Failed to read file: {}", e))
                        .and_then(|code| parse_js_source(code, file_path));
                    (file_path.clone(), parse_result)
                })
                .collect();

            let mut parsed = BTreeMap::new();
            let mut failures = Vec::new();
            for (file_path, result) in parse_results {
                match result {
                    Ok(p) => {
                        parsed.insert(file_path, p);
                    }
                    Err(e) => {
                        warn!("{} - {}", file_path, e);
                        failures.push(FileFailure {
                            file_path,
                            error: e.to_string(),
                        });
                    }
                }
            }

            let _ = self.parse_failures.set(failures);
            parsed
        })
    }

    pub fn parse_failures(&self) -> &[FileFailure] {
        self.parsed_files();
        self.parse_failures.get_or_init(Vec::new)
    }

    /// Run the translation front-end over every parsed file.
    pub fn translations(&self) -> TranslationOutput {
        let catalog: Catalog<AnnotationRecord> = Catalog::new();
        let markers = &self.markers;
        let extractor = Extractor::new(markers);
        let structural = self.config.structural_context;

        let per_file: Vec<(usize, Option<FileFailure>)> = self
            .parsed_files()
            .par_iter()
            .map(|(file_path, parsed)| {
                let context = structural_context(&parsed.source, structural);
                let sites = SiteCollector::new(parsed, markers, context).collect();
                let outcome =
                    extractor.extract_file(&parsed.source, parsed.comments.clone(), sites.calls);
                debug!(
                    file = %file_path,
                    records = outcome.records.len(),
                    "extracted translations"
                );
                catalog.extend(outcome.records);
                let failure = outcome.error.map(|e| FileFailure {
                    file_path: file_path.clone(),
                    error: e.to_string(),
                });
                (outcome.unattributed.len(), failure)
            })
            .collect();

        let mut output = TranslationOutput {
            failures: self.parse_failures().to_vec(),
            ..Default::default()
        };
        for (unattributed, failure) in per_file {
            output.unattributed += unattributed;
            output.failures.extend(failure);
        }
        output.failures.sort();
        output.records = catalog.into_sorted();
        output
    }

    /// Run the documentation front-end over every parsed file.
    pub fn docs(&self) -> DocOutput {
        let catalog: Catalog<DocRecord> = Catalog::new();
        let extractor = DocExtractor::new();
        let markers = &self.markers;
        let structural = self.config.structural_context;

        let mut warnings: Vec<DocError> = self
            .parsed_files()
            .par_iter()
            .flat_map_iter(|(_, parsed)| {
                let context = structural_context(&parsed.source, structural);
                let sites = SiteCollector::new(parsed, markers, context).collect();
                let outcome = extractor.extract_file(
                    &parsed.source,
                    parsed.comments.clone(),
                    sites.declarations,
                );
                catalog.extend(outcome.records);
                outcome.failures
            })
            .collect();
        warnings.sort_by_key(|w| w.to_string());

        let mut failures = self.parse_failures().to_vec();
        failures.sort();
        DocOutput {
            records: catalog.into_sorted(),
            failures,
            warnings,
        }
    }
}

/// Context given to sites without an explicit one: the file stem, the way
/// `qsTr` scopes strings to the component file.
fn structural_context(source: &SourceText, enabled: bool) -> String {
    if enabled {
        source.stem().to_string()
    } else {
        String::new()
    }
}

fn resolve_scan_root(root_dir: &Path, source_root: &str) -> PathBuf {
    let p = Path::new(source_root);
    if p.is_absolute() {
        p.to_path_buf()
    } else if p.components().all(|c| matches!(c, Component::CurDir)) {
        root_dir.to_path_buf()
    } else {
        root_dir.join(p)
    }
}
