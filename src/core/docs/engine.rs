//! Documentation front-end engine.
//!
//! For each declaration site the nearest unused doc comment is located and
//! parsed. Topic commands refine the declaration or declare extra properties;
//! meta commands then apply to every record the comment produced.

use thiserror::Error;
use tracing::{debug, warn};

use crate::core::collect::CommentRegistry;
use crate::core::data::{Comment, SourceText};
use crate::core::docs::body::{DocBody, MetaCommand, TopicKind, parse_doc_body};
use crate::core::docs::finder::preceding_doc_comment;
use crate::core::docs::record::{DocRecord, DocStatus};
use crate::core::extract::{CandidateSite, DeclarationKind, SiteKind};
use crate::core::parse::{PropertyArgError, SignatureError, parse_signature, split_property_arg};

/// A doc comment the caller may want to warn about.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocError {
    #[error("{file}:{line}: {error}")]
    Signature {
        file: String,
        line: usize,
        #[source]
        error: SignatureError,
    },
    #[error("{file}:{line}: {error}")]
    Property {
        file: String,
        line: usize,
        #[source]
        error: PropertyArgError,
    },
}

#[derive(Debug, Default)]
pub struct DocOutcome {
    pub records: Vec<DocRecord>,
    pub failures: Vec<DocError>,
}

#[derive(Debug, Default)]
pub struct DocExtractor;

impl DocExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Document the declaration sites of one file. Call sites are ignored.
    pub fn extract_file(
        &self,
        source: &SourceText,
        comments: Vec<Comment>,
        mut sites: Vec<CandidateSite>,
    ) -> DocOutcome {
        sites.sort_by_key(|site| site.location.offset);
        let mut registry = CommentRegistry::new(comments);
        let mut outcome = DocOutcome::default();

        for site in &sites {
            let SiteKind::Declaration {
                kind,
                preceding_end,
            } = site.kind
            else {
                continue;
            };
            let Some(index) =
                preceding_doc_comment(&registry, site.location.offset, preceding_end)
            else {
                debug!(name = %site.name_hint, "declaration has no doc comment");
                continue;
            };
            let Some(comment) = registry.get(index) else {
                continue;
            };

            let body = parse_doc_body(comment.body());
            for name in &body.ignored {
                warn!(
                    file = source.path(),
                    line = source.line_of(comment.start),
                    "the \\{name} command is ignored"
                );
            }
            self.apply(site, kind, &body, &mut outcome);
            registry.mark_consumed(index);
        }
        outcome
    }

    fn apply(
        &self,
        site: &CandidateSite,
        kind: DeclarationKind,
        body: &DocBody,
        outcome: &mut DocOutcome,
    ) {
        let location = &site.location;
        let mut primary = Some(DocRecord::new(kind, site.name_hint.as_str(), location));
        let mut extra = Vec::new();

        for topic in &body.topics {
            let Some(record) = primary.as_mut() else {
                break;
            };
            match topic.kind {
                TopicKind::Type => record.js |= topic.is_js(),
                TopicKind::Property => match split_property_arg(&topic.args) {
                    Ok(arg) if arg.name == site.name_hint => record.data_type = arg.ty,
                    Ok(arg) => {
                        let mut property =
                            DocRecord::new(DeclarationKind::Property, arg.name, location);
                        property.data_type = arg.ty;
                        property.qualifiers = arg.module.into_iter().chain(arg.component).collect();
                        property.attached = topic.attached;
                        property.default = record.default;
                        property.js = topic.is_js();
                        extra.push(property);
                    }
                    Err(error) => outcome.failures.push(DocError::Property {
                        file: location.file_path.clone(),
                        line: location.line,
                        error,
                    }),
                },
                TopicKind::Method | TopicKind::Signal => {
                    if kind != DeclarationKind::Method {
                        continue;
                    }
                    match parse_signature(&topic.args) {
                        Ok(signature) => {
                            if topic.kind == TopicKind::Signal {
                                record.kind = DeclarationKind::Signal;
                            }
                            record.return_type = signature.return_type;
                            record.qualifiers = signature.qualifiers;
                            record.parameters = signature.parameters;
                            record.attached = topic.attached;
                            record.js |= topic.is_js();
                        }
                        Err(error) => {
                            debug!(%error, "dropping documented method");
                            outcome.failures.push(DocError::Signature {
                                file: location.file_path.clone(),
                                line: location.line,
                                error,
                            });
                            primary = None;
                        }
                    }
                }
            }
        }

        for mut record in primary.into_iter().chain(extra) {
            for meta in &body.metas {
                apply_meta(&mut record, meta);
            }
            if record.attached {
                record.read_only = false;
            }
            record.description = body.description.clone();
            outcome.records.push(record);
        }
    }
}

fn apply_meta(record: &mut DocRecord, meta: &MetaCommand) {
    match meta {
        MetaCommand::Abstract => {
            if record.kind == DeclarationKind::Type {
                record.is_abstract = true;
            }
        }
        MetaCommand::Deprecated => record.status = DocStatus::Deprecated,
        MetaCommand::Internal => record.status = DocStatus::Internal,
        MetaCommand::Preliminary => record.status = DocStatus::Preliminary,
        MetaCommand::Since(version) => record.since = version.clone(),
        MetaCommand::InModule(module) => record.module = module.clone(),
        MetaCommand::Inherits(base) => {
            if *base == record.name {
                warn!(
                    file = %record.location_file,
                    line = record.location_line,
                    "{base} tries to inherit itself"
                );
            } else if record.kind == DeclarationKind::Type {
                record.base = base.clone();
            }
        }
        MetaCommand::Default => record.default = true,
        MetaCommand::ReadOnly => record.read_only = true,
        MetaCommand::InGroup(groups) => record.groups.extend(groups.iter().cloned()),
        MetaCommand::Wrapper => record.wrapper = true,
    }
}
