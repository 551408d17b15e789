//! Doc comment bodies: commands and description text.
//!
//! ```text
//! /*!
//!     \qmlproperty real Item::opacity
//!     \since 5.2
//!     Holds the opacity of the item.
//! */
//! ```
//!
//! A command is a backslash followed by a name at the start of a line; the
//! rest of the line is its argument. Topic commands say what is documented,
//! meta commands set flags on it, formatting commands stay in the
//! description.

/// Language flavour of a topic command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicLanguage {
    Qml,
    Js,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicKind {
    Type,
    Property,
    Method,
    Signal,
}

/// `\qmltype`, `\qmlproperty`, `\jsattachedsignal` and friends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub language: TopicLanguage,
    pub attached: bool,
    pub kind: TopicKind,
    pub args: String,
}

impl Topic {
    pub fn parse(name: &str, args: &str) -> Option<Self> {
        let (language, rest) = if let Some(rest) = name.strip_prefix("qml") {
            (TopicLanguage::Qml, rest)
        } else if let Some(rest) = name.strip_prefix("js") {
            (TopicLanguage::Js, rest)
        } else {
            return None;
        };
        let (attached, rest) = match rest.strip_prefix("attached") {
            Some(rest) => (true, rest),
            None => (false, rest),
        };
        let kind = match rest {
            "type" if !attached => TopicKind::Type,
            "property" => TopicKind::Property,
            "method" => TopicKind::Method,
            "signal" => TopicKind::Signal,
            _ => return None,
        };
        Some(Self {
            language,
            attached,
            kind,
            args: args.to_string(),
        })
    }

    pub fn is_js(&self) -> bool {
        self.language == TopicLanguage::Js
    }
}

/// Commands that adjust the documented entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaCommand {
    Abstract,
    Deprecated,
    Internal,
    Preliminary,
    Since(String),
    InModule(String),
    Inherits(String),
    Default,
    ReadOnly,
    InGroup(Vec<String>),
    Wrapper,
}

impl MetaCommand {
    pub fn parse(name: &str, args: &str) -> Option<Self> {
        let first_arg = || args.split_whitespace().next().unwrap_or_default().to_string();
        let meta = match name {
            "abstract" | "qmlabstract" => MetaCommand::Abstract,
            "deprecated" | "obsolete" => MetaCommand::Deprecated,
            "internal" => MetaCommand::Internal,
            "preliminary" => MetaCommand::Preliminary,
            "since" => MetaCommand::Since(args.trim().to_string()),
            "inqmlmodule" | "injsmodule" => MetaCommand::InModule(first_arg()),
            "qmlinherits" => MetaCommand::Inherits(first_arg()),
            "qmldefault" => MetaCommand::Default,
            "qmlreadonly" => MetaCommand::ReadOnly,
            "ingroup" => {
                MetaCommand::InGroup(args.split_whitespace().map(str::to_string).collect())
            }
            "wrapper" => MetaCommand::Wrapper,
            _ => return None,
        };
        Some(meta)
    }
}

/// Formatting and markup commands that belong to the description text.
const TEXT_COMMANDS: &[&str] = &[
    "a", "b", "badcode", "brief", "c", "code", "div", "dots", "e", "endcode", "enddiv",
    "endlegalese", "endlist", "endomit", "endqml", "endquotation", "endraw", "endtable",
    "footnote", "header", "i", "image", "include", "inlineimage", "keyword", "l", "legalese",
    "li", "list", "newcode", "note", "o", "oldcode", "omit", "printline", "qml", "quotation",
    "raw", "row", "sa", "section1", "section2", "section3", "section4", "skipline", "skipto",
    "snippet", "sub", "sup", "table", "target", "title", "tt", "uicontrol", "underline",
    "value", "warning",
];

/// A parsed doc comment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocBody {
    pub topics: Vec<Topic>,
    pub metas: Vec<MetaCommand>,
    /// Names of commands that mean nothing here.
    pub ignored: Vec<String>,
    pub description: String,
}

/// Parse a doc comment body, delimiters already removed and starting with
/// the `!` or `*` doc marker.
pub fn parse_doc_body(body: &str) -> DocBody {
    let body = body.strip_prefix(['!', '*']).unwrap_or(body);
    let mut doc = DocBody::default();
    let mut description: Vec<&str> = Vec::new();

    for line in body.lines() {
        let line = strip_decoration(line.trim());
        match split_command(line) {
            Some((name, args)) => {
                if let Some(topic) = Topic::parse(name, args) {
                    doc.topics.push(topic);
                } else if let Some(meta) = MetaCommand::parse(name, args) {
                    doc.metas.push(meta);
                } else if TEXT_COMMANDS.contains(&name) {
                    description.push(line);
                } else {
                    doc.ignored.push(name.to_string());
                }
            }
            None => description.push(line),
        }
    }

    doc.description = description.join("\n").trim().to_string();
    doc
}

/// Drop a leading `*` used to frame block comments.
fn strip_decoration(line: &str) -> &str {
    if line == "*" {
        ""
    } else {
        line.strip_prefix("* ").unwrap_or(line)
    }
}

/// `\name args` at the start of a line.
fn split_command(line: &str) -> Option<(&str, &str)> {
    let rest = line.strip_prefix('\\')?;
    let end = rest
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    Some((&rest[..end], rest[end..].trim()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_topic_names() {
        let topic = Topic::parse("qmlattachedproperty", "int ListView::count").unwrap();
        assert_eq!(topic.language, TopicLanguage::Qml);
        assert!(topic.attached);
        assert_eq!(topic.kind, TopicKind::Property);

        assert!(Topic::parse("jssignal", "clicked()").unwrap().is_js());
        assert_eq!(Topic::parse("qmlattachedtype", "X"), None);
        assert_eq!(Topic::parse("qmlabstract", ""), None);
        assert_eq!(Topic::parse("class", "Foo"), None);
    }

    #[test]
    fn test_meta_commands() {
        assert_eq!(
            MetaCommand::parse("since", " 5.2 "),
            Some(MetaCommand::Since("5.2".to_string()))
        );
        assert_eq!(
            MetaCommand::parse("ingroup", "views layouts"),
            Some(MetaCommand::InGroup(vec!["views".to_string(), "layouts".to_string()]))
        );
        assert_eq!(
            MetaCommand::parse("inqmlmodule", "QtQuick 2.0"),
            Some(MetaCommand::InModule("QtQuick".to_string()))
        );
        assert_eq!(MetaCommand::parse("obsolete", ""), Some(MetaCommand::Deprecated));
        assert_eq!(MetaCommand::parse("brief", "x"), None);
    }

    #[test]
    fn test_body_is_split_into_commands_and_text() {
        let body = "!\n    \\qmlproperty real Item::opacity\n    \\since 5.2\n    \\nonsense here\n\n    Holds the \\c opacity.\n    \\note Values are clamped.\n";
        let doc = parse_doc_body(body);
        assert_eq!(doc.topics.len(), 1);
        assert_eq!(doc.topics[0].args, "real Item::opacity");
        assert_eq!(doc.metas, vec![MetaCommand::Since("5.2".to_string())]);
        assert_eq!(doc.ignored, vec!["nonsense".to_string()]);
        assert_eq!(
            doc.description,
            "Holds the \\c opacity.\n\\note Values are clamped."
        );
    }

    #[test]
    fn test_star_decoration_is_removed() {
        let doc = parse_doc_body("*\n * First line.\n *\n * \\internal\n ");
        assert_eq!(doc.description, "First line.");
        assert_eq!(doc.metas, vec![MetaCommand::Internal]);
    }
}
