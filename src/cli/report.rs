//! Report formatting and printing utilities.
//!
//! Records are printed in a cargo-like layout or as JSON. Kept apart from
//! the core so glean can be used as a library.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;

use super::args::OutputFormat;
use crate::core::{FileFailure, docs::DocError};
use crate::entries::{Entry, Report};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print entries to stdout in the requested format.
pub fn report(entries: &[Entry], format: OutputFormat) -> Result<()> {
    report_to(entries, format, &mut io::stdout().lock())
}

pub fn report_to<W: Write>(entries: &[Entry], format: OutputFormat, writer: &mut W) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(entries).context("Failed to serialize records")?;
            writeln!(writer, "{}", json)?;
        }
        OutputFormat::Text => {
            for entry in entries {
                print_entry(entry, writer);
            }
        }
    }
    Ok(())
}

fn print_entry<W: Write>(entry: &Entry, writer: &mut W) {
    let (file, line, col) = entry.position();

    let headline = format!("\"{}\"", entry.headline());
    match entry.annotation() {
        Some(annotation) => {
            let _ = writeln!(
                writer,
                "{}: {}  {}",
                entry.label().bold().green(),
                headline,
                annotation.dimmed().cyan()
            );
        }
        None => {
            let _ = writeln!(writer, "{}: {}", entry.label().bold().green(), headline);
        }
    }

    let _ = writeln!(writer, "  {} {}:{}:{}", "-->".blue(), file, line, col);

    for (name, value) in entry.notes() {
        let _ = writeln!(
            writer,
            "   {} {} {}",
            "=".blue(),
            format!("{name}:").bold(),
            value
        );
    }

    let _ = writeln!(writer);
}

/// Print files that could not be read, parsed or extracted.
pub fn print_failures_to<W: Write>(failures: &[FileFailure], writer: &mut W) {
    for failure in failures {
        let _ = writeln!(writer, "{}: {}", "error".bold().red(), failure.error);
        let _ = writeln!(writer, "  {} {}", "-->".blue(), failure.file_path);
    }
}

/// Print doc comments whose topic arguments could not be understood.
pub fn print_doc_warnings_to<W: Write>(warnings: &[DocError], writer: &mut W) {
    for warning in warnings {
        let _ = writeln!(writer, "{}: {}", "warning".bold().yellow(), warning);
    }
}

/// Print the closing summary line.
pub fn print_summary_to<W: Write>(
    records: usize,
    files: usize,
    failed: usize,
    writer: &mut W,
) {
    let files_word = if files == 1 { "file" } else { "files" };
    let records_word = if records == 1 { "record" } else { "records" };
    if failed == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Extracted {records} {records_word} from {files} {files_word}").green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} Extracted {} {} from {} {}, {} {}",
            FAILURE_MARK.red(),
            records,
            records_word,
            files,
            files_word,
            failed,
            "failed".red()
        );
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::data::{AnnotationRecord, SourceLocation};
    use crate::core::docs::DocRecord;
    use crate::core::extract::DeclarationKind;

    fn render(f: impl FnOnce(&mut Vec<u8>)) -> String {
        colored::control::set_override(false);
        let mut output = Vec::new();
        f(&mut output);
        String::from_utf8(output).unwrap()
    }

    fn translation() -> Entry {
        let mut record =
            AnnotationRecord::at(&SourceLocation::new("./src/Main.js", 4, 11, 40), "qsTr");
        record.context = "Main".to_string();
        record.source_text = "Hello".to_string();
        record.extra_comment = "Greeting on the start page".to_string();
        Entry::Translation(record)
    }

    #[test]
    fn test_report_empty() {
        let output = render(|out| report_to(&[], OutputFormat::Text, out).unwrap());
        assert!(output.is_empty());
    }

    #[test]
    fn test_report_translation_text() {
        let output = render(|out| report_to(&[translation()], OutputFormat::Text, out).unwrap());
        insta::assert_snapshot!(output, @r#"
        qsTr: "Hello"
          --> ./src/Main.js:4:11
           = context: Main
           = extra: Greeting on the start page
        "#);
    }

    #[test]
    fn test_report_doc_text() {
        let mut record = DocRecord::new(
            DeclarationKind::Property,
            "label",
            &SourceLocation::new("./Button.js", 2, 1, 10),
        );
        record.data_type = "string".to_string();
        record.read_only = true;
        let output = render(|out| {
            report_to(&[Entry::Doc(record)], OutputFormat::Text, out).unwrap()
        });

        assert!(output.contains("property: \"label\"  string"));
        assert!(output.contains("--> ./Button.js:2:1"));
        assert!(output.contains("= flags: readonly"));
    }

    #[test]
    fn test_report_json() {
        let output = render(|out| report_to(&[translation()], OutputFormat::Json, out).unwrap());
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed[0]["sourceText"], "Hello");
        assert_eq!(parsed[0]["context"], "Main");
        assert_eq!(parsed[0]["locationLine"], 4);
    }

    #[test]
    fn test_print_failures() {
        let failures = vec![FileFailure {
            file_path: "./Broken.js".to_string(),
            error: "Failed to parse ./Broken.js".to_string(),
        }];
        let output = render(|out| print_failures_to(&failures, out));
        assert_eq!(
            output,
            "error: Failed to parse ./Broken.js\n  --> ./Broken.js\n"
        );
    }

    #[test]
    fn test_print_summary() {
        let output = render(|out| print_summary_to(1, 2, 0, out));
        assert_eq!(output, "\u{2713} Extracted 1 record from 2 files\n");

        let output = render(|out| print_summary_to(3, 1, 1, out));
        assert_eq!(output, "\u{2718} Extracted 3 records from 1 file, 1 failed\n");
    }
}
