use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr_of, stdout_of};

fn json_records(test: &CliTest) -> Result<Vec<Value>> {
    let output = test.extract_command().args(["--format", "json"]).output()?;
    assert!(
        output.status.success(),
        "stderr: {}",
        stderr_of(&output)
    );
    let parsed: Value = serde_json::from_str(&stdout_of(&output))?;
    Ok(parsed.as_array().cloned().unwrap_or_default())
}

#[test]
fn test_extract_trailing_translator_comment() -> Result<()> {
    let test = CliTest::with_file("src/Main.js", "qsTr(\"Hello\"); //: Greets the user\n")?;

    let records = json_records(&test)?;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["function"], "qsTr");
    assert_eq!(records[0]["context"], "Main");
    assert_eq!(records[0]["sourceText"], "Hello");
    assert_eq!(records[0]["extraComment"], "Greets the user");
    assert_eq!(records[0]["locationFile"], "./src/Main.js");
    assert_eq!(records[0]["locationLine"], 1);

    Ok(())
}

#[test]
fn test_extract_block_comment_and_metadata() -> Result<()> {
    let test = CliTest::with_file(
        "Dialog.js",
        r#"function show() {
    /*: Title of the
       confirmation dialog */
    //~ maxLength 20
    //= dialog.title
    const title = qsTr("Confirm");
    const body = qsTranslate("Dialog", "Are you sure?", "question");
}
"#,
    )?;

    let records = json_records(&test)?;

    assert_eq!(records.len(), 2);
    assert_eq!(
        records[0]["extraComment"],
        "Title of the confirmation dialog"
    );
    assert_eq!(records[0]["magicMetadata"]["maxLength"], "20");
    assert_eq!(records[0]["id"], "dialog.title");
    assert_eq!(records[1]["context"], "Dialog");
    assert_eq!(records[1]["comment"], "question");
    assert_eq!(records[1]["extraComment"], "");

    Ok(())
}

#[test]
fn test_extract_comment_does_not_leak_backward() -> Result<()> {
    let test = CliTest::with_file(
        "Main.js",
        "qsTr(\"first\"); // unrelated\n//: real comment\nqsTr(\"second\");\n",
    )?;

    let records = json_records(&test)?;

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["sourceText"], "first");
    assert_eq!(records[0]["extraComment"], "");
    assert_eq!(records[1]["sourceText"], "second");
    assert_eq!(records[1]["extraComment"], "real comment");

    Ok(())
}

#[test]
fn test_extract_id_based_with_source_text() -> Result<()> {
    let test = CliTest::with_file(
        "Main.ts",
        "//% \"Hello world\"\nconst s: string = qsTrId(\"hello.world\");\n",
    )?;

    let records = json_records(&test)?;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["id"], "hello.world");
    assert_eq!(records[0]["sourceText"], "Hello world");
    assert_eq!(records[0]["context"], "");

    Ok(())
}

#[test]
fn test_extract_text_output() -> Result<()> {
    let test = CliTest::with_file("Main.js", "//: Button label\nqsTr(\"OK\");\n")?;

    let output = test.extract_command().output()?;

    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "qsTr: \"OK\"\n  --> ./Main.js:2:1\n   = context: Main\n   = extra: Button label\n\n"
    );
    assert!(stderr_of(&output).contains("Extracted 1 record from 1 file"));

    Ok(())
}

#[test]
fn test_extract_uses_marker_aliases_from_config() -> Result<()> {
    let test = CliTest::with_file(
        ".gleanrc.json",
        r#"{ "markerAliases": { "tt": "qsTr" }, "structuralContext": false }"#,
    )?;
    test.write_file(
        "Main.js",
        "tt(\"Aliased\", \"note\");\nqsTranslate(\"Ctx\", \"Explicit\");\n",
    )?;

    let records = json_records(&test)?;

    // Without structural context the aliased call has no context at all.
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["sourceText"], "Explicit");

    Ok(())
}

#[test]
fn test_extract_skips_test_files_and_node_modules() -> Result<()> {
    let test = CliTest::with_file("src/App.js", "qsTr(\"kept\");\n")?;
    test.write_file("src/App.test.js", "qsTr(\"test\");\n")?;
    test.write_file("node_modules/lib/index.js", "qsTr(\"vendored\");\n")?;

    let records = json_records(&test)?;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["sourceText"], "kept");

    Ok(())
}

#[test]
fn test_extract_parse_error_exits_with_failure() -> Result<()> {
    let test = CliTest::with_file("Good.js", "qsTr(\"fine\");\n")?;
    test.write_file("Broken.js", "function ( {\n")?;

    let output = test.extract_command().output()?;
    let stderr = stderr_of(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).contains("\"fine\""));
    assert!(stderr.contains("error:"));
    assert!(stderr.contains("./Broken.js"));
    assert!(stderr.contains("1 failed"));

    Ok(())
}

#[test]
fn test_extract_invalid_config_is_internal_error() -> Result<()> {
    let test = CliTest::with_file(
        ".gleanrc.json",
        r#"{ "markerAliases": { "tt": "gettext" } }"#,
    )?;

    let output = test.extract_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("markerAliases"));

    Ok(())
}

#[test]
fn test_extract_source_root_flag() -> Result<()> {
    let test = CliTest::with_file("app/Main.js", "qsTr(\"inside\");\n")?;
    test.write_file("Other.js", "qsTr(\"outside\");\n")?;

    let output = test
        .extract_command()
        .args(["--source-root", "app", "--format", "json"])
        .output()?;
    let parsed: Value = serde_json::from_str(&stdout_of(&output))?;

    assert_eq!(parsed.as_array().map(Vec::len), Some(1));
    assert_eq!(parsed[0]["sourceText"], "inside");

    Ok(())
}
