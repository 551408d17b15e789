use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr_of, stdout_of};

const BUTTON: &str = r#"/*!
    \qmltype Button
    \inqmlmodule Controls
    \qmlinherits Control
    \since 6.2
    \ingroup buttons
    A push button.

    \qmlproperty string Button::text
    \qmlreadonly
*/
export class Button {
    /*!
        \qmlmethod bool Button::press(int times = 1)
        Presses the button.
    */
    press(times) {}

    /*! \deprecated */
    release() {}
}
"#;

#[test]
fn test_docs_json_records() -> Result<()> {
    let test = CliTest::with_file("Button.js", BUTTON)?;

    let output = test.docs_command().args(["--format", "json"]).output()?;
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let parsed: Value = serde_json::from_str(&stdout_of(&output))?;
    let records = parsed.as_array().cloned().unwrap_or_default();
    let by_name = |name: &str| {
        records
            .iter()
            .find(|r| r["name"] == name)
            .cloned()
            .unwrap_or(Value::Null)
    };

    let button = by_name("Button");
    assert_eq!(button["kind"], "type");
    assert_eq!(button["module"], "Controls");
    assert_eq!(button["base"], "Control");
    assert_eq!(button["since"], "6.2");
    assert_eq!(button["groups"][0], "buttons");

    let text = by_name("text");
    assert_eq!(text["kind"], "property");
    assert_eq!(text["dataType"], "string");
    assert_eq!(text["readOnly"], true);

    let press = by_name("press");
    assert_eq!(press["returnType"], "bool");
    assert_eq!(press["parameters"][0]["type"], "int");
    assert_eq!(press["parameters"][0]["defaultValue"], "1");

    let release = by_name("release");
    assert_eq!(release["status"], "deprecated");

    Ok(())
}

#[test]
fn test_docs_bad_signature_warns_without_failing() -> Result<()> {
    let test = CliTest::with_file(
        "Item.js",
        "/*! \\qmlmethod void move */\nfunction move() {}\n",
    )?;

    let output = test.docs_command().output()?;
    let stderr = stderr_of(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr.contains("warning:"));
    assert!(stderr.contains("expected `(` in signature `void move`"));
    assert!(stdout_of(&output).is_empty());

    Ok(())
}

#[test]
fn test_docs_ignore_plain_comments() -> Result<()> {
    let test = CliTest::with_file(
        "Item.js",
        "/* not documentation */\nfunction a() {}\n// neither\nfunction b() {}\n",
    )?;

    let output = test.docs_command().output()?;

    assert!(output.status.success());
    assert!(stdout_of(&output).is_empty());
    assert!(stderr_of(&output).contains("Extracted 0 records from 1 file"));

    Ok(())
}
