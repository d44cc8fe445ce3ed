use anyhow::Result;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_check_valid_file() -> Result<()> {
    let test = CliTest::with_sample()?;

    let output = test.run(&["check", "bot.json"])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("✓ bot.json: structure is valid"));
    Ok(())
}

#[test]
fn test_check_reports_structural_errors() -> Result<()> {
    let test = CliTest::with_file(
        "bad.json",
        r#"{
  "'dialog(a.topic.Billing)'.Card.1.text": 5,
  "plain.key": "Hello"
}"#,
    )?;

    let output = test.run(&["check", "bad.json"])?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("error: Value must be string for key: 'dialog(a.topic.Billing)'.Card.1.text"));
    assert!(out.contains("error: Key doesn't match expected format: plain.key"));
    assert!(out.contains("✘ 2 problems (2 errors, 0 warnings)"));
    Ok(())
}

#[test]
fn test_check_caps_diagnostics() -> Result<()> {
    let entries: Vec<String> = (0..15).map(|i| format!("\"key{}\": \"v\"", i)).collect();
    let test = CliTest::with_file("many.json", &format!("{{{}}}", entries.join(",")))?;

    let output = test.run(&["check", "many.json"])?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(out.matches("Key doesn't match expected format").count(), 10);
    assert!(out.contains("... (showing first 10 errors)"));
    Ok(())
}

#[test]
fn test_check_non_object_root() -> Result<()> {
    let test = CliTest::with_file("list.json", r#"["a", "b"]"#)?;

    let output = test.run(&["check", "list.json"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("File must contain a JSON object"));
    Ok(())
}

#[test]
fn test_check_invalid_json_is_an_error() -> Result<()> {
    let test = CliTest::with_file("broken.json", "{ not json")?;

    let output = test.run(&["check", "broken.json"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid JSON format"));
    Ok(())
}

#[test]
fn test_check_missing_file() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["check", "nope.json"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("nope.json"));
    Ok(())
}
