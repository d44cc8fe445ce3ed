use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["init"])?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("✓ Created .chatlocrc.json"));

    let content = test.read_file(".chatlocrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["targetLanguage"], "Spanish");
    assert_eq!(parsed["style"], "formal");
    assert_eq!(parsed["backend"]["deployment"], "gpt-4");
    assert!(content.ends_with("}\n"));
    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".chatlocrc.json", "{}")?;

    let output = test.run(&["init"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(".chatlocrc.json already exists"));
    assert_eq!(test.read_file(".chatlocrc.json")?, "{}");
    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::with_sample()?;

    test.run(&["init"])?;
    let output = test.run(&["translate", "bot.json"])?;

    assert!(
        output.status.success(),
        "translate should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(test.root().join("bot.spanish.json").exists());
    Ok(())
}
