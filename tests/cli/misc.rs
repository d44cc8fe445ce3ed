use anyhow::Result;

use crate::{CliTest, stdout};

#[test]
fn test_languages() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["languages"])?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(out.lines().count(), 37);
    assert!(out.lines().any(|l| l == "Spanish"));
    Ok(())
}

#[test]
fn test_styles() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["styles"])?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(out.lines().any(|l| l.starts_with("formal") && l.ends_with("(default)")));
    assert!(out.lines().any(|l| l.starts_with("chatbot")));
    Ok(())
}

#[test]
fn test_estimate() -> Result<()> {
    let test = CliTest::with_sample()?;

    let output = test.run(&["estimate", "bot.json"])?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    // Global variable and the numeric entry are not counted.
    assert!(out.contains("Texts:          3"));
    assert!(out.contains("Total cost:     $"));
    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&[])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Usage:"));
    Ok(())
}
