use anyhow::Result;
use serde_json::json;

use crate::{CliTest, stdout};

const CARD: &str = "'dialog(cr123_bot.topic.OrderStatus)'.Card.1.text";
const GREETING: &str = "'dialog(cr123_bot.topic.Greeting)'.DisplayName";

#[test]
fn test_validate_reports_warnings() -> Result<()> {
    let test = CliTest::with_sample()?;
    test.write_file(
        "bot.translations.json",
        &json!({
            CARD: { "German": "Ihre Bestellung wurde versandt" },
            GREETING: { "German": "Begrüßung" }
        })
        .to_string(),
    )?;

    let output = test.run(&["validate", "bot.json", "-l", "German"])?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(out.contains("warning: Placeholder mismatch: expected [{orderId}], found []"));
    assert!(out.contains(&format!("= key: {}", CARD)));
    assert!(out.contains("Validated 2 German translation(s), mean score 0.90"));
    Ok(())
}

#[test]
fn test_validate_fails_on_errors() -> Result<()> {
    let test = CliTest::with_sample()?;
    test.write_file(
        "tm.json",
        &json!({
            CARD: { "German": "[ERROR: Translation failed: timeout]" },
            GREETING: { "German": "Begrüßung" }
        })
        .to_string(),
    )?;

    let output = test.run(&["validate", "bot.json", "-l", "German", "--translations", "tm.json"])?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("error: Translation contains error message"));
    assert!(out.contains("✘ Validated 2 German translation(s), mean score 0.50"));
    Ok(())
}

#[test]
fn test_validate_without_translations() -> Result<()> {
    let test = CliTest::with_sample()?;

    let output = test.run(&["validate", "bot.json", "-l", "German"])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(crate::stderr(&output).contains("No German translations found"));
    Ok(())
}
