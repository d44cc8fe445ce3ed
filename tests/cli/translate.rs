use anyhow::Result;
use serde_json::json;

use crate::{CliTest, stderr, stdout};

const CARD: &str = "'dialog(cr123_bot.topic.OrderStatus)'.Card.1.text";
const PROMPT: &str = "'dialog(cr123_bot.topic.OrderStatus)'.Prompt.question_abc.text";
const GREETING: &str = "'dialog(cr123_bot.topic.Greeting)'.DisplayName";
const GLOBAL: &str = "'globalVariable(cr123_bot.UserName)'.DisplayName";
const NUMBER: &str = "'dialog(cr123_bot.topic.Greeting)'.Activity.sendActivity_1.text";

#[test]
fn test_translate_with_mock_backend() -> Result<()> {
    let test = CliTest::with_sample()?;

    let output = test.run(&["translate", "bot.json", "--language", "German"])?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Translated 3 entries into German"));
    assert!(stderr(&output).contains("using mock translations"));

    let exported = test.read_json("bot.german.json")?;
    assert_eq!(
        exported,
        json!({
            CARD: "[FORMAL] Your order {orderId} has shipped [GERMAN]",
            PROMPT: "[FORMAL] What is your order number? [GERMAN]",
            GREETING: "[FORMAL] Greeting [GERMAN]",
            GLOBAL: "User name",
            NUMBER: "42"
        })
    );

    // Export keeps source key order.
    let keys: Vec<String> = exported
        .as_object()
        .map(|m| m.keys().cloned().collect())
        .unwrap_or_default();
    assert_eq!(keys, vec![CARD, PROMPT, GREETING, GLOBAL, NUMBER]);

    let store = test.read_json("bot.translations.json")?;
    assert_eq!(store[GREETING]["German"], "[FORMAL] Greeting [GERMAN]");
    assert!(store.get(GLOBAL).is_none());

    // Mock output never reaches the cache.
    assert!(!test.root().join("translation_cache.json").exists());
    Ok(())
}

#[test]
fn test_translate_selected_keys_and_style() -> Result<()> {
    let test = CliTest::with_sample()?;

    let output = test.run(&[
        "translate",
        "bot.json",
        "-l",
        "French",
        "--style",
        "chatbot",
        "--key",
        GREETING,
        "--output",
        "out/fr.json",
    ])?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let exported = test.read_json("out/fr.json")?;
    assert_eq!(exported[GREETING], "[BOT] Greeting [FRENCH]");
    assert_eq!(exported[CARD], "Your order {orderId} has shipped");
    Ok(())
}

#[test]
fn test_translate_skips_existing_unless_forced() -> Result<()> {
    let test = CliTest::with_sample()?;
    test.write_file(
        "bot.translations.json",
        &json!({ GREETING: { "German": "Begrüßung" } }).to_string(),
    )?;

    test.run(&["translate", "bot.json", "-l", "German"])?;
    let exported = test.read_json("bot.german.json")?;
    assert_eq!(exported[GREETING], "Begrüßung");
    assert_eq!(exported[CARD], "[FORMAL] Your order {orderId} has shipped [GERMAN]");

    test.run(&["translate", "bot.json", "-l", "German", "--force"])?;
    let exported = test.read_json("bot.german.json")?;
    assert_eq!(exported[GREETING], "[FORMAL] Greeting [GERMAN]");
    Ok(())
}

#[test]
fn test_translate_uses_config_defaults() -> Result<()> {
    let test = CliTest::with_sample()?;
    test.write_file(
        ".chatlocrc.json",
        r#"{ "targetLanguage": "Italian", "style": "conversational", "ignoreKeys": ["*Prompt*"] }"#,
    )?;

    let output = test.run(&["translate", "bot.json"])?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let exported = test.read_json("bot.italian.json")?;
    assert_eq!(exported[CARD], "[CONV] Your order {orderId} has shipped [ITALIAN]");
    assert_eq!(exported[PROMPT], "What is your order number?");
    Ok(())
}

#[test]
fn test_translate_warns_about_unknown_keys() -> Result<()> {
    let test = CliTest::with_sample()?;

    let output = test.run(&["translate", "bot.json", "-l", "German", "--key", "missing.key"])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("Key not found in bot.json: missing.key"));
    assert!(stdout(&output).contains("Translated 0 entries"));
    Ok(())
}

#[test]
fn test_translate_rejects_bad_config() -> Result<()> {
    let test = CliTest::with_sample()?;
    test.write_file(".chatlocrc.json", r#"{ "ignoreKeys": ["[oops"] }"#)?;

    let output = test.run(&["translate", "bot.json"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("ignoreKeys"));
    Ok(())
}
