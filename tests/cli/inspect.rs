use anyhow::Result;

use crate::{CliTest, stdout};

fn line_with<'a>(out: &'a str, needle: &str) -> Option<&'a str> {
    out.lines().find(|line| line.contains(needle))
}

#[test]
fn test_inspect_summaries() -> Result<()> {
    let test = CliTest::with_sample()?;

    let output = test.run(&["inspect", "bot.json"])?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(out.contains("Topics (5 entries)"));
    assert!(line_with(&out, "  Order Status").is_some_and(|l| l.trim_end().ends_with(" 2")));
    assert!(line_with(&out, "  Global Variables").is_some_and(|l| l.trim_end().ends_with(" 1")));
    assert!(line_with(&out, "  DialogDisplayName").is_some_and(|l| l.trim_end().ends_with(" 1")));
    assert!(out.contains("Key"));
    assert!(out.contains("Your order {orderId} has shipped"));
    Ok(())
}

#[test]
fn test_inspect_filters_by_topic_and_search() -> Result<()> {
    let test = CliTest::with_sample()?;

    let output = test.run(&["inspect", "bot.json", "--topic", "Order Status", "--search", "number"])?;
    let out = stdout(&output);
    let table: Vec<&str> = out
        .lines()
        .skip_while(|line| !line.starts_with("Key"))
        .skip(1)
        .collect();

    assert_eq!(table.len(), 1, "unexpected rows: {:?}", table);
    assert!(table[0].contains("What is your order number?"));
    assert!(table[0].contains("Prompt"));
    Ok(())
}

#[test]
fn test_inspect_status_filter_uses_translations() -> Result<()> {
    let test = CliTest::with_sample()?;
    test.write_file(
        "bot.translations.json",
        r#"{ "'dialog(cr123_bot.topic.Greeting)'.DisplayName": { "German": "Begrüßung" } }"#,
    )?;

    let output = test.run(&["inspect", "bot.json", "--status", "translated", "-l", "German"])?;
    let out = stdout(&output);
    let rows: Vec<&str> = out
        .lines()
        .skip_while(|line| !line.starts_with("Key"))
        .skip(1)
        .collect();

    assert_eq!(rows.len(), 1);
    assert!(rows[0].contains("Translated"));
    Ok(())
}

#[test]
fn test_inspect_writes_analysis_json() -> Result<()> {
    let test = CliTest::with_sample()?;

    let output = test.run(&["inspect", "bot.json", "--json", "analysis.json"])?;
    assert_eq!(output.status.code(), Some(0));

    let analysis = test.read_json("analysis.json")?;
    assert_eq!(analysis["total_entries"], 5);
    assert_eq!(analysis["topics"]["Order Status"], 2);
    assert_eq!(analysis["components"]["Card"], 1);
    assert_eq!(analysis["entries"].as_array().map(Vec::len), Some(5));
    Ok(())
}

#[test]
fn test_inspect_structural_error() -> Result<()> {
    let test = CliTest::with_file("bad.json", r#"{ "plain": "x" }"#)?;

    let output = test.run(&["inspect", "bad.json"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Key doesn't match expected format: plain"));
    Ok(())
}
