use chatloc::mcp::{
    ChatlocMcpServer,
    types::{EstimateCostParams, TranslateTextParams, ValidateTranslationParams},
};
use rmcp::handler::server::wrapper::Parameters;

use crate::{McpTestFixture, extract_tool_result_json};

// These tests assume no Azure OpenAI credentials in the environment.

#[tokio::test]
async fn test_translate_text_with_mock() {
    let server = ChatlocMcpServer::new();

    let result = server
        .translate_text(Parameters(TranslateTextParams {
            text: "Pay now".into(),
            target_language: "Spanish".into(),
            style: None,
            context: Some("Billing".into()),
            project_root_path: None,
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["translation"], "[FORMAL] Pay now [SPANISH]");
    assert_eq!(json_result["backend"], "mock");
    assert_eq!(json_result["validation"]["isValid"], true);
}

#[tokio::test]
async fn test_translate_text_uses_project_config() {
    let fixture = McpTestFixture::new().unwrap();
    let server = ChatlocMcpServer::new();

    let result = server
        .translate_text(Parameters(TranslateTextParams {
            text: "Hello".into(),
            target_language: "German".into(),
            style: Some("chatbot".into()),
            context: None,
            project_root_path: Some(fixture.root()),
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["translation"], "[BOT] Hello [GERMAN]");
    assert!(!fixture.root_path().join("translation_cache.json").exists());
}

#[tokio::test]
async fn test_validate_translation_tool() {
    let server = ChatlocMcpServer::new();

    let result = server
        .validate_translation(Parameters(ValidateTranslationParams {
            original: "Click {button} now".into(),
            translated: "Click now".into(),
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["isValid"], true);
    assert_eq!(json_result["warnings"].as_array().map(Vec::len), Some(1));
    assert!(json_result["score"].as_f64().unwrap() <= 0.8);

    let result = server
        .validate_translation(Parameters(ValidateTranslationParams {
            original: "Hello".into(),
            translated: "".into(),
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(json_result["isValid"], false);
    assert_eq!(json_result["score"], 0.0);
    assert_eq!(json_result["errors"][0], "Translation is empty");
}

#[tokio::test]
async fn test_estimate_cost_tool() {
    let server = ChatlocMcpServer::new();

    let result = server
        .estimate_cost(Parameters(EstimateCostParams {
            text_count: 2,
            avg_text_length: 400,
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["textCount"], 2);
    assert_eq!(json_result["inputTokens"], 300.0);
    assert_eq!(json_result["outputTokens"], 200.0);
    let total = json_result["totalCost"].as_f64().unwrap();
    assert!((total - 0.021).abs() < 1e-9);
}
