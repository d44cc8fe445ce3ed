use chatloc::mcp::{
    ChatlocMcpServer,
    types::{FileParams, InspectFileParams},
};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_json, sample_export};

#[tokio::test]
async fn test_validate_structure_ok() {
    let fixture = McpTestFixture::with_export(&sample_export()).unwrap();
    let server = ChatlocMcpServer::new();

    let result = server
        .validate_structure(Parameters(FileParams {
            file_path: fixture.file("bot.json"),
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["valid"], true);
    assert_eq!(json_result["errors"], json!([]));
}

#[tokio::test]
async fn test_validate_structure_reports_errors() {
    let fixture = McpTestFixture::with_export(&json!({ "plain": 1 })).unwrap();
    let server = ChatlocMcpServer::new();

    let result = server
        .validate_structure(Parameters(FileParams {
            file_path: fixture.file("bot.json"),
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["valid"], false);
    assert_eq!(
        json_result["errors"],
        json!([
            "Value must be string for key: plain",
            "Key doesn't match expected format: plain"
        ])
    );
}

#[tokio::test]
async fn test_validate_structure_invalid_json() {
    let fixture = McpTestFixture::new().unwrap();
    fixture.write_raw("bot.json", "{ nope").unwrap();
    let server = ChatlocMcpServer::new();

    let result = server
        .validate_structure(Parameters(FileParams {
            file_path: fixture.file("bot.json"),
        }))
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_inspect_file_summary_and_items() {
    let fixture = McpTestFixture::with_export(&sample_export()).unwrap();
    let server = ChatlocMcpServer::new();

    let result = server
        .inspect_file(Parameters(InspectFileParams {
            file_path: fixture.file("bot.json"),
            ..Default::default()
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalEntries"], 4);
    assert_eq!(json_result["topics"]["Order Status"], 2);
    assert_eq!(json_result["topics"]["Global Variables"], 1);
    assert_eq!(json_result["components"]["DialogDisplayName"], 1);

    let first = &json_result["items"][0];
    assert_eq!(first["key"], "'dialog(cr123_bot.topic.OrderStatus)'.Card.1.text");
    assert_eq!(first["topic"], "Order Status");
    assert_eq!(first["component"], "Card");
    assert_eq!(first["description"], "Topic: Order Status | Component: Card");
    assert_eq!(first["isGlobalVariable"], false);
    assert_eq!(json_result["items"][3]["isGlobalVariable"], true);
    assert_eq!(json_result["pagination"]["hasMore"], false);
}

#[tokio::test]
async fn test_inspect_file_filters_and_paginates() {
    let fixture = McpTestFixture::with_export(&sample_export()).unwrap();
    let server = ChatlocMcpServer::new();

    let result = server
        .inspect_file(Parameters(InspectFileParams {
            file_path: fixture.file("bot.json"),
            topic: Some("Order Status".into()),
            limit: Some(1),
            ..Default::default()
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["matchingCount"], 2);
    assert_eq!(json_result["items"].as_array().map(Vec::len), Some(1));
    assert_eq!(json_result["pagination"]["hasMore"], true);

    let result = server
        .inspect_file(Parameters(InspectFileParams {
            file_path: fixture.file("bot.json"),
            search: Some("ORDER NUMBER".into()),
            ..Default::default()
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(json_result["matchingCount"], 1);
    assert_eq!(json_result["items"][0]["component"], "Prompt");
}

#[tokio::test]
async fn test_inspect_file_rejects_bad_structure() {
    let fixture = McpTestFixture::with_export(&json!({ "plain": "x" })).unwrap();
    let server = ChatlocMcpServer::new();

    let result = server
        .inspect_file(Parameters(InspectFileParams {
            file_path: fixture.file("bot.json"),
            ..Default::default()
        }))
        .await;

    assert!(result.is_err());
}
