use chatloc::mcp::{ChatlocMcpServer, types::GetConfigParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_json};

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    let server = ChatlocMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], false);
    assert_eq!(json_result["config"]["targetLanguage"], "Spanish");
    assert_eq!(json_result["config"]["style"], "formal");
    assert_eq!(json_result["config"]["maxWorkers"], 5);
    assert!(json_result["backendConfigured"].is_boolean());
}

#[tokio::test]
async fn test_get_config_from_chatlocrc() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "targetLanguage": "Japanese",
            "ignoreKeys": ["*GlobalVariables*"]
        }))
        .unwrap();

    let server = ChatlocMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["targetLanguage"], "Japanese");
    assert_eq!(json_result["config"]["ignoreKeys"], json!(["*GlobalVariables*"]));
}

#[tokio::test]
async fn test_get_config_invalid_pattern_is_an_error() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({ "ignoreKeys": ["[bad"] }))
        .unwrap();

    let server = ChatlocMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    assert!(server.get_config(params).await.is_err());
}
