use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::Value;
use tempfile::TempDir;

mod tools;

/// Test fixture for MCP integration tests
///
/// Manages a temporary project directory holding localization exports.
pub struct McpTestFixture {
    _temp_dir: TempDir,
    project_root: PathBuf,
}

impl McpTestFixture {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_root = temp_dir.path().canonicalize()?;
        fs::create_dir(project_root.join(".git"))?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_root,
        })
    }

    /// Create a project with one export written to `bot.json`.
    pub fn with_export(content: &Value) -> Result<Self> {
        let fixture = Self::new()?;
        fixture.write_json("bot.json", content)?;
        Ok(fixture)
    }

    pub fn write_json(&self, relative_path: &str, content: &Value) -> Result<()> {
        let path = self.project_root.join(relative_path);
        let json_str = serde_json::to_string_pretty(content)?;
        fs::write(&path, format!("{}\n", json_str))
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        Ok(())
    }

    pub fn write_raw(&self, relative_path: &str, content: &str) -> Result<()> {
        fs::write(self.project_root.join(relative_path), content)?;
        Ok(())
    }

    /// Write a .chatlocrc.json config file
    pub fn write_config(&self, content: &Value) -> Result<()> {
        self.write_json(".chatlocrc.json", content)
    }

    /// Get the project root path as a string (for MCP parameters)
    pub fn root(&self) -> String {
        self.project_root.to_string_lossy().to_string()
    }

    pub fn file(&self, relative_path: &str) -> String {
        self.project_root.join(relative_path).to_string_lossy().to_string()
    }

    pub fn root_path(&self) -> &Path {
        &self.project_root
    }
}

/// A small export with two topics and a global variable.
pub fn sample_export() -> Value {
    serde_json::json!({
        "'dialog(cr123_bot.topic.OrderStatus)'.Card.1.text": "Your order {orderId} has shipped",
        "'dialog(cr123_bot.topic.OrderStatus)'.Prompt.question_abc.text": "What is your order number?",
        "'dialog(cr123_bot.topic.Greeting)'.DisplayName": "Greeting",
        "'globalVariable(cr123_bot.UserName)'.DisplayName": "User name"
    })
}

/// Extract JSON from a tool result
pub fn extract_tool_result_json(result: &rmcp::model::CallToolResult) -> Value {
    if let Some(true) = result.is_error {
        panic!("Tool call returned an error: {:?}", result);
    }

    assert!(
        !result.content.is_empty(),
        "Tool result should have content"
    );

    let text_content = result.content[0]
        .as_text()
        .expect("Tool result content should be text");

    serde_json::from_str(&text_content.text).expect("Tool result should be valid JSON")
}
