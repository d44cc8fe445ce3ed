use std::path::Path;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

use crate::{
    config::load_config,
    core::{
        check_file,
        index::{Filter, component_summary, is_global_variable, topic_summary},
        TranslationStore,
    },
    translation::{
        DEFAULT_STYLE, TranslationBackend, estimate_cost, validate_translation,
    },
};

use super::helpers::{backend_configured, build_translator, json_result, load_file};
use super::types::{
    ConfigDto, ConfigValues, CostDto, EntryItem, EstimateCostParams, FileParams, GetConfigParams,
    InspectFileParams, InspectResult, Pagination, StructureResult, TranslateTextParams,
    TranslateTextResult, ValidateTranslationParams, ValidationDto,
};

const DEFAULT_PAGE_SIZE: usize = 50;
const MAX_PAGE_SIZE: usize = 200;

#[derive(Clone)]
pub struct ChatlocMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for ChatlocMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl ChatlocMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get project configuration
    #[tool(
        description = "Get chatloc configuration (.chatlocrc.json) for a project directory, and whether a translation backend is configured."
    )]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        let config_dto = ConfigDto {
            from_file: result.from_file,
            backend_configured: backend_configured(&result.config),
            config: ConfigValues::from(result.config),
        };

        json_result(&config_dto)
    }

    /// Check the structure of a localization file
    #[tool(
        description = "Validate that a localization export is a flat JSON object of string values whose keys carry dialog(, topic( or globalVariable( markers. Returns at most 10 errors."
    )]
    pub async fn validate_structure(
        &self,
        params: Parameters<FileParams>,
    ) -> Result<CallToolResult, McpError> {
        let report = check_file(Path::new(&params.0.file_path))
            .map_err(|e| McpError::internal_error(format!("Failed to read file: {}", e), None))?;

        json_result(&StructureResult {
            valid: report.is_ok(),
            errors: report.errors,
        })
    }

    /// Classify and summarize a localization file
    #[tool(
        description = "Classify every key of a localization export into topic, UI component and element type. Returns topic/component counts and a paginated, filterable list of entries."
    )]
    pub async fn inspect_file(
        &self,
        params: Parameters<InspectFileParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let limit = params
            .limit
            .map(|v| v as usize)
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .min(MAX_PAGE_SIZE);
        let offset = params.offset.map(|v| v as usize).unwrap_or(0);

        let file = load_file(&params.file_path)?;
        let filter = Filter {
            query: params.search,
            topic: params.topic,
            component: params.component,
            status: None,
        };
        let matching = filter.apply(&file.records, &TranslationStore::new(), "");

        let items: Vec<EntryItem> = matching
            .iter()
            .skip(offset)
            .take(limit)
            .map(|(key, record)| EntryItem {
                key: key.clone(),
                text: record.text.clone(),
                topic: record.topic.clone(),
                component: record.ui_component.to_string(),
                element_type: record.element_type.to_string(),
                description: record.description.clone(),
                is_global_variable: is_global_variable(key, record),
            })
            .collect();

        let has_more = offset + items.len() < matching.len();

        json_result(&InspectResult {
            total_entries: file.len(),
            topics: topic_summary(&file.records),
            components: component_summary(&file.records),
            matching_count: matching.len(),
            items,
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        })
    }

    /// Translate a single text
    #[tool(
        description = "Translate one text with the configured backend (Azure OpenAI, or a mock when no credentials are set). Results are cached; failures come back as a string starting with [ERROR:."
    )]
    pub async fn translate_text(
        &self,
        params: Parameters<TranslateTextParams>,
    ) -> Result<CallToolResult, McpError> {
        let TranslateTextParams {
            text,
            target_language,
            style,
            context,
            project_root_path,
        } = params.0;
        let style = style.unwrap_or_else(|| DEFAULT_STYLE.to_string());
        let context = context.unwrap_or_default();

        let (translation, backend, original) = tokio::task::spawn_blocking(move || {
            let translator = build_translator(project_root_path.as_deref())?;
            let translation = translator.translate(&text, &target_language, &style, &context);
            Ok::<_, McpError>((translation, translator.backend().name().to_string(), text))
        })
        .await
        .map_err(|e| McpError::internal_error(format!("Translation task failed: {}", e), None))??;

        let validation = validate_translation(&original, &translation);
        json_result(&TranslateTextResult {
            translation,
            backend,
            validation: ValidationDto::from(validation),
        })
    }

    /// Score a translation
    #[tool(
        description = "Score a translation against its source: errors for empty output or [ERROR: sentinels, warnings for placeholder mismatch, unusual length, or unchanged text."
    )]
    pub async fn validate_translation(
        &self,
        params: Parameters<ValidateTranslationParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = validate_translation(&params.0.original, &params.0.translated);
        json_result(&ValidationDto::from(result))
    }

    /// Estimate translation cost
    #[tool(description = "Estimate token usage and USD cost of translating a number of texts.")]
    pub async fn estimate_cost(
        &self,
        params: Parameters<EstimateCostParams>,
    ) -> Result<CallToolResult, McpError> {
        let estimate = estimate_cost(
            params.0.text_count as usize,
            params.0.avg_text_length as usize,
        );
        json_result(&CostDto::from(estimate))
    }
}

#[tool_handler]
impl ServerHandler for ChatlocMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "chatloc MCP helps AI agents work with chatbot-authoring localization exports.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration and backend availability\n\
                 2. validate_structure - Check a localization file before anything else\n\
                 3. inspect_file - Topic/component summary and classified entries (paginated)\n\
                 4. translate_text - Translate one text (cached, retried)\n\
                 5. validate_translation - Score a translation against its source\n\
                 6. estimate_cost - Estimate backend cost for a batch\n\n\
                 Recommended Workflow:\n\
                 1. validate_structure, then inspect_file to see topics and components\n\
                 2. estimate_cost before translating many entries\n\
                 3. translate_text per entry, passing the entry's topic as context\n\
                 4. validate_translation on anything edited by hand"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = ChatlocMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
