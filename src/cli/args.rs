//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Validate the structure of a localization export
//! - `inspect`: Classify entries and show topic/component summaries
//! - `translate`: Batch-translate entries and write a translated export
//! - `validate`: Score stored translations against their source text
//! - `estimate`: Estimate backend cost for translating a file
//! - `languages`, `styles`: List supported target languages and styles
//! - `init`: Initialize chatloc configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use crate::{
    config::{API_KEY_ENV, API_VERSION_ENV, Credentials, DEPLOYMENT_ENV, ENDPOINT_ENV},
    core::TranslationStatus,
};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Localization export to operate on.
#[derive(Debug, Clone, Args)]
pub struct FileArgs {
    /// Path to the localization JSON file
    pub file: PathBuf,
}

/// Target language and translation store shared by several commands.
#[derive(Debug, Clone, Args)]
pub struct LanguageArgs {
    /// Target language (overrides config file)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Translation store file (default: <FILE stem>.translations.json next to FILE)
    #[arg(long)]
    pub translations: Option<PathBuf>,
}

/// Azure OpenAI credentials. Without key and endpoint the offline mock backend is used.
#[derive(Debug, Clone, Default, Args)]
pub struct BackendArgs {
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long, env = ENDPOINT_ENV)]
    pub endpoint: Option<String>,

    #[arg(long, env = DEPLOYMENT_ENV)]
    pub deployment: Option<String>,

    #[arg(long, env = API_VERSION_ENV)]
    pub api_version: Option<String>,
}

impl From<BackendArgs> for Credentials {
    fn from(args: BackendArgs) -> Self {
        Self {
            api_key: args.api_key,
            endpoint: args.endpoint,
            deployment: args.deployment,
            api_version: args.api_version,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusFilter {
    Pending,
    Translated,
}

impl From<StatusFilter> for TranslationStatus {
    fn from(status: StatusFilter) -> Self {
        match status {
            StatusFilter::Pending => TranslationStatus::Pending,
            StatusFilter::Translated => TranslationStatus::Translated,
        }
    }
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub file: FileArgs,
}

#[derive(Debug, Args)]
pub struct InspectCommand {
    #[command(flatten)]
    pub file: FileArgs,

    #[command(flatten)]
    pub language: LanguageArgs,

    /// Only entries of this topic
    #[arg(long)]
    pub topic: Option<String>,

    /// Only entries of this UI component
    #[arg(long)]
    pub component: Option<String>,

    /// Case-insensitive search over text, description and topic
    #[arg(long)]
    pub search: Option<String>,

    /// Only entries with this translation status
    #[arg(long, value_enum)]
    pub status: Option<StatusFilter>,

    /// Maximum number of entries to list
    #[arg(long, default_value_t = 50)]
    pub limit: usize,

    /// Write the analysis report as JSON to this path
    #[arg(long)]
    pub json: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct TranslateCommand {
    #[command(flatten)]
    pub file: FileArgs,

    #[command(flatten)]
    pub language: LanguageArgs,

    /// Translation style: formal, conversational or chatbot (overrides config file)
    #[arg(short, long)]
    pub style: Option<String>,

    /// Translated file path (default: <FILE stem>.<language>.json next to FILE)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Translate only these keys
    #[arg(long = "key")]
    pub keys: Vec<String>,

    /// Maximum concurrent backend calls (overrides config file)
    #[arg(long)]
    pub workers: Option<usize>,

    /// Translate entries that already have a translation
    #[arg(long)]
    pub force: bool,

    #[command(flatten)]
    pub backend: BackendArgs,
}

#[derive(Debug, Args)]
pub struct ValidateCommand {
    #[command(flatten)]
    pub file: FileArgs,

    #[command(flatten)]
    pub language: LanguageArgs,
}

#[derive(Debug, Args)]
pub struct EstimateCommand {
    #[command(flatten)]
    pub file: FileArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate the structure of a localization export
    Check(CheckCommand),
    /// Classify entries and show topic and component summaries
    Inspect(InspectCommand),
    /// Translate entries and write a translated export
    Translate(TranslateCommand),
    /// Validate stored translations against their source text
    Validate(ValidateCommand),
    /// Estimate backend cost for translating a file
    Estimate(EstimateCommand),
    /// List supported target languages
    Languages,
    /// List translation styles
    Styles,
    /// Initialize a new .chatlocrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
