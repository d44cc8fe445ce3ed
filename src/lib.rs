//! chatloc - localization toolkit for chatbot-authoring exports
//!
//! chatloc reads flat JSON exports from conversational-bot authoring tools,
//! classifies every opaque key into topic, UI component, element type and
//! context, and translates entries through a cached, retrying backend.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and backend credentials
//! - `core`: Structure validation, key classification, indexing, export
//! - `issues`: Findings reported by check and validate
//! - `mcp`: Model Context Protocol server implementation
//! - `translation`: Cache, backends, retrying translator, worker pool, validation
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod mcp;
pub mod translation;
pub mod utils;
