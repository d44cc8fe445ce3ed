//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes file inspection, structure checks, translation and validation as
//! MCP tools over stdio.
//!
//! ## Module Structure
//!
//! - `helpers`: result serialization and translator construction
//! - `server`: tool definitions and the stdio entry point
//! - `types`: tool parameter and result types

mod helpers;
mod server;
pub mod types;

pub use server::{ChatlocMcpServer, run_server};
