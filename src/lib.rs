//! PixelDojo AI image generation exposed as MCP tools.
//!
//! [`tools::ToolDispatcher`] is the entry point: it maps a tool name and its
//! JSON argument bag onto the model catalog or the PixelDojo HTTP API and
//! renders the outcome as text. [`server::PixelDojoServer`] plugs it into an
//! MCP session over stdio.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod logger;
pub mod models;
pub mod pixeldojo;
pub mod server;
pub mod tools;

pub use config::PixelDojoConfig;
pub use error::{DojoError, Result};
pub use models::*;
pub use pixeldojo::{CreditsClient, ImageClient, PixelDojoApi, PixelDojoClient};
pub use server::PixelDojoServer;
pub use tools::{ToolDispatcher, ToolOutput};
