//! # Anthropic Messages API Quickstart
//!
//! A small demonstration library for the Anthropic Claude Messages API:
//! send a message, hold a multi-turn conversation, use a system prompt,
//! and classify the failures a caller can observe at the API boundary.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use anthropic_quickstart::{ApiClient, ClientConfig, scenarios};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::from_env()?;
//!     let client = ApiClient::new(config)?;
//!
//!     scenarios::run_all(&client).await;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - `config` - Configuration and credential loading
//! - `client` - Messages API client facade
//! - `error` - Error types and taxonomy
//! - `types` - Request/response wire types
//! - `conversation` - Conversation transcript and usage accounting
//! - `report` - Failure classification and reporting
//! - `scenarios` - The three example flows

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod config;
pub mod conversation;
pub mod error;
pub mod report;
pub mod scenarios;
pub mod types;

// Development/testing modules
#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mocks;

// Re-exports for convenience
pub use client::{ApiClient, MessagesApi};
pub use config::ClientConfig;
pub use conversation::{extract_reply_text, Conversation, UsageTotals};
pub use error::{ClientError, ClientResult};
pub use types::{
    ContentBlock, CreateMessageRequest, MessageParam, MessageResponse, Role, StopReason, Usage,
};

/// The default Anthropic API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";

/// The default API version
pub const DEFAULT_API_VERSION: &str = "2023-06-01";

/// The default request timeout (10 minutes for long-running requests)
pub const DEFAULT_TIMEOUT_SECS: u64 = 600;

/// The model used by the example scenarios
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-5-20250929";

/// Name of the environment variable holding the API key
pub const API_KEY_ENV_VAR: &str = "ANTHROPIC_API_KEY";
