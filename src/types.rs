//! Request and response types for the Messages API.

use serde::{Deserialize, Serialize};

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A message authored by the caller
    User,
    /// A message authored by the model
    Assistant,
}

/// Stop reason for message completion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// The model reached a natural end of turn
    EndTurn,
    /// The token budget was exhausted
    MaxTokens,
    /// A stop sequence was produced
    StopSequence,
    /// The model requested a tool invocation
    ToolUse,
}

/// Token usage information returned per request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Usage {
    /// Tokens consumed by the request input
    pub input_tokens: u32,
    /// Tokens produced in the response
    pub output_tokens: u32,
}

/// Content block in a message response.
///
/// Only text blocks are consumed here; every other block kind (tool use,
/// images, documents) is preserved as raw JSON so callers can report what
/// they received instead of misreading it as text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// A plain text block
    Text {
        /// The text content
        text: String,
    },
    /// Any non-text block, kept as its raw JSON value
    #[serde(untagged)]
    Other(serde_json::Value),
}

impl ContentBlock {
    /// The kind string of this block ("text", "tool_use", ...)
    pub fn kind(&self) -> &str {
        match self {
            ContentBlock::Text { .. } => "text",
            ContentBlock::Other(value) => value
                .get("type")
                .and_then(|t| t.as_str())
                .unwrap_or("unknown"),
        }
    }
}

/// A single transcript entry sent with a request.
///
/// Immutable once appended to a conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageParam {
    /// Who authored the message
    pub role: Role,
    /// The message text
    pub content: String,
}

impl MessageParam {
    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Request to create a message.
///
/// The system prompt is a distinct top-level field, never folded into the
/// message transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMessageRequest {
    /// Model identifier
    pub model: String,
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Ordered conversation transcript
    pub messages: Vec<MessageParam>,
    /// Optional system prompt
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
}

impl CreateMessageRequest {
    /// Create a new message request
    pub fn new(model: impl Into<String>, max_tokens: u32, messages: Vec<MessageParam>) -> Self {
        Self {
            model: model.into(),
            max_tokens,
            messages,
            system: None,
        }
    }

    /// Set the system prompt
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }
}

/// A complete message response from the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    /// Response identifier
    pub id: String,
    /// Author role (always assistant)
    pub role: Role,
    /// Content blocks produced by the model
    pub content: Vec<ContentBlock>,
    /// Model that produced the response
    pub model: String,
    /// Why generation stopped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_reason: Option<StopReason>,
    /// Token accounting for this request
    pub usage: Usage,
}
