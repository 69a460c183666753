//! Conversation transcript accumulation and token usage accounting.

use crate::error::ClientError;
use crate::types::{ContentBlock, MessageParam, MessageResponse, Usage};

/// An ordered conversation transcript.
///
/// Messages are appended at the end and never deduplicated or reordered;
/// insertion order is the transcript sent to the API. The API expects turns
/// to alternate user/assistant, so the assistant reply must be appended
/// before the next user turn. That invariant is the caller's to uphold,
/// matching what the API itself enforces server-side.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<MessageParam>,
}

impl Conversation {
    /// Create an empty conversation
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user message at the end of the transcript
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(MessageParam::user(content));
    }

    /// Append an assistant message at the end of the transcript
    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(MessageParam::assistant(content));
    }

    /// The transcript in insertion order
    pub fn messages(&self) -> &[MessageParam] {
        &self.messages
    }

    /// Number of messages in the transcript
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns true if the transcript is empty
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Extract the reply text from a response.
///
/// The first content block must be a text block. A response with no content
/// yields [`ClientError::EmptyContent`]; a response whose first block is
/// something else (a tool-use block, for example) yields
/// [`ClientError::UnexpectedContent`] naming the block kind. Callers decide
/// what to do with non-text responses; nothing here assumes index 0 is text.
pub fn extract_reply_text(response: &MessageResponse) -> Result<&str, ClientError> {
    match response.content.first() {
        Some(ContentBlock::Text { text }) => Ok(text),
        Some(block) => Err(ClientError::UnexpectedContent {
            kind: block.kind().to_string(),
        }),
        None => Err(ClientError::EmptyContent),
    }
}

/// Running token totals across the responses of one conversation.
///
/// Totals are derived by summation as responses arrive; they are never read
/// back out of a stored response, so a response counted once cannot be
/// counted again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UsageTotals {
    input_tokens: u64,
    output_tokens: u64,
}

impl UsageTotals {
    /// Create zeroed totals
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one response's usage to the totals
    pub fn record(&mut self, usage: &Usage) {
        self.input_tokens += u64::from(usage.input_tokens);
        self.output_tokens += u64::from(usage.output_tokens);
    }

    /// Total input tokens recorded so far
    pub fn input_tokens(&self) -> u64 {
        self.input_tokens
    }

    /// Total output tokens recorded so far
    pub fn output_tokens(&self) -> u64 {
        self.output_tokens
    }

    /// Combined input and output token total
    pub fn total(&self) -> u64 {
        self.input_tokens + self.output_tokens
    }
}
