//! Test fixtures and helper data.

use crate::types::{ContentBlock, MessageResponse, Role, StopReason, Usage};
use serde_json::json;

/// Sample API key for testing
pub const TEST_API_KEY: &str = "sk-ant-test123456789012345";

/// Model ID used across tests
pub const TEST_MODEL: &str = "claude-sonnet-4-5-20250929";

/// Create a sample Usage struct
pub fn sample_usage() -> Usage {
    Usage {
        input_tokens: 10,
        output_tokens: 20,
    }
}

/// Build a text-only response with the given reply and usage
pub fn text_response(text: &str, input_tokens: u32, output_tokens: u32) -> MessageResponse {
    MessageResponse {
        id: "msg_01XFDUDYJgAACzvnptvVoYEL".to_string(),
        role: Role::Assistant,
        content: vec![ContentBlock::Text {
            text: text.to_string(),
        }],
        model: TEST_MODEL.to_string(),
        stop_reason: Some(StopReason::EndTurn),
        usage: Usage {
            input_tokens,
            output_tokens,
        },
    }
}

/// Build a response whose first content block is a tool-use block
pub fn tool_use_response() -> MessageResponse {
    MessageResponse {
        id: "msg_01ToolUse".to_string(),
        role: Role::Assistant,
        content: vec![ContentBlock::Other(json!({
            "type": "tool_use",
            "id": "toolu_01A09q90qw90lq917835lq9",
            "name": "get_weather",
            "input": {"location": "Paris"}
        }))],
        model: TEST_MODEL.to_string(),
        stop_reason: Some(StopReason::ToolUse),
        usage: sample_usage(),
    }
}

/// Create a sample message response JSON body
pub fn sample_message_response() -> serde_json::Value {
    json!({
        "id": "msg_01XFDUDYJgAACzvnptvVoYEL",
        "type": "message",
        "role": "assistant",
        "content": [
            {
                "type": "text",
                "text": "Hello! How can I assist you today?"
            }
        ],
        "model": TEST_MODEL,
        "stop_reason": "end_turn",
        "usage": {
            "input_tokens": 10,
            "output_tokens": 20
        }
    })
}
