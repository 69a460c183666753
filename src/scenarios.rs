//! The three example flows.
//!
//! Each scenario owns a fresh conversation, calls the injected client one or
//! more times, and prints its output. Failures are caught by [`run_all`] at
//! the scenario boundary and reported; one scenario's failure never prevents
//! the next from running.

use crate::client::MessagesApi;
use crate::conversation::{extract_reply_text, Conversation, UsageTotals};
use crate::error::ClientError;
use crate::report;
use crate::types::CreateMessageRequest;
use crate::DEFAULT_MODEL;

/// Token budget for the single-message scenario
const BASIC_MAX_TOKENS: u32 = 1024;

/// Token budget for the multi-turn and system-prompt scenarios
const FOLLOW_UP_MAX_TOKENS: u32 = 512;

/// Run all three scenarios in order, reporting failures locally.
///
/// Scenario failures never escape: each is classified, printed, and the
/// next scenario runs regardless.
pub async fn run_all(client: &dyn MessagesApi) {
    if let Err(error) = basic_message(client).await {
        report::report_failure("basic message", &error);
    }

    if let Err(error) = multi_turn(client).await {
        report::report_failure("multi-turn conversation", &error);
    }

    if let Err(error) = system_prompt(client).await {
        report::report_failure("system prompt", &error);
    }
}

/// Send a single message and print the reply, usage and metadata.
pub async fn basic_message(client: &dyn MessagesApi) -> Result<(), ClientError> {
    println!("Sending message to Claude...");

    let mut conversation = Conversation::new();
    conversation.push_user("Hello, Claude! Can you introduce yourself?");

    let request = CreateMessageRequest::new(
        DEFAULT_MODEL,
        BASIC_MAX_TOKENS,
        conversation.messages().to_vec(),
    );
    let response = client.create_message(request).await?;

    println!("\nClaude's response:");
    println!("{}", "-".repeat(50));
    println!("{}", extract_reply_text(&response)?);
    println!("{}", "-".repeat(50));

    println!("\nUsage:");
    println!("  Input tokens: {}", response.usage.input_tokens);
    println!("  Output tokens: {}", response.usage.output_tokens);
    println!(
        "  Total tokens: {}",
        u64::from(response.usage.input_tokens) + u64::from(response.usage.output_tokens)
    );

    println!("\nMetadata:");
    println!("  Response ID: {}", response.id);
    println!("  Model: {}", response.model);
    if let Some(stop_reason) = response.stop_reason {
        println!("  Stop reason: {:?}", stop_reason);
    }

    Ok(())
}

/// Hold a two-round conversation, feeding the growing transcript back into
/// each request, and return the summed token totals.
///
/// Round 1 sends a single user message. The assistant's reply is appended to
/// the transcript, then the follow-up user message, so round 2 sends exactly
/// three messages: user, assistant, user.
pub async fn multi_turn(client: &dyn MessagesApi) -> Result<UsageTotals, ClientError> {
    println!("\n=== Multi-turn Conversation Example ===");
    println!("Starting conversation...");

    let mut conversation = Conversation::new();
    let mut totals = UsageTotals::new();

    conversation.push_user("What's the capital of France?");

    let first = client
        .create_message(CreateMessageRequest::new(
            DEFAULT_MODEL,
            FOLLOW_UP_MAX_TOKENS,
            conversation.messages().to_vec(),
        ))
        .await?;
    totals.record(&first.usage);

    let answer = extract_reply_text(&first)?.to_string();
    println!("\nClaude: {}", answer);

    conversation.push_assistant(answer);
    conversation.push_user("And what's a popular tourist attraction there?");

    let second = client
        .create_message(CreateMessageRequest::new(
            DEFAULT_MODEL,
            FOLLOW_UP_MAX_TOKENS,
            conversation.messages().to_vec(),
        ))
        .await?;
    totals.record(&second.usage);

    println!("\nClaude: {}", extract_reply_text(&second)?);
    println!("\nTotal conversation tokens: {}", totals.total());

    Ok(totals)
}

/// Send a single message with a system prompt carried as a distinct request
/// field, never folded into the transcript.
pub async fn system_prompt(client: &dyn MessagesApi) -> Result<(), ClientError> {
    println!("\n=== System Prompt Example ===");
    println!("Asking Claude to respond like a pirate...");

    let mut conversation = Conversation::new();
    conversation.push_user("What's the weather like today?");

    let request = CreateMessageRequest::new(
        DEFAULT_MODEL,
        FOLLOW_UP_MAX_TOKENS,
        conversation.messages().to_vec(),
    )
    .with_system("You are a friendly pirate. Respond in pirate speak.");
    let response = client.create_message(request).await?;

    println!("\nPirate Claude: {}", extract_reply_text(&response)?);

    Ok(())
}
