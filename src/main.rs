//! Quickstart binary for the Anthropic Messages API.
//!
//! Checks the credential, builds the client once, then runs the three
//! example scenarios in order. Exits 1 only when the credential is missing;
//! scenario failures are reported and do not affect the exit code.
//!
//! ## Usage
//!
//! ```bash
//! export ANTHROPIC_API_KEY=sk-ant-api03-...
//! cargo run
//! ```

use anthropic_quickstart::{scenarios, ApiClient, ClientConfig, ClientError};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    // Fatal precondition, checked before any client construction or network
    // activity: a missing credential prints the remediation text and exits 1.
    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(ClientError::Configuration { message }) => {
            println!("{}", message);
            return ExitCode::FAILURE;
        }
        Err(error) => {
            println!("{}", error);
            return ExitCode::FAILURE;
        }
    };

    // The client is built once and injected into every scenario.
    let client = match ApiClient::new(config) {
        Ok(client) => client,
        Err(error) => {
            println!("Failed to create API client: {}", error);
            return ExitCode::FAILURE;
        }
    };

    scenarios::run_all(&client).await;

    println!("\n=== Examples Complete ===");
    println!("\nFor more information, see:");
    println!("- Claude API Documentation: https://platform.claude.com/docs");

    ExitCode::SUCCESS
}
