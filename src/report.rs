//! Failure classification and reporting.
//!
//! A single-shot classification applied at each scenario boundary. Every
//! failure is terminal for its scenario: it is described, printed, and the
//! program moves on to the next scenario.

use crate::error::ClientError;

/// Build the user-facing diagnostic for a failure.
///
/// Three categories are distinguished:
/// - rate limit: labeled as such, with the advised wait when the API gave one;
/// - API error: the vendor's type tag, message and HTTP status code;
/// - everything else: the error's category name and detail text, labeled
///   as unexpected.
pub fn describe_failure(error: &ClientError) -> String {
    match error {
        ClientError::RateLimit {
            message,
            retry_after,
        } => {
            let mut text = format!("Rate limit exceeded: {}", message);
            if let Some(wait) = retry_after {
                text.push_str(&format!(
                    "\nPlease wait {} seconds before retrying.",
                    wait.as_secs()
                ));
            }
            text
        }
        ClientError::Api {
            status,
            error_type,
            message,
        } => format!(
            "API error occurred: {} - {}\nStatus code: {}",
            error_type, message, status
        ),
        other => format!("Unexpected error: {}: {}", other.category(), other),
    }
}

/// Print the diagnostic for a failed scenario
pub fn report_failure(scenario: &str, error: &ClientError) {
    tracing::warn!(scenario, error = %error, "scenario failed");
    println!("\nError in {}:", scenario);
    println!("{}", describe_failure(error));
}
