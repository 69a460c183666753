//! Mock implementations for testing.

use crate::client::MessagesApi;
use crate::error::ClientError;
use crate::types::{CreateMessageRequest, MessageResponse};
use async_trait::async_trait;
use mockall::mock;
use std::collections::VecDeque;
use std::sync::Mutex;

mock! {
    /// Mockall-based mock of the Messages API for expectation-style tests
    pub MessagesApi {}

    #[async_trait]
    impl MessagesApi for MessagesApi {
        async fn create_message(
            &self,
            request: CreateMessageRequest,
        ) -> Result<MessageResponse, ClientError>;
    }
}

/// Scripted Messages API mock.
///
/// Returns canned results in order and records every request it receives,
/// for tests that assert on the transcript shape across calls.
pub struct ScriptedClient {
    responses: Mutex<VecDeque<Result<MessageResponse, ClientError>>>,
    requests: Mutex<Vec<CreateMessageRequest>>,
}

impl ScriptedClient {
    /// Create a mock with no scripted responses
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a successful response
    pub fn push_ok(&self, response: MessageResponse) {
        self.responses.lock().unwrap().push_back(Ok(response));
    }

    /// Queue a failure
    pub fn push_err(&self, error: ClientError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// The requests received so far, in call order
    pub fn requests(&self) -> Vec<CreateMessageRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for ScriptedClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessagesApi for ScriptedClient {
    async fn create_message(
        &self,
        request: CreateMessageRequest,
    ) -> Result<MessageResponse, ClientError> {
        self.requests.lock().unwrap().push(request);

        self.responses.lock().unwrap().pop_front().unwrap_or_else(|| {
            Err(ClientError::Configuration {
                message: "No scripted response configured".to_string(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::types::MessageParam;

    #[tokio::test]
    async fn test_scripted_client_replays_in_order() {
        let client = ScriptedClient::new();
        client.push_ok(fixtures::text_response("first", 1, 2));
        client.push_err(ClientError::Timeout);

        let request = CreateMessageRequest::new(
            fixtures::TEST_MODEL,
            512,
            vec![MessageParam::user("Hello")],
        );

        let first = client.create_message(request.clone()).await;
        assert!(first.is_ok());

        let second = client.create_message(request.clone()).await;
        assert!(matches!(second, Err(ClientError::Timeout)));

        // A third call with nothing queued reports a configuration error.
        let third = client.create_message(request).await;
        assert!(matches!(third, Err(ClientError::Configuration { .. })));

        assert_eq!(client.requests().len(), 3);
    }
}
