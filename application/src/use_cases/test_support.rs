//! Test doubles shared by the use case tests.

use crate::ports::completion_gateway::CompletionGateway;
use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use async_trait::async_trait;
use stagewise_domain::{CompletionRequest, CompletionResult};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Gateway that replays scripted results in order and records every request.
///
/// Once the script runs out every call is a transport failure.
pub(crate) struct ScriptedGateway {
    responses: Mutex<VecDeque<CompletionResult>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedGateway {
    pub(crate) fn new(responses: Vec<CompletionResult>) -> Self {
        Self {
            responses: Mutex::new(VecDeque::from(responses)),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Script made only of successful texts.
    pub(crate) fn texts(texts: &[&str]) -> Self {
        Self::new(texts.iter().map(|t| CompletionResult::success(*t)).collect())
    }

    pub(crate) fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub(crate) fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionGateway for ScriptedGateway {
    async fn complete(&self, request: &CompletionRequest) -> CompletionResult {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| CompletionResult::transport_failure("no scripted response"))
    }
}

/// Gateway that answers based on the system prompt, for concurrent tests
/// where call order is not deterministic.
pub(crate) struct EchoGateway;

#[async_trait]
impl CompletionGateway for EchoGateway {
    async fn complete(&self, request: &CompletionRequest) -> CompletionResult {
        let prompt = request.prompt();
        if request.system_prompt().contains("classifier") {
            return CompletionResult::success("math");
        }
        if prompt.starts_with("Below is a question") {
            // Extract: echo the last line of the question block
            let question = prompt
                .split("Original question:\n")
                .nth(1)
                .and_then(|rest| rest.split("\n\nReasoning:").next())
                .unwrap_or_default();
            return CompletionResult::success(format!("answer to {question}"));
        }
        CompletionResult::success("intermediate")
    }
}

/// Logger that keeps every event type in memory.
#[derive(Default)]
pub(crate) struct RecordingLogger {
    pub(crate) events: Mutex<Vec<(&'static str, serde_json::Value)>>,
}

impl RecordingLogger {
    pub(crate) fn event_types(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().iter().map(|(t, _)| *t).collect()
    }
}

impl ConversationLogger for RecordingLogger {
    fn log(&self, event: ConversationEvent) {
        self.events
            .lock()
            .unwrap()
            .push((event.event_type, event.payload));
    }
}
