//! Classify Domain use case
//!
//! Assigns exactly one [`Domain`] to a question with a single completion call.
//!
//! The classifier samples at a non-zero temperature, so repeated calls on the
//! same question may disagree. The deterministic safety net is the fallback:
//! any failed call, blank reply, or unrecognised label yields
//! [`Domain::FALLBACK`] (common sense). Classification never fails.

use crate::config::PipelineParams;
use crate::ports::completion_gateway::CompletionGateway;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::use_cases::shared::call_stage;
use stagewise_domain::util::preview;
use stagewise_domain::{Domain, PromptTemplate, Stage};
use std::sync::Arc;
use tracing::{info, warn};

/// Use case for classifying a question into a domain
#[derive(Clone)]
pub struct ClassifyDomainUseCase {
    gateway: Arc<dyn CompletionGateway>,
    params: Arc<PipelineParams>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl ClassifyDomainUseCase {
    pub fn new(gateway: Arc<dyn CompletionGateway>, params: Arc<PipelineParams>) -> Self {
        Self {
            gateway,
            params,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Classify a question. Total: always returns a routable domain.
    pub async fn classify(&self, question: &str) -> Domain {
        let prompt = PromptTemplate::classification_prompt(question, &self.params.reference_date);

        let reply = call_stage(
            self.gateway.as_ref(),
            self.conversation_logger.as_ref(),
            &self.params,
            Stage::Classify,
            PromptTemplate::classification_system(),
            &prompt,
        )
        .await;

        let (domain, raw) = match reply {
            Ok(text) => {
                let domain = Domain::from_label(&text);
                let normalized = text.trim().to_lowercase();
                if domain.as_str() != normalized {
                    warn!(
                        "Unrecognised classifier label '{}', falling back to {}",
                        preview(&text, 40),
                        domain
                    );
                }
                (domain, Some(text))
            }
            Err(diagnostic) => {
                warn!(
                    "Classification failed ({}), falling back to {}",
                    diagnostic,
                    Domain::FALLBACK
                );
                (Domain::FALLBACK, None)
            }
        };

        info!("Classified question as {}", domain);
        self.conversation_logger.log(ConversationEvent::new(
            "classification",
            serde_json::json!({
                "question": question,
                "raw_label": raw,
                "domain": domain.as_str(),
            }),
        ));

        domain
    }
}
