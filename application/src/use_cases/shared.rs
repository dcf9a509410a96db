//! Shared helpers for use cases.
//!
//! Contains the single completion-call helper used by both the classifier
//! and the stage pipeline: it builds the request, sends it, records the
//! exchange in the conversation log, and reduces the result to usable text.

use crate::config::PipelineParams;
use crate::ports::completion_gateway::CompletionGateway;
use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use stagewise_domain::util::preview;
use stagewise_domain::{CompletionRequest, Stage};
use tracing::{debug, warn};

/// Usable (trimmed, non-empty) text, or a diagnostic explaining why there is none.
pub(crate) type StageText = Result<String, String>;

/// Make one completion call for `stage` and reduce it to usable text.
///
/// Never fails past this boundary: an invalid request, a failed call, and
/// a blank response all come back as `Err(diagnostic)`.
pub(crate) async fn call_stage(
    gateway: &dyn CompletionGateway,
    logger: &dyn ConversationLogger,
    params: &PipelineParams,
    stage: Stage,
    system_prompt: &str,
    prompt: &str,
) -> StageText {
    let request = match CompletionRequest::new(
        prompt,
        system_prompt,
        params.temperature_for(stage),
        params.timeout,
    ) {
        Ok(request) => request,
        Err(e) => {
            warn!("{} request rejected before sending: {}", stage, e);
            return Err(e.to_string());
        }
    };

    debug!(
        stage = stage.as_str(),
        prompt_bytes = prompt.len(),
        temperature = request.temperature(),
        "Sending completion request"
    );

    let result = gateway.complete(&request).await;

    match result.usable_text() {
        Some(text) => {
            debug!(stage = stage.as_str(), "{} response: {}", stage, preview(text, 120));
            logger.log(ConversationEvent::new(
                "stage_response",
                serde_json::json!({
                    "stage": stage.as_str(),
                    "system_prompt": system_prompt,
                    "prompt": prompt,
                    "temperature": request.temperature(),
                    "text": text,
                }),
            ));
            Ok(text.to_string())
        }
        None => {
            let diagnostic = result
                .diagnostic()
                .map(str::to_string)
                .unwrap_or_else(|| "empty response".to_string());
            warn!(
                stage = stage.as_str(),
                status = result.status_code(),
                "{} call produced no usable text: {}",
                stage,
                diagnostic
            );
            logger.log(ConversationEvent::new(
                "stage_failure",
                serde_json::json!({
                    "stage": stage.as_str(),
                    "prompt": prompt,
                    "status": result.status_code(),
                    "diagnostic": diagnostic,
                }),
            ));
            Err(diagnostic)
        }
    }
}
