//! Completion gateway port
//!
//! Defines the interface for calling the external text-completion service.

use async_trait::async_trait;
use stagewise_domain::{CompletionRequest, CompletionResult};

/// Gateway to the text-completion service
///
/// This port defines how the application layer talks to the completion
/// service. Implementations (adapters) live in the infrastructure layer;
/// tests substitute scripted stubs.
///
/// `complete` is infallible by contract: transport errors, timeouts, and
/// non-success responses are reported as [`CompletionResult::Failure`].
/// One call means at most one outbound request; implementations do not
/// retry.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Send one system + user prompt pair and return the outcome
    async fn complete(&self, request: &CompletionRequest) -> CompletionResult;
}
