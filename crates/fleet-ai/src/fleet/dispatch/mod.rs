//! AI dispatch: prompt assembly plus the outbound completion boundary.
//!
//! The service never calls out before the credential pre-flight passes, and
//! the prompt embeds the freshly built compliance report so the model always
//! argues from the same analysis the operator can fetch directly.

pub mod gateway;
pub mod prompt;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use gateway::{
    CompletionGateway, CompletionRequest, GatewayError, GeminiClient, RetryPolicy,
    EMPTY_COMPLETION_FALLBACK,
};
pub use prompt::{DispatchPrompt, SYSTEM_INSTRUCTION};
pub use router::{dispatch_router, DispatchRequestBody};
pub use service::{DispatchError, DispatchOutcome, DispatchService};
