//! Transport collaborator interface.
//!
//! The adapter never talks HTTP directly; it hands a fully built [`Request`]
//! to this trait and interprets whatever comes back. Tests substitute an
//! in-process implementation returning canned bodies.

use async_trait::async_trait;
use common_utils::{request::Request, CustomResult};
use domain_types::{errors::ApiClientError, router_response_types::Response};

#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Executes one HTTP exchange. No retries, no redirects; errors map to
    /// [`ApiClientError`] and propagate unchanged.
    async fn send(&self, request: Request) -> CustomResult<Response, ApiClientError>;
}
