//! Injectable HTTP transport capability

use async_trait::async_trait;
use reqwest::{Request, Response};

use crate::error::BoxError;

/// Capability performing exactly one HTTP round trip.
///
/// The gateway never retries, pools, or caches through this trait;
/// connection reuse, deadlines, and TLS belong to the implementation.
/// Implementations must be shareable across concurrent callers.
#[async_trait]
pub trait Requester: Send + Sync {
    /// Execute one request and return its response, or the
    /// transport-level failure (DNS, connect, TLS, timeout).
    async fn execute(&self, request: Request) -> Result<Response, BoxError>;
}

#[async_trait]
impl Requester for reqwest::Client {
    async fn execute(&self, request: Request) -> Result<Response, BoxError> {
        reqwest::Client::execute(self, request)
            .await
            .map_err(Into::into)
    }
}
