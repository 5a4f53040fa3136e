//! Account gateway for the helpdesk platform API

use std::fmt;
use std::sync::Arc;

use reqwest::{Method, Request, StatusCode};
use tracing::{debug, instrument, warn};
use url::Url;

use deskgate_api::AccountResponse;

use crate::error::{GatewayError, Op, Result, classify};
use crate::transport::Requester;

/// Client gateway resolving account metadata for one tenant.
///
/// Holds the injected transport plus the tenant identity (subdomain
/// and host). Immutable after construction: concurrent calls share no
/// per-call state, so the gateway is as thread-safe as its transport.
#[derive(Clone)]
pub struct Gateway {
    transport: Arc<dyn Requester>,
    subdomain: String,
    host: String,
}

impl Gateway {
    /// Create a new gateway.
    ///
    /// `subdomain` and `host` are taken as-is; empty or malformed
    /// values only surface later as a request-construction failure or
    /// a remote 404.
    ///
    /// # Example
    /// ```no_run
    /// use std::sync::Arc;
    /// use deskgate_client::Gateway;
    ///
    /// let gateway = Gateway::new(Arc::new(reqwest::Client::new()), "acme", "helpdesk");
    /// ```
    #[must_use]
    pub fn new(
        transport: Arc<dyn Requester>,
        subdomain: impl Into<String>,
        host: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            subdomain: subdomain.into(),
            host: host.into(),
        }
    }

    /// Fetch the account's canonical URL.
    ///
    /// # Errors
    /// Propagates classified fetch failures; a 200 response with an
    /// empty `url` field fails as both not-found and unexpected.
    pub async fn url(&self) -> Result<String> {
        let account = self.account().await?;

        if account.url.is_empty() {
            return Err(GatewayError::MissingField { field: "url" });
        }

        Ok(account.url)
    }

    /// Fetch the account's canonical subdomain.
    ///
    /// # Errors
    /// Propagates classified fetch failures; a 200 response with an
    /// empty `subdomain` field fails as both not-found and unexpected.
    pub async fn subdomain(&self) -> Result<String> {
        let account = self.account().await?;

        if account.subdomain.is_empty() {
            return Err(GatewayError::MissingField { field: "subdomain" });
        }

        Ok(account.subdomain)
    }

    /// Build the account endpoint URL from the tenant identity.
    fn account_url(&self) -> Result<Url> {
        let raw = format!(
            "http://{}.{}.com/api/v2/account.json",
            self.subdomain, self.host
        );
        Url::parse(&raw).map_err(|e| GatewayError::Unexpected {
            op: Op::BuildRequest,
            source: e.into(),
        })
    }

    /// Fetch and decode the account payload.
    ///
    /// One transport invocation per call, no retries: the first
    /// failure terminates the operation with a classified error.
    #[instrument(skip(self), level = "debug")]
    async fn account(&self) -> Result<AccountResponse> {
        let url = self.account_url()?;

        debug!(%url, "fetching account metadata");
        let request = Request::new(Method::GET, url);

        let response = self.transport.execute(request).await.map_err(|e| {
            warn!(error = %e, "transport failure");
            GatewayError::Unexpected {
                op: Op::Execute,
                source: e,
            }
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(%status, "account endpoint returned non-200 status");
            return Err(classify(status));
        }

        let body = response.bytes().await.map_err(|e| GatewayError::Unexpected {
            op: Op::ReadBody,
            source: e.into(),
        })?;

        serde_json::from_slice(&body).map_err(|e| GatewayError::Unexpected {
            op: Op::Decode,
            source: e.into(),
        })
    }
}

impl fmt::Debug for Gateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gateway")
            .field("subdomain", &self.subdomain)
            .field("host", &self.host)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway(subdomain: &str, host: &str) -> Gateway {
        Gateway::new(Arc::new(reqwest::Client::new()), subdomain, host)
    }

    #[test]
    fn account_url_shape() {
        let url = gateway("acme", "helpdesk").account_url().unwrap();
        assert_eq!(url.as_str(), "http://acme.helpdesk.com/api/v2/account.json");
    }

    #[test]
    fn malformed_tenant_identity_fails_at_construction_time() {
        let err = gateway("no spaces", "helpdesk").account_url().unwrap_err();
        assert!(err.is_unexpected());
        assert!(!err.is_not_found());
        assert!(matches!(
            err,
            GatewayError::Unexpected {
                op: Op::BuildRequest,
                ..
            }
        ));
    }
}
