//! deskgate-client: account gateway for the helpdesk platform API
//!
//! Resolves a tenant's canonical URL and subdomain from the remote
//! account endpoint. Failures are classified into a small taxonomy
//! (`NotFound`, `Unexpected`) that callers test with predicates
//! instead of matching on error text.
//!
//! The HTTP transport is an injected [`Requester`] capability, so
//! tests substitute a stub and production code passes a
//! `reqwest::Client` directly.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use deskgate_client::Gateway;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let gateway = Gateway::new(Arc::new(reqwest::Client::new()), "acme", "helpdesk");
//!
//! match gateway.url().await {
//!     Ok(url) => println!("account url: {url}"),
//!     Err(e) if e.is_not_found() => println!("no such account"),
//!     Err(e) => return Err(e.into()),
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod gateway;
pub mod transport;

pub use error::{BoxError, ErrorKind, GatewayError, Op, Result, is_not_found, is_unexpected};
pub use gateway::Gateway;
pub use transport::Requester;
