//! Error taxonomy for the account gateway
//!
//! Failures are classified into two kinds, [`ErrorKind::NotFound`] and
//! [`ErrorKind::Unexpected`], attached where the failure is produced
//! and preserved through wrapping. One failure may carry both kinds at
//! once. Callers test classification with the predicates rather than
//! matching on error text, which changes with wrapping.

use std::error::Error as StdError;
use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

/// Boxed transport-level failure cause.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Result type for gateway operations
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Classification kinds in the error taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The remote resource does not exist, or effectively does not
    NotFound,
    /// Any failure outside the expected protocol
    Unexpected,
}

/// Internal gateway step that produced a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Request URL construction
    BuildRequest,
    /// Transport invocation
    Execute,
    /// Reading the response body
    ReadBody,
    /// Decoding the account payload
    Decode,
}

impl Op {
    fn as_str(self) -> &'static str {
        match self {
            Op::BuildRequest => "build request",
            Op::Execute => "execute request",
            Op::ReadBody => "read response body",
            Op::Decode => "decode account payload",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced by the account gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The remote account does not exist (HTTP 404)
    #[error("account not found")]
    NotFound,

    /// A 200 response carried an empty value for the requested field.
    ///
    /// The server reported success but the field is effectively
    /// absent, so this is classified as both `NotFound` and
    /// `Unexpected` at once.
    #[error("account field `{field}` is empty")]
    MissingField {
        /// Name of the requested payload field
        field: &'static str,
    },

    /// The remote answered with a status outside the expected protocol
    #[error("unexpected status code {status}")]
    UnexpectedStatus {
        /// The literal status code, kept for diagnostics
        status: StatusCode,
    },

    /// An internal gateway step failed
    #[error("{op} failed")]
    Unexpected {
        /// The step that failed
        op: Op,
        /// Underlying cause
        #[source]
        source: BoxError,
    },
}

impl GatewayError {
    /// Classification kinds carried by this error.
    ///
    /// Classification is structural: it depends only on the variant,
    /// never on display text.
    #[must_use]
    pub fn kinds(&self) -> &'static [ErrorKind] {
        match self {
            GatewayError::NotFound => &[ErrorKind::NotFound],
            GatewayError::MissingField { .. } => &[ErrorKind::NotFound, ErrorKind::Unexpected],
            GatewayError::UnexpectedStatus { .. } | GatewayError::Unexpected { .. } => {
                &[ErrorKind::Unexpected]
            }
        }
    }

    /// True if this error is classified `NotFound`
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.kinds().contains(&ErrorKind::NotFound)
    }

    /// True if this error is classified `Unexpected`
    #[must_use]
    pub fn is_unexpected(&self) -> bool {
        self.kinds().contains(&ErrorKind::Unexpected)
    }
}

/// Map a response status code onto the taxonomy.
///
/// Total and deterministic: 404 is the only code classified
/// `NotFound`; every other non-200 code is `Unexpected` with the
/// literal code preserved in the display text.
pub(crate) fn classify(status: StatusCode) -> GatewayError {
    if status == StatusCode::NOT_FOUND {
        GatewayError::NotFound
    } else {
        GatewayError::UnexpectedStatus { status }
    }
}

fn chain_has(err: &(dyn StdError + 'static), kind: ErrorKind) -> bool {
    let mut current = Some(err);
    while let Some(e) = current {
        if let Some(gateway) = e.downcast_ref::<GatewayError>() {
            if gateway.kinds().contains(&kind) {
                return true;
            }
        }
        current = e.source();
    }
    false
}

/// True if any error in `err`'s source chain is classified `NotFound`.
///
/// Walks the chain via [`StdError::source`], so callers that wrapped a
/// [`GatewayError`] in their own error types can still test it.
pub fn is_not_found(err: &(dyn StdError + 'static)) -> bool {
    chain_has(err, ErrorKind::NotFound)
}

/// True if any error in `err`'s source chain is classified `Unexpected`.
pub fn is_unexpected(err: &(dyn StdError + 'static)) -> bool {
    chain_has(err, ErrorKind::Unexpected)
}
