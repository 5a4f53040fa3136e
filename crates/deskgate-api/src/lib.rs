//! deskgate-api: Shared API types and schemas
//!
//! Contains the wire-format response types returned by the helpdesk
//! platform's REST API, used by the client gateway.

pub mod responses;

pub use responses::AccountResponse;
