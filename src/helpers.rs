//! Stateless helpers for Lambda handlers.
//!
//! Records are plain JSON objects ([`serde_json::Map`]) so the helpers work on
//! request bodies and on records read back from the table alike.

/// Authorizer decision documents.
pub mod auth;

/// API Gateway event parsing and response envelopes.
pub mod http;

/// Short random identifiers.
pub mod id;

/// Record cleaning, redaction and comparison.
pub mod record;

/// Expiration checks and timers.
pub mod time;
