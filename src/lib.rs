#![deny(missing_docs)]
#![deny(warnings)]

//! # DynamoDB Lambda Kit
//!
//! Helpers for AWS Lambda functions that read and write a single DynamoDB table and
//! answer API Gateway events.
//!
//! ## Overview
//!
//! This library is glue between a handler and two managed services:
//! - A table accessor that turns flat equality criteria into scan parameters,
//!   follows scan pagination and puts records
//! - Stateless helpers for response envelopes, authorizer decisions, record
//!   cleaning, identifiers, expiry checks and event parsing
//! - An injected logger and an explicit local/managed client configuration
//!
//! ## Quick Example
//!
//! ```no_run
//! use dynamodb_lambda_kit::{config, helpers, table};
//! use serde_json::{Value, json};
//!
//! # async fn example(event: helpers::http::HttpEvent) -> Result<(), Box<dyn std::error::Error>> {
//! let client = config::ClientConfig::Managed.build_client().await;
//! let users = table::Table::new("users", client);
//! // The crate builds: "#status = :status" with both substitution maps
//! let criteria = helpers::http::parse_query_params(&event)
//!     .map(|params| params.into_iter().map(|(key, value)| (key, Value::from(value))).collect());
//! let fields = helpers::http::parse_fields_param(&event);
//! let records: Vec<helpers::record::Record> = users.query_all_as(criteria, fields).await?;
//! let records = helpers::record::clean_records(&records, helpers::record::DEFAULT_REDACTED_KEYS);
//! let _response = helpers::http::build_http_response(200, &json!({"users": records}), None)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`mod@common`] - Equality criteria and expression building
//! - [`mod@read`] - Scan parameters and pages
//! - [`mod@write`] - Put parameters
//! - [`mod@store`] - The store capability and its SDK client implementation
//! - [`mod@table`] - The table accessor
//! - [`mod@helpers`] - Stateless handler helpers
//! - [`mod@config`] - Client configuration
//! - [`mod@log`] - Injected logging

/// Common utilities for building filter expressions.
pub mod common;

/// Store client configuration.
pub mod config;

/// Error type shared by the whole crate.
pub mod error;

/// Stateless helpers for Lambda handlers.
pub mod helpers;

/// Injected logging.
pub mod log;

/// Read parameters for retrieving data from DynamoDB tables.
pub mod read;

/// The store capability tables are bound to.
pub mod store;

/// Accessor bound to one table.
pub mod table;

/// Write parameters for modifying data in DynamoDB tables.
pub mod write;

pub use error::{Error, Result};
