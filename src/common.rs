//! Common utilities for DynamoDB operations.
//!
//! This module provides the expression building shared by the scan parameters
//! and the table accessor.

/// Equality criteria and the filter expressions built from them.
pub mod criteria;

use aws_sdk_dynamodb::types;
use std::{collections, fmt::Write};

/// Placeholder token for an attribute name.
///
/// Placeholders only accept alphanumerics and `_`, so `_` is doubled and any
/// other byte becomes `_XX` (uppercase hex). The mapping is injective, so two
/// distinct keys never share a placeholder.
fn placeholder_token(key: &str) -> String {
    let mut token = String::with_capacity(key.len());
    for byte in key.bytes() {
        match byte {
            b'_' => token.push_str("__"),
            byte if byte.is_ascii_alphanumeric() => token.push(char::from(byte)),
            byte => {
                let _ = write!(token, "_{byte:02X}");
            }
        }
    }
    token
}

pub(crate) fn name_placeholder(key: &str) -> String {
    format!("#{}", placeholder_token(key))
}

pub(crate) fn value_placeholder(key: &str) -> String {
    format!(":{}", placeholder_token(key))
}

/// A filter expression together with the substitution maps it refers to.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpressionInput {
    /// The expression string, e.g. `#status = :status`.
    pub expression: String,
    /// Name placeholders mapped to the real attribute names.
    pub expression_attribute_names: collections::HashMap<String, String>,
    /// Value placeholders mapped to the values they stand for.
    pub expression_attribute_values: collections::HashMap<String, types::AttributeValue>,
}
