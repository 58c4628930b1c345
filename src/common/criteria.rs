use crate::common;

use aws_sdk_dynamodb::types;
use indexmap::IndexMap;
use serde::Serialize;
use serde_dynamo::{Error, Result, to_attribute_value};
use std::collections;

/// Operator joining the equality clauses of a filter expression.
pub const AND: &str = " and ";

/// Flat equality criteria: every entry must match for a record to be returned.
///
/// Iteration order is insertion order, which is also the clause order of the
/// generated filter expression. Keys with characters placeholders cannot hold,
/// such as `first-name`, get an escaped placeholder (`#first_2Dname`); the
/// substitution maps still carry the original key.
///
/// ```rust
/// use dynamodb_lambda_kit::common::criteria;
///
/// let criteria = criteria::Criteria::from([("status".to_string(), "active")]);
/// assert_eq!(criteria::filter_expression(&criteria), "#status = :status");
/// ```
pub type Criteria<T> = IndexMap<String, T>;

/// Build the conjunction of `#key = :key` clauses, one per criteria key.
///
/// Returns an empty string for empty criteria.
pub fn filter_expression<T>(criteria: &Criteria<T>) -> String {
    criteria
        .keys()
        .map(|key| {
            format!(
                "{} = {}",
                common::name_placeholder(key),
                common::value_placeholder(key)
            )
        })
        .collect::<Vec<_>>()
        .join(AND)
}

/// Map each `#key` name placeholder to its attribute name.
pub fn expression_attribute_names<'a, I>(keys: I) -> collections::HashMap<String, String>
where
    I: IntoIterator<Item = &'a String>,
{
    keys.into_iter()
        .map(|key| (common::name_placeholder(key), key.clone()))
        .collect()
}

/// Map each `:key` value placeholder to the attribute value it must equal.
pub fn expression_attribute_values<T: Serialize>(
    criteria: Criteria<T>,
) -> Result<collections::HashMap<String, types::AttributeValue>> {
    let mut expression_attribute_values = collections::HashMap::with_capacity(criteria.len());
    for (key, value) in criteria {
        let value = to_attribute_value(value)?;
        expression_attribute_values.insert(common::value_placeholder(&key), value);
    }
    Ok(expression_attribute_values)
}

impl<T: Serialize> TryFrom<Criteria<T>> for common::ExpressionInput {
    type Error = Error;

    fn try_from(criteria: Criteria<T>) -> Result<Self> {
        let expression = filter_expression(&criteria);
        let expression_attribute_names = expression_attribute_names(criteria.keys());
        let expression_attribute_values = expression_attribute_values(criteria)?;
        let operation = Self {
            expression,
            expression_attribute_names,
            expression_attribute_values,
        };
        Ok(operation)
    }
}
