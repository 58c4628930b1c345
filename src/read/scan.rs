use crate::common;

use aws_sdk_dynamodb::{operation, types};
use serde::Serialize;
use serde_dynamo::{Error, Result};
use std::collections;

/// Page size used when scanning without criteria.
pub const MATCH_ALL_LIMIT: i32 = 300;

/// A record as stored in DynamoDB.
pub type Item = collections::HashMap<String, types::AttributeValue>;

/// Parameters of a single scan call, ready to hand to a [`crate::store::Store`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScanParams {
    /// The legacy attribute list restricting the returned attributes.
    pub attributes_to_get: Option<Vec<String>>,
    /// Whether to use a strongly consistent read.
    pub consistent_read: Option<bool>,
    /// Continuation token of the previous page.
    pub exclusive_start_key: Option<Item>,
    /// Name placeholders used by the filter expression.
    pub expression_attribute_names: Option<collections::HashMap<String, String>>,
    /// Value placeholders used by the filter expression.
    pub expression_attribute_values: Option<collections::HashMap<String, types::AttributeValue>>,
    /// Conjunction of equality tests applied to every scanned record.
    pub filter_expression: Option<String>,
    /// Maximum number of records evaluated per page.
    pub limit: Option<i32>,
    /// Whether to report consumed capacity.
    pub return_consumed_capacity: Option<types::ReturnConsumedCapacity>,
    /// Which attributes to return.
    pub select: Option<types::Select>,
    /// The name of the table to scan.
    pub table_name: String,
}

/// Scan request over one table.
///
/// ```rust
/// use aws_sdk_dynamodb::types;
/// use dynamodb_lambda_kit::{common, read};
///
/// let scan = read::scan::Scan {
///     table_name: "users".to_string(),
///     criteria: Some(common::criteria::Criteria::from([("status".to_string(), "A")])),
///     fields: Some(vec!["id".to_string(), "status".to_string()]),
/// };
/// let params: read::scan::ScanParams = scan.try_into().unwrap();
/// assert_eq!(params.select, Some(types::Select::SpecificAttributes));
/// assert_eq!(params.filter_expression.as_deref(), Some("#status = :status"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scan<T> {
    /// Equality criteria; `None` or empty criteria match every record.
    pub criteria: Option<common::criteria::Criteria<T>>,
    /// Attribute names to return; `None` returns every attribute.
    pub fields: Option<Vec<String>>,
    /// The name of the table to scan.
    pub table_name: String,
}

impl<T: Serialize> TryFrom<Scan<T>> for ScanParams {
    type Error = Error;

    fn try_from(scan: Scan<T>) -> Result<Self> {
        let criteria = scan.criteria.filter(|criteria| !criteria.is_empty());
        let mut params = match criteria {
            Some(criteria) => {
                let filter: common::ExpressionInput = criteria.try_into()?;
                Self {
                    expression_attribute_names: Some(filter.expression_attribute_names),
                    expression_attribute_values: Some(filter.expression_attribute_values),
                    filter_expression: Some(filter.expression),
                    table_name: scan.table_name,
                    ..Default::default()
                }
            }
            None => Self {
                consistent_read: Some(false),
                limit: Some(MATCH_ALL_LIMIT),
                return_consumed_capacity: Some(types::ReturnConsumedCapacity::None),
                select: Some(types::Select::AllAttributes),
                table_name: scan.table_name,
                ..Default::default()
            },
        };
        if let Some(fields) = scan.fields {
            params.select = Some(types::Select::SpecificAttributes);
            params.attributes_to_get = Some(fields);
        }
        Ok(params)
    }
}

/// One page of scan results.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScanPage {
    /// Number of records in this page after filtering.
    pub count: i32,
    /// The records of this page, in store order.
    pub items: Vec<Item>,
    /// Continuation token; `None` on the last page.
    pub last_evaluated_key: Option<Item>,
    /// Number of records evaluated before filtering.
    pub scanned_count: i32,
}

impl From<operation::scan::ScanOutput> for ScanPage {
    fn from(output: operation::scan::ScanOutput) -> Self {
        Self {
            count: output.count,
            items: output.items.unwrap_or_default(),
            last_evaluated_key: output.last_evaluated_key,
            scanned_count: output.scanned_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use indexmap::IndexMap;
    use rstest::rstest;
    use serde_json::Value;

    #[rstest]
    #[case::match_all(
        Scan {
            table_name: "a".to_string(),
            ..Default::default()
        },
        ScanParams {
            consistent_read: Some(false),
            limit: Some(300),
            return_consumed_capacity: Some(
                types::ReturnConsumedCapacity::None
            ),
            select: Some(
                types::Select::AllAttributes
            ),
            table_name: "a".to_string(),
            ..Default::default()
        }
    )]
    #[case::empty_criteria(
        Scan {
            criteria: Some(IndexMap::new()),
            table_name: "a".to_string(),
            ..Default::default()
        },
        ScanParams {
            consistent_read: Some(false),
            limit: Some(300),
            return_consumed_capacity: Some(
                types::ReturnConsumedCapacity::None
            ),
            select: Some(
                types::Select::AllAttributes
            ),
            table_name: "a".to_string(),
            ..Default::default()
        }
    )]
    #[case::match_all_with_fields(
        Scan {
            fields: Some(
                vec![
                    "b".to_string(),
                ]
            ),
            table_name: "a".to_string(),
            ..Default::default()
        },
        ScanParams {
            attributes_to_get: Some(
                vec![
                    "b".to_string(),
                ]
            ),
            consistent_read: Some(false),
            limit: Some(300),
            return_consumed_capacity: Some(
                types::ReturnConsumedCapacity::None
            ),
            select: Some(
                types::Select::SpecificAttributes
            ),
            table_name: "a".to_string(),
            ..Default::default()
        }
    )]
    #[case::criteria(
        Scan {
            criteria: Some(
                IndexMap::from(
                    [
                        ("b".to_string(), Value::String("c".to_string())),
                    ]
                )
            ),
            table_name: "a".to_string(),
            ..Default::default()
        },
        ScanParams {
            expression_attribute_names: Some(
                collections::HashMap::from(
                    [
                        ("#b".to_string(), "b".to_string()),
                    ]
                )
            ),
            expression_attribute_values: Some(
                collections::HashMap::from(
                    [
                        (
                            ":b".to_string(),
                            types::AttributeValue::S(
                                "c".to_string()
                            )
                        ),
                    ]
                )
            ),
            filter_expression: Some(
                "#b = :b".to_string()
            ),
            table_name: "a".to_string(),
            ..Default::default()
        }
    )]
    #[case::criteria_with_fields(
        Scan {
            criteria: Some(
                IndexMap::from(
                    [
                        ("status".to_string(), Value::String("A".to_string())),
                    ]
                )
            ),
            fields: Some(
                vec![
                    "id".to_string(),
                    "status".to_string(),
                ]
            ),
            table_name: "a".to_string(),
        },
        ScanParams {
            attributes_to_get: Some(
                vec![
                    "id".to_string(),
                    "status".to_string(),
                ]
            ),
            expression_attribute_names: Some(
                collections::HashMap::from(
                    [
                        ("#status".to_string(), "status".to_string()),
                    ]
                )
            ),
            expression_attribute_values: Some(
                collections::HashMap::from(
                    [
                        (
                            ":status".to_string(),
                            types::AttributeValue::S(
                                "A".to_string()
                            )
                        ),
                    ]
                )
            ),
            filter_expression: Some(
                "#status = :status".to_string()
            ),
            select: Some(
                types::Select::SpecificAttributes
            ),
            table_name: "a".to_string(),
            ..Default::default()
        }
    )]
    fn test_scan(#[case] args: Scan<Value>, #[case] expected: ScanParams) {
        let actual: ScanParams = args.try_into().unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_scan_page_from_output() {
        let item = Item::from([("a".to_string(), types::AttributeValue::S("b".to_string()))]);
        let output = operation::scan::ScanOutput::builder()
            .items(item.clone())
            .count(1)
            .scanned_count(4)
            .set_last_evaluated_key(Some(item.clone()))
            .build();
        let expected = ScanPage {
            count: 1,
            items: vec![item.clone()],
            last_evaluated_key: Some(item),
            scanned_count: 4,
        };
        assert_eq!(ScanPage::from(output), expected);
    }

    #[test]
    fn test_scan_page_without_items() {
        let output = operation::scan::ScanOutput::builder().build();
        assert_eq!(ScanPage::from(output), ScanPage::default());
    }
}
