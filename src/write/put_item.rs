use crate::read;

use serde::Serialize;
use serde_dynamo::{Error, Result, to_item};

/// Parameters of a single put call, ready to hand to a [`crate::store::Store`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PutItemParams {
    /// The record converted to attribute values.
    pub item: read::scan::Item,
    /// The name of the table to write to.
    pub table_name: String,
}

/// Put item request.
///
/// Inserts the record, or overwrites the record sharing its key. The record's
/// shape is not validated here.
///
/// ```rust
/// use dynamodb_lambda_kit::write;
/// use serde_json::json;
///
/// let put_item = write::put_item::PutItem {
///     item: json!({"id": "1", "name": "John"}),
///     table_name: "users".to_string(),
/// };
/// let params: write::put_item::PutItemParams = put_item.try_into().unwrap();
/// assert_eq!(params.item.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PutItem<T> {
    /// The record to put into the table.
    pub item: T,
    /// The name of the table to write to.
    pub table_name: String,
}

impl<T: Serialize> TryFrom<PutItem<T>> for PutItemParams {
    type Error = Error;

    fn try_from(put_item: PutItem<T>) -> Result<Self> {
        let item = to_item(put_item.item)?;
        let operation = Self {
            item,
            table_name: put_item.table_name,
        };
        Ok(operation)
    }
}
