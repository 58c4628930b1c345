//! The store capability a [`crate::table::Table`] is bound to.
//!
//! The trait stays as close as possible to the two SDK calls it wraps so the
//! real client can be swapped for an in-memory store in tests.

use crate::{error, read, write};

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use std::sync;

/// Asynchronous scan and put over a DynamoDB-shaped store.
#[async_trait]
pub trait Store: Send + Sync {
    /// Run one scan call and return its page.
    async fn scan(&self, params: read::scan::ScanParams) -> error::Result<read::scan::ScanPage>;

    /// Insert the record, or overwrite the record sharing its key.
    async fn put(&self, params: write::put_item::PutItemParams) -> error::Result<()>;
}

#[async_trait]
impl Store for Client {
    async fn scan(&self, params: read::scan::ScanParams) -> error::Result<read::scan::ScanPage> {
        let output = Client::scan(self)
            .set_attributes_to_get(params.attributes_to_get)
            .set_consistent_read(params.consistent_read)
            .set_exclusive_start_key(params.exclusive_start_key)
            .set_expression_attribute_names(params.expression_attribute_names)
            .set_expression_attribute_values(params.expression_attribute_values)
            .set_filter_expression(params.filter_expression)
            .set_limit(params.limit)
            .set_return_consumed_capacity(params.return_consumed_capacity)
            .set_select(params.select)
            .table_name(params.table_name)
            .send()
            .await?;
        Ok(output.into())
    }

    async fn put(&self, params: write::put_item::PutItemParams) -> error::Result<()> {
        Client::put_item(self)
            .set_item(Some(params.item))
            .table_name(params.table_name)
            .send()
            .await?;
        Ok(())
    }
}

#[async_trait]
impl<S: Store + ?Sized> Store for &S {
    async fn scan(&self, params: read::scan::ScanParams) -> error::Result<read::scan::ScanPage> {
        (**self).scan(params).await
    }

    async fn put(&self, params: write::put_item::PutItemParams) -> error::Result<()> {
        (**self).put(params).await
    }
}

#[async_trait]
impl<S: Store + ?Sized> Store for sync::Arc<S> {
    async fn scan(&self, params: read::scan::ScanParams) -> error::Result<read::scan::ScanPage> {
        (**self).scan(params).await
    }

    async fn put(&self, params: write::put_item::PutItemParams) -> error::Result<()> {
        (**self).put(params).await
    }
}
