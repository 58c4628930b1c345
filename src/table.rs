//! Accessor for a single table.

use crate::{common, error, read, store, write};

use serde::{Serialize, de::DeserializeOwned};

/// A table name bound to a store.
///
/// The accessor holds no mutable state, so one instance can serve any number
/// of concurrent callers.
///
/// ```rust,no_run
/// use dynamodb_lambda_kit::{config, table};
/// use serde_json::{Value, json};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = config::ClientConfig::local().build_client().await;
/// let users = table::Table::new("users", client);
/// users.insert(json!({"id": "1", "status": "A"})).await?;
/// let _active = users
///     .query_all(Some([("status".to_string(), Value::from("A"))].into()), None)
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Table<S> {
    store: S,
    table_name: String,
}

impl<S: store::Store> Table<S> {
    /// Bind a table name to a store.
    pub fn new(table_name: impl Into<String>, store: S) -> Self {
        Self {
            store,
            table_name: table_name.into(),
        }
    }

    /// The store this table reads from and writes to.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The name of the bound table.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Build the scan parameters for the given criteria and field selection.
    pub fn build_query_params<T: Serialize>(
        &self,
        criteria: Option<common::criteria::Criteria<T>>,
        fields: Option<Vec<String>>,
    ) -> error::Result<read::scan::ScanParams> {
        let scan = read::scan::Scan {
            criteria,
            fields,
            table_name: self.table_name.clone(),
        };
        let params: read::scan::ScanParams = scan.try_into()?;
        Ok(params)
    }

    /// Issue exactly one scan call and return the raw page.
    ///
    /// The continuation token is left in the page for the caller to follow.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "dynamodb_lambda_kit.query",
            skip_all,
            fields(table = %self.table_name),
            err
        )
    )]
    pub async fn query<T: Serialize>(
        &self,
        criteria: Option<common::criteria::Criteria<T>>,
        fields: Option<Vec<String>>,
    ) -> error::Result<read::scan::ScanPage> {
        let params = self.build_query_params(criteria, fields)?;
        self.store.scan(params).await
    }

    /// Follow continuation tokens until the last page and return every record.
    ///
    /// Pages are requested one after the other. The first failing page aborts
    /// the whole fetch and its error is returned instead of the partial list.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "dynamodb_lambda_kit.query_all",
            skip_all,
            fields(table = %self.table_name),
            err
        )
    )]
    pub async fn query_all<T: Serialize>(
        &self,
        criteria: Option<common::criteria::Criteria<T>>,
        fields: Option<Vec<String>>,
    ) -> error::Result<Vec<read::scan::Item>> {
        let mut params = self.build_query_params(criteria, fields)?;
        let mut items = Vec::new();
        loop {
            let page = self.store.scan(params.clone()).await?;
            #[cfg(feature = "tracing")]
            tracing::debug!(
                count = page.items.len(),
                paginated = page.last_evaluated_key.is_some(),
                "scan page received"
            );
            items.extend(page.items);
            match page.last_evaluated_key {
                Some(last_evaluated_key) => params.exclusive_start_key = Some(last_evaluated_key),
                None => break,
            }
        }
        Ok(items)
    }

    /// [`Table::query_all`], deserializing every record into `R`.
    pub async fn query_all_as<R: DeserializeOwned, T: Serialize>(
        &self,
        criteria: Option<common::criteria::Criteria<T>>,
        fields: Option<Vec<String>>,
    ) -> error::Result<Vec<R>> {
        let items = self.query_all(criteria, fields).await?;
        let records: Vec<R> = serde_dynamo::from_items(items)?;
        Ok(records)
    }

    /// Insert the record, or overwrite the record sharing its key.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "dynamodb_lambda_kit.insert",
            skip_all,
            fields(table = %self.table_name),
            err
        )
    )]
    pub async fn insert<T: Serialize>(&self, record: T) -> error::Result<()> {
        let put_item = write::put_item::PutItem {
            item: record,
            table_name: self.table_name.clone(),
        };
        let params: write::put_item::PutItemParams = put_item.try_into()?;
        self.store.put(params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use aws_sdk_dynamodb::types;
    use indexmap::IndexMap;
    use serde::Deserialize;
    use serde_json::{Value, json};
    use std::{collections, sync};

    #[derive(Default)]
    struct MockStore {
        pages: sync::Mutex<collections::VecDeque<error::Result<read::scan::ScanPage>>>,
        puts: sync::Mutex<Vec<write::put_item::PutItemParams>>,
        scans: sync::Mutex<Vec<read::scan::ScanParams>>,
    }

    impl MockStore {
        fn with_pages(pages: Vec<error::Result<read::scan::ScanPage>>) -> Self {
            Self {
                pages: sync::Mutex::new(pages.into()),
                ..Default::default()
            }
        }

        fn scans(&self) -> Vec<read::scan::ScanParams> {
            self.scans.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl store::Store for MockStore {
        async fn scan(
            &self,
            params: read::scan::ScanParams,
        ) -> error::Result<read::scan::ScanPage> {
            self.scans.lock().unwrap().push(params);
            self.pages
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(read::scan::ScanPage::default()))
        }

        async fn put(&self, params: write::put_item::PutItemParams) -> error::Result<()> {
            self.puts.lock().unwrap().push(params);
            Ok(())
        }
    }

    fn item(id: &str) -> read::scan::Item {
        read::scan::Item::from([("id".to_string(), types::AttributeValue::S(id.to_string()))])
    }

    fn page(ids: &[&str], last_evaluated_key: Option<&str>) -> error::Result<read::scan::ScanPage> {
        Ok(read::scan::ScanPage {
            count: ids.len() as i32,
            items: ids.iter().map(|id| item(id)).collect(),
            last_evaluated_key: last_evaluated_key.map(item),
            scanned_count: ids.len() as i32,
        })
    }

    #[tokio::test]
    async fn test_query_returns_single_page() {
        let table = Table::new(
            "users",
            MockStore::with_pages(vec![page(&["1"], Some("1")), page(&["2"], None)]),
        );
        let actual = table.query::<Value>(None, None).await.unwrap();
        assert_eq!(actual, page(&["1"], Some("1")).unwrap());
        assert_eq!(table.store().scans().len(), 1);
    }

    #[tokio::test]
    async fn test_query_all_follows_continuation_tokens() {
        let table = Table::new(
            "users",
            MockStore::with_pages(vec![
                page(&["1", "2"], Some("2")),
                page(&["3"], Some("3")),
                page(&["4", "5"], None),
            ]),
        );
        let actual = table.query_all::<Value>(None, None).await.unwrap();
        let expected: Vec<_> = ["1", "2", "3", "4", "5"].into_iter().map(item).collect();
        assert_eq!(actual, expected);
        let start_keys: Vec<_> = table
            .store()
            .scans()
            .into_iter()
            .map(|scan| scan.exclusive_start_key)
            .collect();
        assert_eq!(start_keys, vec![None, Some(item("2")), Some(item("3"))]);
    }

    #[tokio::test]
    async fn test_query_all_aborts_on_failed_page() {
        let table = Table::new(
            "users",
            MockStore::with_pages(vec![
                page(&["1"], Some("1")),
                Err(error::Error::Store("throttled".into())),
                page(&["3"], None),
            ]),
        );
        let actual = table.query_all::<Value>(None, None).await;
        assert!(matches!(actual, Err(error::Error::Store(_))));
        assert_eq!(table.store().scans().len(), 2);
    }

    #[tokio::test]
    async fn test_query_all_passes_criteria_on_every_page() {
        let table = Table::new(
            "users",
            MockStore::with_pages(vec![page(&["1"], Some("1")), page(&[], None)]),
        );
        let criteria = IndexMap::from([("status".to_string(), json!("A"))]);
        table
            .query_all(Some(criteria), Some(vec!["id".to_string()]))
            .await
            .unwrap();
        for scan in table.store().scans() {
            assert_eq!(scan.filter_expression.as_deref(), Some("#status = :status"));
            assert_eq!(scan.attributes_to_get, Some(vec!["id".to_string()]));
            assert_eq!(scan.select, Some(types::Select::SpecificAttributes));
            assert_eq!(scan.table_name, "users");
        }
    }

    #[tokio::test]
    async fn test_query_all_as() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct User {
            id: String,
        }

        let table = Table::new("users", MockStore::with_pages(vec![page(&["1", "2"], None)]));
        let actual: Vec<User> = table.query_all_as::<User, Value>(None, None).await.unwrap();
        let expected = vec![
            User {
                id: "1".to_string(),
            },
            User {
                id: "2".to_string(),
            },
        ];
        assert_eq!(actual, expected);
    }

    #[tokio::test]
    async fn test_insert() {
        let table = Table::new("users", MockStore::default());
        table.insert(json!({"id": "1"})).await.unwrap();
        let puts = table.store().puts.lock().unwrap().clone();
        let expected = vec![write::put_item::PutItemParams {
            item: item("1"),
            table_name: "users".to_string(),
        }];
        assert_eq!(puts, expected);
    }

    #[tokio::test]
    async fn test_shared_store() {
        let store = sync::Arc::new(MockStore::default());
        let users = Table::new("users", sync::Arc::clone(&store));
        let sessions = Table::new("sessions", &*store);
        users.insert(json!({"id": "1"})).await.unwrap();
        sessions.insert(json!({"id": "2"})).await.unwrap();
        let tables: Vec<_> = store
            .puts
            .lock()
            .unwrap()
            .iter()
            .map(|put| put.table_name.clone())
            .collect();
        assert_eq!(tables, vec!["users".to_string(), "sessions".to_string()]);
    }
}
