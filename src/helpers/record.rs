use indexmap::IndexMap;
use serde_json::{Map, Value};

/// A flat record.
pub type Record = Map<String, Value>;

/// Keys removed by [`clean_records`] when redacting credentials.
pub const DEFAULT_REDACTED_KEYS: &[&str] = &["password"];

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(string) => string.is_empty() || string == " ",
        _ => false,
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(string) => string.clone(),
        other => other.to_string(),
    }
}

/// Copy the record without the fields holding `""`, `" "` or `null`.
///
/// Only the top level is inspected; `0` and `false` are kept.
///
/// ```rust
/// use dynamodb_lambda_kit::helpers::record;
/// use serde_json::json;
///
/// let record = json!({"a": "", "b": " ", "c": null, "d": 0, "e": "x"});
/// let cleaned = record::remove_empty_fields(record.as_object().unwrap());
/// assert_eq!(serde_json::Value::Object(cleaned), json!({"d": 0, "e": "x"}));
/// ```
pub fn remove_empty_fields(record: &Record) -> Record {
    record
        .iter()
        .filter(|(_, value)| !is_empty_value(value))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Copy the value, stripping empty fields from every object it contains.
///
/// Objects nested in objects or in arrays are cleaned as well; array elements
/// themselves are never dropped.
pub fn remove_empty_fields_deep(value: &Value) -> Value {
    match value {
        Value::Object(object) => Value::Object(
            object
                .iter()
                .filter(|(_, value)| !is_empty_value(value))
                .map(|(key, value)| (key.clone(), remove_empty_fields_deep(value)))
                .collect(),
        ),
        Value::Array(array) => Value::Array(array.iter().map(remove_empty_fields_deep).collect()),
        other => other.clone(),
    }
}

/// Copy the record without the named keys.
pub fn remove_keys<K: AsRef<str>>(record: &Record, keys_to_remove: &[K]) -> Record {
    record
        .iter()
        .filter(|(key, _)| {
            !keys_to_remove
                .iter()
                .any(|key_to_remove| key_to_remove.as_ref() == key.as_str())
        })
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// [`remove_keys`] applied to every record.
///
/// Pass [`DEFAULT_REDACTED_KEYS`] to strip passwords before returning records.
pub fn clean_records<K: AsRef<str>>(records: &[Record], keys_to_remove: &[K]) -> Vec<Record> {
    records
        .iter()
        .map(|record| remove_keys(record, keys_to_remove))
        .collect()
}

/// Describe, per field of `subject`, how it differs from `compare`.
///
/// Fields only present in `compare` are not reported.
///
/// ```rust
/// use dynamodb_lambda_kit::helpers::record;
/// use serde_json::json;
///
/// let subject = json!({"a": 1, "b": 2});
/// let compare = json!({"a": 1, "b": 3});
/// let lines = record::diff_fields(subject.as_object().unwrap(), compare.as_object().unwrap());
/// assert_eq!(
///     lines,
///     vec![
///         "NO_CHANGE: Field `a` was not changed".to_string(),
///         "USER_CHANGE: Field `b` was changed from \"3\" to \"2\"".to_string(),
///     ]
/// );
/// ```
pub fn diff_fields(subject: &Record, compare: &Record) -> Vec<String> {
    subject
        .iter()
        .map(|(key, value)| match compare.get(key) {
            None => format!(
                "NEW_FIELD: Field `{key}` was not in subject, so \"{}\" is a new value",
                display_value(value)
            ),
            Some(previous) if previous != value => format!(
                "USER_CHANGE: Field `{key}` was changed from \"{}\" to \"{}\"",
                display_value(previous),
                display_value(value)
            ),
            Some(_) => format!("NO_CHANGE: Field `{key}` was not changed"),
        })
        .collect()
}

/// Index the items by the value of one of their fields.
///
/// Later items replace earlier ones sharing the same value; items without the
/// field are left out.
pub fn make_collection<I>(items: I, key_field: &str) -> IndexMap<String, Record>
where
    I: IntoIterator<Item = Record>,
{
    items
        .into_iter()
        .filter_map(|item| {
            let key = display_value(item.get(key_field)?);
            Some((key, item))
        })
        .collect()
}

/// Concatenate one level of nested sequences.
pub fn flatten<T, I>(nested: I) -> Vec<T>
where
    I: IntoIterator,
    I::Item: IntoIterator<Item = T>,
{
    nested.into_iter().flatten().collect()
}
