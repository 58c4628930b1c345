use crate::error;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections;

/// Header carrying a method override.
pub const METHOD_OVERRIDE_HEADER: &str = "X-Method";

/// Query string parameter carrying the comma separated field selection.
pub const FIELDS_PARAM: &str = "fields";

/// Response envelope returned to API Gateway.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpResponse {
    /// The JSON serialized body.
    pub body: String,
    /// Response headers, CORS headers included.
    pub headers: IndexMap<String, String>,
    /// The HTTP status code.
    pub status_code: u16,
}

fn cors_headers() -> IndexMap<String, String> {
    IndexMap::from([
        ("Content-Type".to_string(), "application/json".to_string()),
        ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
        (
            "Access-Control-Allow-Credentials".to_string(),
            "true".to_string(),
        ),
    ])
}

/// Build a JSON response with CORS headers.
///
/// Caller headers are applied after the CORS headers and win on collision.
///
/// ```rust
/// use dynamodb_lambda_kit::helpers::http;
/// use serde_json::json;
///
/// let response = http::build_http_response(404, &json!({"error": "x"}), None).unwrap();
/// assert_eq!(response.status_code, 404);
/// assert_eq!(response.body, r#"{"error":"x"}"#);
/// assert_eq!(response.headers["Access-Control-Allow-Origin"], "*");
/// ```
pub fn build_http_response<B: Serialize + ?Sized>(
    status_code: u16,
    body: &B,
    headers: Option<IndexMap<String, String>>,
) -> error::Result<HttpResponse> {
    let mut merged = cors_headers();
    merged.extend(headers.unwrap_or_default());
    let response = HttpResponse {
        body: serde_json::to_string(body)?,
        headers: merged,
        status_code,
    };
    Ok(response)
}

/// The request context of a proxy event.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    /// The method reported by the gateway.
    pub http_method: String,
}

/// The parts of an API Gateway proxy event the handlers look at.
///
/// Unknown fields of the gateway payload are ignored.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpEvent {
    /// Request headers; the gateway sends `null` when there are none.
    #[serde(default)]
    pub headers: Option<collections::HashMap<String, String>>,
    /// Query string parameters; the gateway sends `null` when there are none.
    #[serde(default)]
    pub query_string_parameters: Option<IndexMap<String, String>>,
    /// The request context.
    pub request_context: RequestContext,
}

/// The method override header if set, the gateway reported method otherwise.
pub fn parse_http_method(event: &HttpEvent) -> &str {
    event
        .headers
        .as_ref()
        .and_then(|headers| headers.get(METHOD_OVERRIDE_HEADER))
        .filter(|method| !method.is_empty())
        .unwrap_or(&event.request_context.http_method)
}

/// The query string parameters without the field selection, `None` if nothing is left.
pub fn parse_query_params(event: &HttpEvent) -> Option<IndexMap<String, String>> {
    let params: IndexMap<_, _> = event
        .query_string_parameters
        .as_ref()?
        .iter()
        .filter(|(key, _)| key.as_str() != FIELDS_PARAM)
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    (!params.is_empty()).then_some(params)
}

/// The comma separated field selection, `None` if absent or empty.
pub fn parse_fields_param(event: &HttpEvent) -> Option<Vec<String>> {
    let fields = event.query_string_parameters.as_ref()?.get(FIELDS_PARAM)?;
    if fields.is_empty() {
        return None;
    }
    Some(fields.split(',').map(str::to_string).collect())
}
