use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Policy language version of generated documents.
pub const POLICY_VERSION: &str = "2012-10-17";

/// Action granted or denied by generated statements.
pub const INVOKE_ACTION: &str = "execute-api:Invoke";

/// Whether a statement grants or denies the action.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Effect {
    /// Grant the action.
    Allow,
    /// Deny the action.
    Deny,
}

/// A single policy statement.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyStatement {
    /// The action the statement applies to.
    pub action: String,
    /// Whether the action is granted or denied.
    pub effect: Effect,
    /// The resource ARN the statement applies to.
    pub resource: String,
}

/// An IAM policy document.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyDocument {
    /// The statements of the policy.
    pub statement: Vec<PolicyStatement>,
    /// The policy language version.
    pub version: String,
}

/// Custom properties handed to the integration alongside the decision.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct AuthContext {
    /// The user's associate identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associate_id: Option<Value>,
    /// The user's email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Value>,
    /// The user's current session identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_session: Option<Value>,
    /// The user's type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_type: Option<Value>,
}

impl From<&Map<String, Value>> for AuthContext {
    fn from(user: &Map<String, Value>) -> Self {
        Self {
            associate_id: user.get("associate_id").cloned(),
            email: user.get("email").cloned(),
            user_session: user.get("current_session").cloned(),
            user_type: user.get("user_type").cloned(),
        }
    }
}

/// The response of a Lambda authorizer.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthDecision {
    /// User properties exposed to the integration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<AuthContext>,
    /// The policy applied to the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_document: Option<PolicyDocument>,
    /// The identifier of the caller.
    pub principal_id: String,
}

/// Build an authorizer decision.
///
/// A policy is attached only when both `effect` and `resource` are given; a
/// context only when `user` is given.
///
/// ```rust
/// use dynamodb_lambda_kit::helpers::auth;
/// use serde_json::json;
///
/// let decision = auth::build_auth_decision("user", Some(auth::Effect::Allow), Some("arn:a"), None);
/// assert_eq!(
///     serde_json::to_value(&decision).unwrap(),
///     json!({
///         "principalId": "user",
///         "policyDocument": {
///             "Version": "2012-10-17",
///             "Statement": [{"Action": "execute-api:Invoke", "Effect": "Allow", "Resource": "arn:a"}]
///         }
///     })
/// );
/// ```
pub fn build_auth_decision(
    principal_id: &str,
    effect: Option<Effect>,
    resource: Option<&str>,
    user: Option<&Map<String, Value>>,
) -> AuthDecision {
    let policy_document = effect.zip(resource).map(|(effect, resource)| PolicyDocument {
        statement: vec![PolicyStatement {
            action: INVOKE_ACTION.to_string(),
            effect,
            resource: resource.to_string(),
        }],
        version: POLICY_VERSION.to_string(),
    });
    AuthDecision {
        context: user.map(AuthContext::from),
        policy_document,
        principal_id: principal_id.to_string(),
    }
}
