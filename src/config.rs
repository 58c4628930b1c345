//! Store client configuration.
//!
//! Whether the client talks to a local emulator or to the managed service is
//! an explicit choice of the caller; nothing here reads the environment.

use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::{
    Client,
    config::{Credentials, Region},
};
use serde::Deserialize;

/// Endpoint of the local DynamoDB emulator.
pub const LOCAL_ENDPOINT: &str = "http://localhost:8000";

/// Region reported to the local DynamoDB emulator.
pub const LOCAL_REGION: &str = "localhost";

/// Static credentials accepted by a local emulator.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq)]
pub struct LocalCredentials {
    /// The access key id.
    pub access_key_id: String,
    /// The secret access key.
    pub secret_access_key: String,
}

impl Default for LocalCredentials {
    fn default() -> Self {
        Self {
            access_key_id: "DEFAULT_ACCESS_KEY".to_string(),
            secret_access_key: "DEFAULT_SECRET".to_string(),
        }
    }
}

/// Which DynamoDB endpoint a client is built for.
///
/// ```rust
/// use dynamodb_lambda_kit::config;
///
/// let config: config::ClientConfig = serde_json::from_str(r#"{"mode": "managed"}"#).unwrap();
/// assert_eq!(config, config::ClientConfig::Managed);
/// ```
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum ClientConfig {
    /// A local emulator reached through a fixed endpoint with static credentials.
    Local {
        /// The credentials presented to the emulator.
        #[serde(default)]
        credentials: LocalCredentials,
        /// The emulator endpoint.
        endpoint: String,
        /// The region reported to the emulator.
        region: String,
    },
    /// The managed service, configured through the default provider chain.
    #[default]
    Managed,
}

impl ClientConfig {
    /// The local emulator on its default port.
    pub fn local() -> Self {
        Self::Local {
            credentials: LocalCredentials::default(),
            endpoint: LOCAL_ENDPOINT.to_string(),
            region: LOCAL_REGION.to_string(),
        }
    }

    /// Load the SDK configuration and build a client from it.
    pub async fn build_client(&self) -> Client {
        let loader = aws_config::defaults(BehaviorVersion::latest());
        let sdk_config = match self {
            Self::Local {
                credentials,
                endpoint,
                region,
            } => {
                loader
                    .credentials_provider(Credentials::new(
                        credentials.access_key_id.clone(),
                        credentials.secret_access_key.clone(),
                        None,
                        None,
                        "dynamodb-local",
                    ))
                    .endpoint_url(endpoint.clone())
                    .region(Region::new(region.clone()))
                    .load()
                    .await
            }
            Self::Managed => loader.load().await,
        };
        Client::new(&sdk_config)
    }
}
