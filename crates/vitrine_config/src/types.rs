//! Wire types for the store-configuration query.

use serde::Deserialize;
use vitrine_state::{StoreConfig, UserSession};

use crate::error::FetchError;

/// The fixed query the bootstrap pass issues when configuration is absent.
pub const GET_STORE_CONFIG: &str = "\
query getStoreConfig {
  storeConfig {
    id
    code
    locale
    base_currency_code
    secure_base_url
    default_title
  }
  customer {
    id
    email
  }
}";

/// Decoded result of [`GET_STORE_CONFIG`], split into the two shared-state
/// slots the bootstrap pass populates.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfigPayload {
    /// The `store_config` slot value.
    pub store_config: StoreConfig,
    /// The `user` slot value.
    pub user: UserSession,
}

// ─────────────────────────────────────────────────────────────────────────────
// GraphQL envelope
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    data: Option<QueryData>,
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct QueryData {
    #[serde(rename = "storeConfig")]
    store_config: StoreConfigData,
    customer: Option<CustomerData>,
}

#[derive(Debug, Deserialize)]
struct StoreConfigData {
    id: u64,
    #[serde(default)]
    code: String,
    #[serde(default)]
    locale: String,
    #[serde(default)]
    base_currency_code: String,
    #[serde(default)]
    secure_base_url: String,
    #[serde(default)]
    default_title: String,
}

#[derive(Debug, Deserialize)]
struct CustomerData {
    id: Option<u64>,
    email: Option<String>,
}

impl Envelope {
    /// Collapses the GraphQL envelope into a payload, treating GraphQL-level
    /// errors and a missing `data` field as fetch failures.
    pub(crate) fn into_payload(self) -> Result<StoreConfigPayload, FetchError> {
        if let Some(errors) = self.errors {
            if !errors.is_empty() {
                let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
                return Err(FetchError::GraphQl(messages.join("; ")));
            }
        }

        let data = self
            .data
            .ok_or_else(|| FetchError::InvalidResponse("response carried no data".to_string()))?;

        let config = data.store_config;
        let user = data.customer.map_or_else(UserSession::default, |customer| {
            let signed_in = customer.id.is_some();
            UserSession {
                id: customer.id,
                email: customer.email,
                signed_in,
            }
        });

        Ok(StoreConfigPayload {
            store_config: StoreConfig {
                id: Some(config.id),
                code: config.code,
                locale: config.locale,
                currency: config.base_currency_code,
                base_url: config.secure_base_url,
                default_title: config.default_title,
            },
            user,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_store_config_and_customer() {
        let body = r#"{
            "data": {
                "storeConfig": {
                    "id": 1,
                    "code": "default",
                    "locale": "en_US",
                    "base_currency_code": "USD",
                    "secure_base_url": "https://shop.example/",
                    "default_title": "Shop"
                },
                "customer": { "id": 7, "email": "a@example.com" }
            }
        }"#;

        let envelope: Envelope = serde_json::from_str(body).unwrap();
        let payload = envelope.into_payload().unwrap();

        assert_eq!(payload.store_config.id, Some(1));
        assert_eq!(payload.store_config.currency, "USD");
        assert!(!payload.store_config.is_empty());
        assert!(payload.user.signed_in);
        assert_eq!(payload.user.email.as_deref(), Some("a@example.com"));
    }

    #[test]
    fn missing_customer_yields_anonymous_session() {
        let body = r#"{
            "data": {
                "storeConfig": { "id": 2 },
                "customer": null
            }
        }"#;

        let envelope: Envelope = serde_json::from_str(body).unwrap();
        let payload = envelope.into_payload().unwrap();

        assert!(!payload.user.signed_in);
        assert_eq!(payload.user, UserSession::default());
    }

    #[test]
    fn graphql_errors_fail_the_fetch() {
        let body = r#"{
            "data": null,
            "errors": [{ "message": "store offline" }, { "message": "try later" }]
        }"#;

        let envelope: Envelope = serde_json::from_str(body).unwrap();
        let err = envelope.into_payload().unwrap_err();

        assert!(matches!(err, FetchError::GraphQl(msg) if msg == "store offline; try later"));
    }

    #[test]
    fn missing_data_is_an_invalid_response() {
        let envelope: Envelope = serde_json::from_str("{}").unwrap();
        assert!(matches!(
            envelope.into_payload(),
            Err(FetchError::InvalidResponse(_))
        ));
    }

    #[test]
    fn query_is_named() {
        assert!(GET_STORE_CONFIG.starts_with("query getStoreConfig"));
    }
}
