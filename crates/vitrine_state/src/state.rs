//! The state tree and its slots.

use serde::{Deserialize, Serialize};

/// Remote store configuration.
///
/// Fetched once per request by the bootstrap pass when absent. "Empty" is
/// defined precisely as the configuration identifier being unset — a config
/// with an `id` is considered populated even if optional fields are missing,
/// so a partially-populated config never triggers a second fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store identifier. `None` means the config has not been fetched.
    pub id: Option<u64>,
    /// Store view code (e.g. `"default"`).
    #[serde(default)]
    pub code: String,
    /// Locale tag (e.g. `"en_US"`).
    #[serde(default)]
    pub locale: String,
    /// ISO currency code for displayed prices.
    #[serde(default)]
    pub currency: String,
    /// Base URL the storefront is served from.
    #[serde(default)]
    pub base_url: String,
    /// Default document title.
    #[serde(default)]
    pub default_title: String,
}

impl StoreConfig {
    /// Returns `true` if the configuration has not been populated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
    }
}

/// User/session data attached to the request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserSession {
    /// Customer identifier, when signed in.
    pub id: Option<u64>,
    /// Customer email, when signed in.
    pub email: Option<String>,
    /// Whether the inbound request carried a valid session.
    #[serde(default)]
    pub signed_in: bool,
}

/// The single shared state tree.
///
/// Created empty at request start; serialized into the rendered document and
/// rehydrated on the client via [`Store::from_snapshot`](crate::Store::from_snapshot).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    /// Remote store configuration slot.
    pub store_config: StoreConfig,
    /// User/session slot.
    pub user: UserSession,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_empty() {
        assert!(StoreConfig::default().is_empty());
    }

    #[test]
    fn config_with_id_is_populated() {
        let config = StoreConfig {
            id: Some(1),
            ..StoreConfig::default()
        };
        assert!(!config.is_empty());
    }

    #[test]
    fn partially_populated_config_counts_as_empty_without_id() {
        // Emptiness is keyed on the identifier, not on other fields.
        let config = StoreConfig {
            id: None,
            code: "default".into(),
            locale: "en_US".into(),
            ..StoreConfig::default()
        };
        assert!(config.is_empty());
    }

    #[test]
    fn state_round_trips_through_serde() {
        let state = AppState {
            store_config: StoreConfig {
                id: Some(7),
                code: "default".into(),
                locale: "en_US".into(),
                currency: "USD".into(),
                base_url: "https://shop.example".into(),
                default_title: "Shop".into(),
            },
            user: UserSession {
                id: Some(42),
                email: Some("a@example.com".into()),
                signed_in: true,
            },
        };

        let json = serde_json::to_string(&state).unwrap();
        let back: AppState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
