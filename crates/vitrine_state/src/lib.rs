//! Shared application state for Vitrine.
//!
//! One state tree per server request (created empty, populated once by the
//! bootstrap pass) and one per browser session (rehydrated from the
//! server-rendered snapshot):
//!
//! - [`AppState`] - The state tree: a `store_config` slot and a `user` slot
//! - [`Store`] - The container: dispatch actions, take snapshots
//! - [`app_actions`] / [`user_actions`] - Action-creator namespaces
//!
//! # Example
//!
//! ```
//! use vitrine_state::{Store, StoreConfig, app_actions};
//!
//! let store = Store::new();
//! assert!(store.with(|state| state.store_config.is_empty()));
//!
//! store.dispatch(app_actions::set_store_config(StoreConfig {
//!     id: Some(1),
//!     code: "default".into(),
//!     ..StoreConfig::default()
//! }));
//!
//! assert!(!store.snapshot().store_config.is_empty());
//! ```

mod state;
mod store;

pub use state::{AppState, StoreConfig, UserSession};
pub use store::{Action, Store, app_actions, user_actions};
