//! The state container and action surface.

use parking_lot::RwLock;

use crate::state::{AppState, StoreConfig, UserSession};

// ─────────────────────────────────────────────────────────────────────────────
// Actions
// ─────────────────────────────────────────────────────────────────────────────

/// An update dispatched against the [`Store`].
///
/// Actions are produced by the [`app_actions`] and [`user_actions`]
/// namespaces; callers never match on them.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Populate the `store_config` slot.
    SetStoreConfig(StoreConfig),
    /// Populate the `user` slot.
    SetUser(UserSession),
}

impl Action {
    /// Short action name for logging.
    fn name(&self) -> &'static str {
        match self {
            Self::SetStoreConfig(_) => "app/set_store_config",
            Self::SetUser(_) => "user/set_user",
        }
    }
}

/// Action creators for the application-level configuration slot.
pub mod app_actions {
    use super::{Action, StoreConfig};

    /// Populates the `store_config` slot with fetched configuration.
    #[must_use]
    pub fn set_store_config(config: StoreConfig) -> Action {
        Action::SetStoreConfig(config)
    }
}

/// Action creators for the user/session slot.
pub mod user_actions {
    use super::{Action, UserSession};

    /// Populates the `user` slot with session data.
    #[must_use]
    pub fn set_user(user: UserSession) -> Action {
        Action::SetUser(user)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Store
// ─────────────────────────────────────────────────────────────────────────────

/// The shared state container.
///
/// One instance per server request; on the client, one per browser session.
/// Mutation goes exclusively through [`dispatch`](Self::dispatch), reads
/// through [`with`](Self::with) or [`snapshot`](Self::snapshot).
///
/// # Example
///
/// ```
/// use vitrine_state::{Store, UserSession, user_actions};
///
/// let store = Store::new();
/// store.dispatch(user_actions::set_user(UserSession {
///     id: Some(1),
///     email: None,
///     signed_in: true,
/// }));
///
/// assert!(store.with(|state| state.user.signed_in));
/// ```
#[derive(Debug, Default)]
pub struct Store {
    state: RwLock<AppState>,
}

impl Store {
    /// Creates a store with an empty state tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store rehydrated from a server-rendered snapshot.
    #[must_use]
    pub fn from_snapshot(state: AppState) -> Self {
        Self {
            state: RwLock::new(state),
        }
    }

    /// Applies an action to the state tree.
    pub fn dispatch(&self, action: Action) {
        tracing::debug!(action = action.name(), "dispatching");
        let mut state = self.state.write();
        reduce(&mut state, action);
    }

    /// Runs `read` against the current state without cloning it.
    pub fn with<T>(&self, read: impl FnOnce(&AppState) -> T) -> T {
        read(&self.state.read())
    }

    /// Returns a clone of the current state tree, e.g. for serialization
    /// into the rendered document.
    #[must_use]
    pub fn snapshot(&self) -> AppState {
        self.state.read().clone()
    }
}

fn reduce(state: &mut AppState, action: Action) {
    match action {
        Action::SetStoreConfig(config) => state.store_config = config,
        Action::SetUser(user) => state.user = user,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_store_is_empty() {
        let store = Store::new();
        let state = store.snapshot();

        assert!(state.store_config.is_empty());
        assert_eq!(state.user, UserSession::default());
    }

    #[test]
    fn set_store_config_populates_only_that_slot() {
        let store = Store::new();
        store.dispatch(app_actions::set_store_config(StoreConfig {
            id: Some(3),
            ..StoreConfig::default()
        }));

        let state = store.snapshot();
        assert_eq!(state.store_config.id, Some(3));
        assert_eq!(state.user, UserSession::default());
    }

    #[test]
    fn set_user_populates_only_that_slot() {
        let store = Store::new();
        store.dispatch(user_actions::set_user(UserSession {
            id: Some(9),
            email: Some("x@example.com".into()),
            signed_in: true,
        }));

        let state = store.snapshot();
        assert!(state.store_config.is_empty());
        assert_eq!(state.user.id, Some(9));
    }

    #[test]
    fn from_snapshot_rehydrates() {
        let mut state = AppState::default();
        state.store_config.id = Some(11);

        let store = Store::from_snapshot(state);
        assert!(!store.with(|s| s.store_config.is_empty()));
    }

    #[test]
    fn snapshot_is_detached_from_later_dispatches() {
        let store = Store::new();
        let before = store.snapshot();

        store.dispatch(app_actions::set_store_config(StoreConfig {
            id: Some(1),
            ..StoreConfig::default()
        }));

        assert!(before.store_config.is_empty());
        assert!(!store.snapshot().store_config.is_empty());
    }
}
