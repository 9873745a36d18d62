//! # Vitrine Internal Library
//!
//! Re-exports the core Vitrine crates for convenience.

/// Application bootstrap pass and request pipeline.
pub use vitrine_app;

/// Remote store-configuration client.
pub use vitrine_config;

/// Request context container and provider composition.
pub use vitrine_providers;

/// Document-level rendering and style extraction.
pub use vitrine_render;

/// Shared application state container.
pub use vitrine_state;

/// Style rule accumulation and extraction.
pub use vitrine_style;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use vitrine_app::{App, AppError, bootstrap, telemetry};
    pub use vitrine_config::{ConfigSource, FetchError, HttpConfigClient, StoreConfigPayload};
    pub use vitrine_providers::{
        AppShell, Context, Provider, ProviderStack, Shell, StorefrontProviders,
    };
    pub use vitrine_render::{
        DeviceType, DocumentProps, Page, PageProps, RequestContext, Theme,
    };
    pub use vitrine_state::{AppState, Store, StoreConfig, UserSession, app_actions, user_actions};
    pub use vitrine_style::{CacheOptions, InsertionMode, StyleCache, StyleScope, wrap};
}
