//! Provider composition for Vitrine.
//!
//! Every page is rendered through a fixed nesting of context-supplying
//! providers. This crate models that composition explicitly:
//!
//! - [`Context`] - Typed per-request container the providers install into
//!   (lives in `vitrine_render` so pages can resolve it during render)
//! - [`Provider`] / [`ProviderStack`] - Ordered, dependency-checked install
//! - [`StorefrontProviders`] - The fixed, non-configurable composition
//! - [`Shell`] - The layout-shell seam applied outside page content
//!
//! # Ordering
//!
//! Order is significant: inner providers may depend on values supplied by
//! outer ones (the design-system provider reads the theme), and styles
//! emitted closer to the root are overridden by those closer to the leaves
//! on specificity ties. [`ProviderStack::compose`] fails loudly when a
//! provider's dependency was not installed earlier instead of letting
//! lookups silently miss.

mod provider;
mod shell;
mod storefront;

pub use vitrine_render::context::{Context, ContextError};
pub use provider::{ComposeError, Provider, ProviderId, ProviderStack};
pub use shell::{AppShell, Shell};
pub use storefront::{
    ClientProvider, DesignConfigProvider, SessionStyleProvider, StoreProvider,
    StorefrontProviders, ThemeProvider,
};
