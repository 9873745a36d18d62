//! The storefront's fixed provider composition.

use std::sync::Arc;

use vitrine_config::ConfigSource;
use vitrine_render::Context;
use vitrine_render::theme::{DesignConfig, Theme};
use vitrine_state::Store;
use vitrine_style::StyleCache;

use crate::provider::{Provider, ProviderId, ProviderStack};

// ─────────────────────────────────────────────────────────────────────────────
// Individual providers, outermost first
// ─────────────────────────────────────────────────────────────────────────────

/// Supplies the data-fetching client. Outermost provider.
pub struct ClientProvider {
    source: Arc<dyn ConfigSource>,
}

impl ClientProvider {
    /// Wraps a configuration source.
    #[must_use]
    pub fn new(source: Arc<dyn ConfigSource>) -> Self {
        Self { source }
    }
}

impl Provider for ClientProvider {
    fn install(&self, ctx: &mut Context) {
        ctx.insert(Arc::clone(&self.source));
    }
}

/// Supplies the shared-state container.
pub struct StoreProvider {
    store: Arc<Store>,
}

impl StoreProvider {
    /// Wraps the request's store.
    #[must_use]
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }
}

impl Provider for StoreProvider {
    fn install(&self, ctx: &mut Context) {
        ctx.insert(Arc::clone(&self.store));
    }
}

/// Supplies the session-scoped style cache used for client-side re-render
/// parity. Independent of the request-scoped cache the document pass
/// creates; same type, session lifetime.
pub struct SessionStyleProvider {
    cache: Arc<StyleCache>,
}

impl SessionStyleProvider {
    /// Wraps the session cache.
    #[must_use]
    pub fn new(cache: Arc<StyleCache>) -> Self {
        Self { cache }
    }
}

impl Provider for SessionStyleProvider {
    fn install(&self, ctx: &mut Context) {
        ctx.insert(Arc::clone(&self.cache));
    }
}

/// Supplies the design tokens.
pub struct ThemeProvider {
    theme: Theme,
}

impl ThemeProvider {
    /// Wraps the theme values.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }
}

impl Provider for ThemeProvider {
    fn install(&self, ctx: &mut Context) {
        ctx.insert(self.theme.clone());
    }
}

/// Supplies the design-system configuration (component-library prefix and
/// theme variables). Must sit inside the theme provider.
pub struct DesignConfigProvider {
    config: DesignConfig,
}

impl DesignConfigProvider {
    /// Wraps the design-system configuration.
    #[must_use]
    pub fn new(config: DesignConfig) -> Self {
        Self { config }
    }
}

impl Provider for DesignConfigProvider {
    fn install(&self, ctx: &mut Context) {
        ctx.insert(self.config.clone());
    }

    fn dependencies(&self) -> Vec<ProviderId> {
        vec![ProviderId::of::<ThemeProvider>()]
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// StorefrontProviders
// ─────────────────────────────────────────────────────────────────────────────

/// The fixed, non-configurable provider composition every page renders
/// through, in nesting order:
///
/// data-fetching client → shared state → session style cache → theme →
/// design-system configuration.
///
/// No provider may be omitted or reordered without breaking dependent
/// lookups, so this is the only way the storefront builds its stack.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use async_trait::async_trait;
/// use vitrine_config::{ConfigSource, FetchError, StoreConfigPayload};
/// use vitrine_providers::StorefrontProviders;
/// use vitrine_render::RequestContext;
/// use vitrine_state::Store;
///
/// struct NullSource;
///
/// #[async_trait]
/// impl ConfigSource for NullSource {
///     async fn fetch_store_config(
///         &self,
///         _ctx: &RequestContext,
///     ) -> Result<StoreConfigPayload, FetchError> {
///         Err(FetchError::Http("offline".into()))
///     }
/// }
///
/// let providers = StorefrontProviders::new(Arc::new(NullSource), Arc::new(Store::new()));
/// let ctx = providers.stack().compose().unwrap();
/// assert!(ctx.contains::<Arc<Store>>());
/// ```
pub struct StorefrontProviders {
    source: Arc<dyn ConfigSource>,
    store: Arc<Store>,
    session_styles: Arc<StyleCache>,
    theme: Theme,
    design: DesignConfig,
}

impl StorefrontProviders {
    /// Creates the composition with default theme, design configuration,
    /// and a fresh session style cache.
    #[must_use]
    pub fn new(source: Arc<dyn ConfigSource>, store: Arc<Store>) -> Self {
        Self {
            source,
            store,
            session_styles: Arc::new(StyleCache::default()),
            theme: Theme::default(),
            design: DesignConfig::default(),
        }
    }

    /// Replaces the session style cache (shared across a page session).
    #[must_use]
    pub fn with_session_styles(mut self, cache: Arc<StyleCache>) -> Self {
        self.session_styles = cache;
        self
    }

    /// Replaces the theme values.
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Replaces the design-system configuration.
    #[must_use]
    pub fn with_design(mut self, design: DesignConfig) -> Self {
        self.design = design;
        self
    }

    /// Builds the stack in the fixed nesting order.
    #[must_use]
    pub fn stack(self) -> ProviderStack {
        ProviderStack::new()
            .add(ClientProvider::new(self.source))
            .add(StoreProvider::new(self.store))
            .add(SessionStyleProvider::new(self.session_styles))
            .add(ThemeProvider::new(self.theme))
            .add(DesignConfigProvider::new(self.design))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use vitrine_config::{FetchError, StoreConfigPayload};
    use vitrine_render::RequestContext;

    struct NullSource;

    #[async_trait]
    impl ConfigSource for NullSource {
        async fn fetch_store_config(
            &self,
            _ctx: &RequestContext,
        ) -> Result<StoreConfigPayload, FetchError> {
            Err(FetchError::Http("unreachable".to_string()))
        }
    }

    fn composition() -> StorefrontProviders {
        StorefrontProviders::new(Arc::new(NullSource), Arc::new(Store::new()))
    }

    #[test]
    fn stack_holds_all_five_providers() {
        assert_eq!(composition().stack().len(), 5);
    }

    #[test]
    fn probe_resolves_every_provider_value() {
        let ctx = composition().stack().compose().unwrap();

        // A leaf component must observe all five simultaneously.
        assert!(ctx.get::<Arc<dyn ConfigSource>>().is_ok());
        assert!(ctx.get::<Arc<Store>>().is_ok());
        assert!(ctx.get::<Arc<StyleCache>>().is_ok());
        assert!(ctx.get::<Theme>().is_ok());
        assert!(ctx.get::<DesignConfig>().is_ok());
    }

    #[test]
    fn leaf_render_resolves_composed_values() {
        use crate::shell::Shell;

        // A shell acting as a leaf component: the composed values must be
        // reachable from inside an actual render call, not just by direct
        // context probing.
        struct LeafShell;

        impl Shell for LeafShell {
            fn render(&self, _ctx: &RequestContext, context: &Context, content: &str) -> String {
                let theme = context.get::<Theme>().unwrap();
                let design = context.get::<DesignConfig>().unwrap();
                let session = context.get::<Arc<StyleCache>>().unwrap();
                session.insert(".leaf{display:block}");

                format!(
                    "<div class=\"{}-{}\">{content}</div>",
                    theme.namespace, design.prefix
                )
            }
        }

        let session = Arc::new(StyleCache::default());
        let ctx = composition()
            .with_session_styles(Arc::clone(&session))
            .stack()
            .compose()
            .unwrap();

        let html = LeafShell.render(&RequestContext::empty(), &ctx, "leaf");
        assert!(html.contains("vitrine-vtr"));
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn session_cache_is_shared_by_identity() {
        let cache = Arc::new(StyleCache::default());
        let ctx = composition()
            .with_session_styles(Arc::clone(&cache))
            .stack()
            .compose()
            .unwrap();

        let installed = ctx.get::<Arc<StyleCache>>().unwrap();
        assert!(Arc::ptr_eq(installed, &cache));
    }

    #[test]
    fn design_config_depends_on_theme() {
        let deps = DesignConfigProvider::new(DesignConfig::default()).dependencies();
        assert_eq!(deps, vec![ProviderId::of::<ThemeProvider>()]);
    }
}
