//! Session wiring and the per-request render pipeline.

use std::sync::Arc;

use vitrine_config::ConfigSource;
use vitrine_providers::{AppShell, ComposeError, ContextError, Shell, StorefrontProviders};
use vitrine_render::document::{self, DocumentProps, RenderError, RenderedApp};
use vitrine_render::theme::{DesignConfig, Theme};
use vitrine_render::{Page, RequestContext};
use vitrine_state::Store;
use vitrine_style::StyleCache;

use crate::bootstrap::{BootstrapError, bootstrap};

/// Errors from the request pipeline.
///
/// This layer performs no local recovery: all failures bubble to the
/// surrounding request-handling framework.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The provider composition was invalid.
    #[error(transparent)]
    Compose(#[from] ComposeError),

    /// The bootstrap pass (or the page initializer it runs) failed.
    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),

    /// The document render failed.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// A required context value was missing during rendering.
    #[error(transparent)]
    Context(#[from] ContextError),
}

/// Session-level application wiring.
///
/// Holds the pieces that outlive a single request: the configuration
/// source, the session style cache (constructed once here, passed by
/// reference into every composition — not ambient global state), theme and
/// design values, and the layout shell. Each call to
/// [`render_request`](Self::render_request) builds the per-request pieces
/// fresh: a store, a provider context, and a request-scoped style cache.
pub struct App {
    source: Arc<dyn ConfigSource>,
    session_styles: Arc<StyleCache>,
    theme: Theme,
    design: DesignConfig,
    shell: Arc<dyn Shell>,
}

impl App {
    /// Creates an app around a configuration source, with default theme,
    /// design configuration, and shell.
    #[must_use]
    pub fn new(source: Arc<dyn ConfigSource>) -> Self {
        Self {
            source,
            session_styles: Arc::new(StyleCache::default()),
            theme: Theme::default(),
            design: DesignConfig::default(),
            shell: Arc::new(AppShell),
        }
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

    /// Replaces the layout shell.
    #[must_use]
    pub fn with_shell(mut self, shell: Arc<dyn Shell>) -> Self {
        self.shell = shell;
        self
    }

    /// Returns the session style cache shared across this app's requests.
    #[must_use]
    pub fn session_styles(&self) -> &Arc<StyleCache> {
        &self.session_styles
    }

    /// Renders one server request end to end.
    ///
    /// Pipeline order is the correctness contract of this layer:
    ///
    /// 1. Compose the fixed provider stack around a fresh request store.
    /// 2. Bootstrap: load store configuration if absent, then run the
    ///    page's initializer (the sole suspension point).
    /// 3. Phase 1 — render the shell-wrapped page through a fresh
    ///    request-scoped style cache, handing both the composed context and
    ///    the style scope down so leaf components resolve provider values.
    /// 4. Phase 2 — extract the accumulated rules and assemble the document
    ///    props, attaching the state snapshot for client rehydration.
    ///
    /// # Errors
    ///
    /// Fails fast on composition, fetch, initializer, or render errors; no
    /// partial document is produced.
    pub async fn render_request(
        &self,
        ctx: &RequestContext,
        page: &dyn Page,
    ) -> Result<DocumentProps, AppError> {
        tracing::info!(page = page.name(), device = %ctx.device(), "rendering request");

        let store = Arc::new(Store::new());
        let context = StorefrontProviders::new(Arc::clone(&self.source), Arc::clone(&store))
            .with_session_styles(Arc::clone(&self.session_styles))
            .with_theme(self.theme.clone())
            .with_design(self.design.clone())
            .stack()
            .compose()?;

        let props = bootstrap(ctx, &context, page).await?;

        let collected = document::collect(ctx, |scope| {
            let content = page.render(&props, &context, scope);
            Ok(RenderedApp {
                markup: self.shell.render(ctx, &context, &content),
                styles: self.shell.base_styles(&context),
            })
        })?;

        Ok(document::finalize(ctx, collected).with_state(store.snapshot()))
    }
}

impl core::fmt::Debug for App {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("App")
            .field("theme", &self.theme.namespace)
            .field("design_prefix", &self.design.prefix)
            .finish()
    }
}
