//! The page contract.

use async_trait::async_trait;
use vitrine_style::StyleScope;

use crate::context::Context;
use crate::request::RequestContext;

/// Render input for a page, produced by its initializer.
///
/// Backed by a JSON value so pages can carry arbitrary shapes across the
/// serialization boundary without this layer knowing them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageProps(serde_json::Value);

impl PageProps {
    /// Props for a page with no initializer.
    #[must_use]
    pub fn empty() -> Self {
        Self(serde_json::Value::Null)
    }

    /// Wraps an already-built JSON value.
    #[must_use]
    pub fn from_value(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Returns the underlying JSON value.
    #[must_use]
    pub fn value(&self) -> &serde_json::Value {
        &self.0
    }
}

/// Errors raised by a page initializer. Propagated unmodified to the
/// request handler; this layer performs no recovery or retry.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// The page's own data fetching failed.
    #[error("page initializer failed: {0}")]
    Init(String),

    /// Props could not be serialized.
    #[error("invalid page props: {0}")]
    Json(#[from] serde_json::Error),
}

/// A renderable page.
///
/// Pages may declare an asynchronous initializer that receives the request
/// context; its settled value becomes the page's render input. Rendering
/// itself is synchronous: it resolves provider-supplied values from the
/// request [`Context`] and emits styles through the [`StyleScope`] it is
/// handed, so the document pass decides which cache captures them.
///
/// # Example
///
/// ```
/// use vitrine_render::{Context, Page, PageProps};
/// use vitrine_style::StyleScope;
///
/// struct Home;
///
/// impl Page for Home {
///     fn render(&self, _props: &PageProps, _context: &Context, styles: &StyleScope<'_>) -> String {
///         styles.rule(".home{margin:0}");
///         "<div class=\"home\">Welcome</div>".to_string()
///     }
/// }
/// ```
#[async_trait]
pub trait Page: Send + Sync {
    /// Page name for logging. Defaults to the type name.
    fn name(&self) -> &str {
        core::any::type_name::<Self>()
    }

    /// Optional async initializer, awaited after the bootstrap pass and
    /// before rendering. The default declares no initializer.
    async fn initial_props(&self, _ctx: &RequestContext) -> Result<PageProps, PageError> {
        Ok(PageProps::empty())
    }

    /// Renders the page to markup, resolving provider-supplied values from
    /// `context` and emitting styles through `styles`.
    fn render(&self, props: &PageProps, context: &Context, styles: &StyleScope<'_>) -> String;
}
