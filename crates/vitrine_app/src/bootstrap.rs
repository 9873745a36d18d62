//! The application bootstrap pass.

use std::sync::Arc;

use vitrine_config::{ConfigSource, FetchError};
use vitrine_providers::{Context, ContextError};
use vitrine_render::{Page, PageError, PageProps, RequestContext};
use vitrine_state::{Store, app_actions, user_actions};

/// Errors from the bootstrap pass. Everything propagates unmodified to the
/// request handler — a failed bootstrap fails the whole request rather than
/// rendering a partially-configured storefront.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    /// Remote configuration fetch failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The page's own initializer failed.
    #[error(transparent)]
    Page(#[from] PageError),

    /// The provider composition did not supply a required value.
    #[error(transparent)]
    Context(#[from] ContextError),
}

/// Runs the bootstrap pass for one server request, then the page's own
/// initializer.
///
/// If the shared state's `store_config` is empty (its identifier is unset),
/// performs one blocking fetch through the composed config source and
/// dispatches both the `store_config` and `user` updates. A populated config
/// skips the fetch entirely, so repeat invocations within a request never
/// re-fetch. Staleness is not revalidated: configuration fetched once is
/// trusted for the rest of the session.
///
/// Returns only the page-specific props; the state mutation is a side
/// effect on the shared store.
///
/// # Errors
///
/// On fetch failure the error propagates and the store is left untouched
/// (no partial mutation). Page-initializer failures propagate unmodified.
pub async fn bootstrap(
    ctx: &RequestContext,
    context: &Context,
    page: &dyn Page,
) -> Result<PageProps, BootstrapError> {
    let store = context.get::<Arc<Store>>()?;
    let source = context.get::<Arc<dyn ConfigSource>>()?;

    if store.with(|state| state.store_config.is_empty()) {
        tracing::info!("store configuration absent, bootstrapping");
        let payload = source.fetch_store_config(ctx).await?;
        store.dispatch(app_actions::set_store_config(payload.store_config));
        store.dispatch(user_actions::set_user(payload.user));
    } else {
        tracing::debug!("store configuration present, skipping fetch");
    }

    let props = page.initial_props(ctx).await?;
    Ok(props)
}
