//! The document-level style extraction pass.
//!
//! Executes once per server-rendered request, wrapping the entire page
//! render. The pass is split into two explicit phases:
//!
//! 1. [`collect`] - create a fresh request-scoped [`StyleCache`], render the
//!    delegated application through it, and keep the cache alongside the
//!    base payload.
//! 2. [`finalize`] - extract the accumulated rules (marking them used) and
//!    assemble [`DocumentProps`], ordering the extracted style element
//!    before any styles the base payload already supplied.
//!
//! If the delegated render fails, the failure propagates unmodified; no
//! partial document is emitted. Extraction itself cannot fail — an empty
//! cache yields an empty style element.

use vitrine_state::AppState;
use vitrine_style::{CacheOptions, StyleCache, StyleScope, wrap};

use crate::page::PageError;
use crate::request::{DeviceType, RequestContext};

/// Id of the style element carrying server-extracted CSS. The client looks
/// this element up after hydration to drop the server-rendered rules.
pub const SERVER_STYLE_ID: &str = "__jss_server_side__";

/// Errors from the document render pipeline.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The page initializer failed.
    #[error(transparent)]
    Page(#[from] PageError),

    /// The delegated document-rendering procedure failed.
    #[error("document render failed: {0}")]
    Render(String),

    /// The hydration snapshot could not be serialized.
    #[error("state snapshot serialization failed: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// Base payload produced by the delegated render: body markup plus any style
/// payloads the base renderer already supplies (which must stay *after* the
/// extracted rules in the final document).
#[derive(Debug, Clone, Default)]
pub struct RenderedApp {
    /// Rendered body markup.
    pub markup: String,
    /// Pre-existing style payloads from the base renderer.
    pub styles: Vec<String>,
}

/// Output of phase 1: the base payload together with the request-scoped
/// cache that captured the render's style rules. Handing the cache forward
/// explicitly is what ties the two phases together.
pub struct CollectedRender {
    app: RenderedApp,
    cache: StyleCache,
}

impl CollectedRender {
    /// Returns the request-scoped cache (e.g. for multi-stage extraction).
    #[must_use]
    pub fn cache(&self) -> &StyleCache {
        &self.cache
    }
}

/// Phase 1: renders the delegated application through a fresh request-scoped
/// style cache.
///
/// Every nested render — including whatever the bootstrap pass resolved
/// into — records into this cache, because the render function only receives
/// the scope handle bound to it.
///
/// # Errors
///
/// Propagates any error from the delegated render unmodified.
pub fn collect<F>(ctx: &RequestContext, render: F) -> Result<CollectedRender, RenderError>
where
    F: FnOnce(&StyleScope<'_>) -> Result<RenderedApp, RenderError>,
{
    let cache = StyleCache::new(CacheOptions::default());
    tracing::debug!(device = %ctx.device(), "collecting document render");

    let app = wrap(&cache, render)?;
    Ok(CollectedRender { app, cache })
}

/// Phase 2: extracts the collected rules and assembles the document props.
///
/// Extraction marks rules as used so a later extraction from the same cache
/// (multi-stage rendering) does not re-emit them.
#[must_use]
pub fn finalize(ctx: &RequestContext, collected: CollectedRender) -> DocumentProps {
    let css = collected.cache.extract(true);
    let style_element = format!(r#"<style id="{SERVER_STYLE_ID}">{css}</style>"#);

    DocumentProps {
        device: ctx.device().clone(),
        style_element,
        markup: collected.app.markup,
        base_styles: collected.app.styles,
        state: None,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// DocumentProps
// ─────────────────────────────────────────────────────────────────────────────

/// Final document properties: base payload + device classification + the
/// extracted style element.
#[derive(Debug, Clone)]
pub struct DocumentProps {
    /// Device classification attached to the document.
    pub device: DeviceType,
    /// `<style id="__jss_server_side__">` element with the extracted rules.
    pub style_element: String,
    /// Rendered body markup.
    pub markup: String,
    /// Style payloads the base renderer supplied, kept after the extracted
    /// element so later-declared styles win specificity ties.
    pub base_styles: Vec<String>,
    /// Hydration snapshot serialized into the document, if attached.
    pub state: Option<AppState>,
}

impl DocumentProps {
    /// Attaches the shared-state snapshot to rehydrate on the client.
    #[must_use]
    pub fn with_state(mut self, state: AppState) -> Self {
        self.state = Some(state);
        self
    }

    /// All head style payloads in emission order: extracted rules first,
    /// then the base payload's styles.
    #[must_use]
    pub fn styles(&self) -> String {
        let mut out = self.style_element.clone();
        for style in &self.base_styles {
            out.push_str(style);
        }
        out
    }

    /// Serializes the full HTML document.
    ///
    /// # Errors
    ///
    /// Fails only if the attached state snapshot cannot be serialized.
    pub fn to_html(&self) -> Result<String, RenderError> {
        let state_script = match &self.state {
            Some(state) => format!(
                r#"<script id="__VITRINE_STATE__" type="application/json">{}</script>"#,
                serde_json::to_string(state)?
            ),
            None => String::new(),
        };

        Ok(format!(
            concat!(
                "<!DOCTYPE html>\n",
                r#"<html lang="en" data-device="{device}">"#,
                "\n<head>\n",
                r#"<meta charset="utf-8">"#,
                "\n",
                r#"<meta name="robots" content="INDEX,FOLLOW">"#,
                "\n",
                r#"<meta name="viewport" content="width=device-width, initial-scale=1, minimum-scale=1, maximum-scale=1, shrink-to-fit=no, viewport-fit=cover">"#,
                "\n{styles}\n</head>\n",
                r#"<body class="bg-body font-sans text-base text-colorDefault">"#,
                "\n",
                r#"<div id="__vitrine">{markup}</div>"#,
                "\n{state_script}\n</body>\n</html>\n"
            ),
            device = self.device,
            styles = self.styles(),
            markup = self.markup,
            state_script = state_script,
        ))
    }
}
