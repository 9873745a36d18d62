//! Application-level bootstrap and the per-request render pipeline.
//!
//! This crate ties the layers together:
//!
//! - [`bootstrap`] - The pre-render pass that guarantees store configuration
//!   is loaded (fetching it at most once per request) before any page renders
//! - [`App`] - Session-level wiring and the full request pipeline: compose
//!   providers → bootstrap → collect styles → finalize the document
//! - [`telemetry`] - `tracing` subscriber setup
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use vitrine_app::App;
//! use vitrine_config::HttpConfigClient;
//! use vitrine_render::{Context, Page, PageProps, RequestContext};
//! use vitrine_style::StyleScope;
//!
//! struct Home;
//!
//! impl Page for Home {
//!     fn render(&self, _props: &PageProps, _context: &Context, styles: &StyleScope<'_>) -> String {
//!         styles.rule(".home{}");
//!         "<div class=\"home\"/>".to_string()
//!     }
//! }
//!
//! # async fn serve() -> Result<(), vitrine_app::AppError> {
//! let app = App::new(Arc::new(HttpConfigClient::new("https://shop.example/graphql")));
//! let ctx = RequestContext::from_headers([("x-device-type", "Mobile")]);
//! let document = app.render_request(&ctx, &Home).await?;
//! let _html = document.to_html();
//! # Ok(())
//! # }
//! ```

mod app;
mod bootstrap;
pub mod telemetry;

pub use app::{App, AppError};
pub use bootstrap::{BootstrapError, bootstrap};
