//! Document-level rendering for Vitrine.
//!
//! This crate owns the server side of the render pipeline:
//!
//! - [`request`] - Inbound request context and device classification
//! - [`context`] - Typed value container pages resolve during render
//! - [`page`] - The page contract (optional async initializer + render)
//! - [`document`] - The two-phase style extraction pass and HTML assembly
//! - [`theme`] - Design tokens and component-library configuration
//!
//! # The two phases
//!
//! Phase 1 ([`document::collect`]) creates a request-scoped style cache and
//! renders the whole application through it. Phase 2 ([`document::finalize`])
//! extracts the accumulated rules and assembles the document props, with the
//! extracted style element ordered before any styles the base payload
//! already supplied. Keeping the phases explicit makes the ordering contract
//! a function signature instead of a closure-capture convention.

pub mod context;
pub mod document;
pub mod page;
pub mod request;
pub mod theme;

pub use context::{Context, ContextError};
pub use document::{CollectedRender, DocumentProps, RenderError, RenderedApp, SERVER_STYLE_ID};
pub use page::{Page, PageError, PageProps};
pub use request::{DEVICE_HEADER, DeviceType, RequestContext};
pub use theme::{BreakPoints, Colors, DesignConfig, Theme, ThemeVariables};
