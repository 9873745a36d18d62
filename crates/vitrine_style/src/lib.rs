//! Style rule accumulation for server-rendered pages.
//!
//! `vitrine_style` provides the style cache used by both render passes:
//!
//! - [`StyleCache`] - An identity-bearing accumulator for CSS rule text
//! - [`StyleScope`] - The handle components emit rules through
//! - [`wrap`] - A render boundary that routes emitted rules into a cache
//!
//! # Two caches, one type
//!
//! The document pass creates one cache per server request and discards it
//! after extraction. The provider composition holds a second, session-scoped
//! cache (behind an `Arc`) that survives client re-renders. Both are plain
//! [`StyleCache`] instances; only their lifetimes differ.
//!
//! # Example
//!
//! ```
//! use vitrine_style::{CacheOptions, StyleCache, wrap};
//!
//! let cache = StyleCache::new(CacheOptions::default());
//!
//! let markup = wrap(&cache, |scope| {
//!     scope.rule(".btn{color:#70ADCB}");
//!     "<button class=\"btn\">Buy</button>".to_string()
//! });
//!
//! assert_eq!(cache.extract(false), ".btn{color:#70ADCB}");
//! assert!(markup.contains("btn"));
//! ```

mod cache;
mod scope;

pub use cache::{CacheOptions, InsertionMode, StyleCache};
pub use scope::{StyleScope, wrap};
