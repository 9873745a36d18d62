//! A server-side rendering bootstrap layer for web storefronts.
//!

pub use vitrine_internal::*;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use vitrine_internal::prelude::*;
}
