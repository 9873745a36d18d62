//! Remote store-configuration fetching.
//!
//! The bootstrap pass needs the storefront's remote configuration before any
//! page renders. This crate provides:
//!
//! - [`GET_STORE_CONFIG`] - The fixed, named query document
//! - [`ConfigSource`] - The fetch seam the bootstrap pass consumes
//! - [`HttpConfigClient`] - The GraphQL-over-HTTP implementation
//! - [`FetchError`] - Failure taxonomy (all fatal for the request)
//!
//! The client forwards the inbound request's `cookie` and `authorization`
//! headers so the fetch is evaluated under the caller's session.

mod client;
mod error;
mod types;

pub use client::{ConfigSource, HttpConfigClient};
pub use error::FetchError;
pub use types::{GET_STORE_CONFIG, StoreConfigPayload};
