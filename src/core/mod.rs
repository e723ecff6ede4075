//! Core components of the `marketstack-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`MarketstackClient`] and its builder.
//! - The primary [`MsError`] type.
//! - The endpoint table, parameter validators and the shared [`Request`] core.
//! - Response models and the tabular view.

/// Method sets shared by the simple resource builders.
pub(crate) mod builder;
/// The main client (`MarketstackClient`), builder, and configuration.
pub mod client;
/// Endpoint identifiers, the feature support table and sort order.
pub mod endpoint;
/// The primary error type (`MsError`) for the crate.
pub mod error;
/// Response envelopes and typed record views.
pub mod models;
/// The request descriptor and HTTP execution shared by all builders.
pub mod request;
/// Records laid out as rows and columns.
pub mod table;
/// Pure parameter validators.
pub mod validate;

#[cfg(feature = "dataframe")]
pub mod dataframe;

// convenient re-exports so most code can just `use crate::core::MarketstackClient`
pub use client::{MarketstackClient, MarketstackClientBuilder};
pub use endpoint::{Endpoint, Feature, Sort};
pub use error::MsError;
pub use models::{Dividend, EodBar, Page, Pagination, Response, Split};
pub use request::{PointInTime, Request};
pub use table::Table;
pub use validate::DateInput;
