//! Deal-list builder core.
//!
//! An ordered list of product entries and a paginated, hierarchical product
//! picker that stay mutually consistent through drag reorder, search-driven
//! cache resets, incremental page loads, and atomic commit-on-close.

/// Application directory resolution.
pub mod app_dirs;
/// Catalog domain types and the remote search client.
pub mod catalog;
/// On-disk configuration.
pub mod config;
/// Event-driven state controller.
pub mod controller;
/// The ordered main list of deal entries.
pub mod deal_list;
mod http_client;
/// Tracing subscriber setup.
pub mod logging;
/// Transient picker-session state.
pub mod picker;

pub use controller::AppController;
