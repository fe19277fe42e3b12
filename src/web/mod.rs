//! Web dashboard layer for browser-based UI.
//!
//! Provides an HTML page for listing, creating, editing and deleting users,
//! rendered server-side with Askama templates. The page's script writes
//! through the JSON API.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Dashboard route configuration

pub mod handlers;
pub mod routes;
