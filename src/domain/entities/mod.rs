//! Core domain entities.
//!
//! Entities follow the split used throughout the crate: a stored record
//! ([`User`]) and a separate struct carrying only the client-controlled
//! fields ([`UserFields`]), used for both create and full-replace update.

pub mod user;

pub use user::{User, UserFields};
