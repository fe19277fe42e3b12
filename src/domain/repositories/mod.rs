//! Repository trait definitions for the domain layer.
//!
//! Traits define the storage contract; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for service tests.
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - User record storage
//!
//! # Testing
//!
//! See integration tests in `tests/repository_user.rs` for usage examples.

pub mod user_repository;

pub use user_repository::UserRepository;

#[cfg(test)]
pub use user_repository::MockUserRepository;
