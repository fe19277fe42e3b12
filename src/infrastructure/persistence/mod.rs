//! Repository implementations.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - PostgreSQL storage via SQLx
//! - [`InMemoryUserRepository`] - process-local storage for tests and
//!   database-less runs

pub mod memory_user_repository;
pub mod pg_user_repository;

pub use memory_user_repository::InMemoryUserRepository;
pub use pg_user_repository::PgUserRepository;
