//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers, the web dashboard and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::user_service::UserService`] - User CRUD operations

pub mod services;
