//! HTML template rendering handlers for the web dashboard.

mod users;

pub use users::{UsersTemplate, users_page_handler};
