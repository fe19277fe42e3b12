//! User management page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::domain::entities::User;
use crate::error::AppError;
use crate::state::AppState;

/// Template for the user management page.
///
/// Renders `templates/users.html`: the create/edit form, a table of every
/// stored user with Edit/Delete buttons, and the total count. The buttons
/// and form call the `POST` aliases under `/api/users`.
#[derive(Template, WebTemplate)]
#[template(path = "users.html")]
pub struct UsersTemplate {
    pub users: Vec<User>,
    pub backend: &'static str,
}

/// Renders the user management page.
///
/// # Endpoint
///
/// `GET /dashboard/users`
pub async fn users_page_handler(
    State(state): State<AppState>,
) -> Result<UsersTemplate, AppError> {
    let users = state.user_service.list_all().await?;

    Ok(UsersTemplate {
        users,
        backend: state.user_service.backend(),
    })
}
