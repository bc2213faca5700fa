//! Operator login and logout.
//!
//! The admin has one operator, identified by the access token from
//! `ADMIN_ACCESS_TOKEN`. A rejected token re-renders the form; nothing is
//! written to the session.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::middleware::{clear_current_admin, set_current_admin};
use crate::models::CurrentAdmin;
use crate::services::auth::verify_access_token;
use crate::state::AppState;

/// Login form data.
#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub token: String,
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm").finish_non_exhaustive()
    }
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: Option<&'static str>,
}

/// Display the login page.
pub async fn login_page() -> LoginTemplate {
    LoginTemplate { error: None }
}

/// Handle the login form.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    let token = form.token.trim();
    if token.is_empty() {
        return Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            LoginTemplate {
                error: Some("أدخل رمز الدخول"),
            },
        )
            .into_response());
    }

    if !verify_access_token(&state.config().access_token, token) {
        tracing::warn!("Admin login rejected");
        return Ok((
            StatusCode::UNAUTHORIZED,
            LoginTemplate {
                error: Some("رمز الدخول غير صحيح"),
            },
        )
            .into_response());
    }

    set_current_admin(
        &session,
        &CurrentAdmin {
            logged_in_at: Utc::now(),
        },
    )
    .await?;
    tracing::info!("Admin logged in");
    Ok(Redirect::to("/").into_response())
}

/// Logout and clear the session, drafts included.
pub async fn logout(session: Session) -> Result<Redirect> {
    clear_current_admin(&session).await?;
    Ok(Redirect::to("/login"))
}
