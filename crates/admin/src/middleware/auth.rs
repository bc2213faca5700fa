//! Authentication extractor and session helpers for admin.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::models::{CurrentAdmin, session_keys};

/// Extractor that requires an authenticated operator.
///
/// Page requests without a session redirect to `/login`. Builder change
/// requests (sent by the builder script) get a bare 401 so the script can
/// show a "logged out" message instead of swapping a login page into the
/// preview.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected(RequireAdmin(admin): RequireAdmin) -> impl IntoResponse {
///     format!("logged in at {}", admin.logged_in_at)
/// }
/// ```
pub struct RequireAdmin(pub CurrentAdmin);

/// Rejection for [`RequireAdmin`].
pub enum AdminAuthRejection {
    /// Redirect to the login page.
    RedirectToLogin,
    /// 401 for script requests.
    Unauthorized,
}

impl IntoResponse for AdminAuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/login").into_response(),
            Self::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
        }
    }
}

/// Header the builder script sets on every request it sends.
pub const FETCH_HEADER: &str = "x-requested-with";

/// Whether the request came from the builder script.
#[must_use]
pub fn is_fetch(parts: &Parts) -> bool {
    parts
        .headers
        .get(FETCH_HEADER)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case("fetch"))
}

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AdminAuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let rejection = if is_fetch(parts) {
            AdminAuthRejection::Unauthorized
        } else {
            AdminAuthRejection::RedirectToLogin
        };

        let Some(session) = parts.extensions.get::<Session>() else {
            return Err(AdminAuthRejection::Unauthorized);
        };

        session
            .get::<CurrentAdmin>(session_keys::CURRENT_ADMIN)
            .await
            .ok()
            .flatten()
            .map(Self)
            .ok_or(rejection)
    }
}

/// Set the current operator in the session.
///
/// The session id is cycled first so a pre-login id cannot be reused.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_admin(
    session: &Session,
    admin: &CurrentAdmin,
) -> Result<(), tower_sessions::session::Error> {
    session.cycle_id().await?;
    session.insert(session_keys::CURRENT_ADMIN, admin).await
}

/// End the operator's session, dropping any unsaved drafts.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_admin(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.flush().await
}
