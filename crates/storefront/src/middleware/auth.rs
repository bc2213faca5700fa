//! Customer session extractors.
//!
//! Storefront pages work for guests; the logged-in customer only changes the
//! header and prefills checkout. So there is an optional extractor and the
//! helpers that log a customer in and out.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use crate::models::{CurrentCustomer, session_keys};

/// Extractor that optionally gets the current customer.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(OptionalAuth(customer): OptionalAuth) -> impl IntoResponse {
///     match customer {
///         Some(c) => format!("أهلاً {}", c.name),
///         None => "أهلاً بك".to_string(),
///     }
/// }
/// ```
pub struct OptionalAuth(pub Option<CurrentCustomer>);

impl<S> FromRequestParts<S> for OptionalAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let customer = match parts.extensions.get::<Session>() {
            Some(session) => session
                .get::<CurrentCustomer>(session_keys::CURRENT_CUSTOMER)
                .await
                .ok()
                .flatten(),
            None => None,
        };

        Ok(Self(customer))
    }
}

/// Set the current customer in the session.
///
/// The session id is cycled first so a pre-login id cannot be reused.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_customer(
    session: &Session,
    customer: &CurrentCustomer,
) -> Result<(), tower_sessions::session::Error> {
    session.cycle_id().await?;
    session
        .insert(session_keys::CURRENT_CUSTOMER, customer)
        .await
}

/// Clear the current customer from the session (logout).
///
/// Carts are kept; only the identity is removed.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_customer(
    session: &Session,
) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<CurrentCustomer>(session_keys::CURRENT_CUSTOMER)
        .await?;
    Ok(())
}
