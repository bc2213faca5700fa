//! Customer login, signup and logout.
//!
//! Forms are validated in core before anything is stored. A rejected form
//! re-renders with status 422 and the message for the first failing field;
//! the account store and the session are left untouched.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use dukkan_core::account::{LoginRequest, SignupRequest};

use crate::context::{PageContext, StoreContext};
use crate::error::{Result, clear_sentry_user, set_sentry_user};
use crate::filters;
use crate::middleware::{clear_current_customer, set_current_customer};
use crate::models::CurrentCustomer;
use crate::services::auth::{AuthError, AuthService};

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Signup form data.
#[derive(Deserialize)]
pub struct SignupForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
    /// Checkbox; present when ticked.
    pub accept_terms: Option<String>,
}

impl std::fmt::Debug for SignupForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupForm")
            .field("name", &self.name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub page: PageContext,
    pub email: String,
}

/// Signup page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/signup.html")]
pub struct SignupTemplate {
    pub page: PageContext,
    pub name: String,
    pub email: String,
    pub accept_terms: bool,
}

fn unprocessable(template: impl IntoResponse) -> Response {
    (StatusCode::UNPROCESSABLE_ENTITY, template).into_response()
}

// =============================================================================
// Login Routes
// =============================================================================

/// Display the login page.
#[instrument(skip(ctx), fields(store = %ctx.store_id()))]
pub async fn login_page(ctx: StoreContext) -> Result<LoginTemplate> {
    Ok(LoginTemplate {
        page: ctx.page(ctx.t().get("auth.login_title")).await?,
        email: String::new(),
    })
}

/// Handle login form submission.
#[instrument(skip(ctx, form), fields(store = %ctx.store_id()))]
pub async fn login(ctx: StoreContext, Form(form): Form<LoginForm>) -> Result<Response> {
    let email = form.email.clone();
    let request = LoginRequest {
        email: form.email,
        password: form.password,
    };

    let result = match request.validate() {
        Ok((email, password)) => {
            AuthService::new(ctx.state.accounts())
                .login(&email, &password)
                .await
        }
        Err(e) => Err(AuthError::from(e)),
    };

    match result {
        Ok(account) => {
            set_current_customer(&ctx.session, &CurrentCustomer::from(&account)).await?;
            set_sentry_user(&account.id, Some(account.email.as_str()));
            tracing::info!(email = %account.email.masked(), "Customer logged in");
            Ok(ctx.redirect_notice("", "auth.welcome").into_response())
        }
        Err(e) if e.is_user_facing() => {
            tracing::debug!("Login rejected: {e}");
            let mut page = ctx.page(ctx.t().get("auth.login_title")).await?;
            page.set_error(e.message_key());
            Ok(unprocessable(LoginTemplate { page, email }))
        }
        Err(e) => Err(e.into()),
    }
}

// =============================================================================
// Signup Routes
// =============================================================================

/// Display the signup page.
#[instrument(skip(ctx), fields(store = %ctx.store_id()))]
pub async fn signup_page(ctx: StoreContext) -> Result<SignupTemplate> {
    Ok(SignupTemplate {
        page: ctx.page(ctx.t().get("auth.signup_title")).await?,
        name: String::new(),
        email: String::new(),
        accept_terms: false,
    })
}

/// Handle signup form submission.
///
/// A new account is logged in straight away.
#[instrument(skip(ctx, form), fields(store = %ctx.store_id()))]
pub async fn signup(ctx: StoreContext, Form(form): Form<SignupForm>) -> Result<Response> {
    let (name, email, accept_terms) = (
        form.name.clone(),
        form.email.clone(),
        form.accept_terms.is_some(),
    );
    let request = SignupRequest {
        name: form.name,
        email: form.email,
        password: form.password,
        confirm_password: form.confirm_password,
        accept_terms,
    };

    let result = match request.validate() {
        Ok(new_account) => {
            AuthService::new(ctx.state.accounts())
                .register(&new_account)
                .await
        }
        Err(e) => Err(AuthError::from(e)),
    };

    match result {
        Ok(account) => {
            set_current_customer(&ctx.session, &CurrentCustomer::from(&account)).await?;
            set_sentry_user(&account.id, Some(account.email.as_str()));
            tracing::info!(email = %account.email.masked(), "Customer signed up");
            Ok(ctx.redirect_notice("", "auth.welcome").into_response())
        }
        Err(e) if e.is_user_facing() => {
            tracing::debug!("Signup rejected: {e}");
            let mut page = ctx.page(ctx.t().get("auth.signup_title")).await?;
            page.set_error(e.message_key());
            Ok(unprocessable(SignupTemplate {
                page,
                name,
                email,
                accept_terms,
            }))
        }
        Err(e) => Err(e.into()),
    }
}

// =============================================================================
// Logout
// =============================================================================

/// Log the customer out. Carts and wishlists are kept.
#[instrument(skip(ctx), fields(store = %ctx.store_id()))]
pub async fn logout(ctx: StoreContext) -> Result<Redirect> {
    clear_current_customer(&ctx.session).await?;
    clear_sentry_user();
    Ok(ctx.redirect_notice("", "auth.logged_out"))
}
