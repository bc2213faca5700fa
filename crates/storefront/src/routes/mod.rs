//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                                  - Store directory
//!
//! # Store pages (nested under /stores/{store_id})
//! GET  /                                  - Home (sections in saved layout order)
//! GET  /products/{product_id}             - Product detail (?image=n)
//! GET  /categories/{category_id}          - Category listing
//! GET  /about                             - About page
//! GET  /contact                           - Contact page
//! POST /contact                           - Contact form (rate limited)
//! POST /newsletter                        - Newsletter signup
//!
//! # Cart
//! GET  /cart                              - Cart page
//! GET  /cart/count                        - Cart count badge (fragment)
//! POST /cart/add                          - Add a product with its options
//! POST /cart/increment                    - +1 on a line
//! POST /cart/decrement                    - -1 on a line
//! POST /cart/update                       - Set a line quantity
//! POST /cart/remove                       - Remove a line
//! POST /wishlist/toggle                   - Add or remove a wishlist product
//!
//! # Checkout
//! GET  /checkout                          - Current wizard step
//! POST /checkout/shipping                 - Step 1
//! POST /checkout/payment                  - Step 2
//! POST /checkout/back                     - Previous step
//! POST /checkout/place-order              - Step 3 (rate limited)
//! GET  /checkout/complete                 - Order confirmation
//!
//! # Auth
//! GET  /login, /signup                    - Forms
//! POST /login, /signup                    - Actions (rate limited)
//! POST /logout                            - Clear the session customer
//! ```

pub mod auth;
pub mod cart;
pub mod categories;
pub mod checkout;
pub mod home;
pub mod pages;
pub mod products;
pub mod stores;
pub mod wishlist;

use axum::{
    Router,
    routing::{get, post},
};

use crate::middleware::{auth_rate_limiter, form_rate_limiter};
use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/count", get(cart::count))
        .route("/add", post(cart::add))
        .route("/increment", post(cart::increment))
        .route("/decrement", post(cart::decrement))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
}

/// Create the checkout routes router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(checkout::show))
        .route("/shipping", post(checkout::shipping))
        .route("/payment", post(checkout::payment))
        .route("/back", post(checkout::back))
        .route(
            "/place-order",
            post(checkout::place_order).layer(form_rate_limiter()),
        )
        .route("/complete", get(checkout::complete))
}

/// Create the auth routes router.
///
/// Only the POST handlers are rate limited; the forms themselves are not.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/login",
            post(auth::login)
                .layer(auth_rate_limiter())
                .get(auth::login_page),
        )
        .route(
            "/signup",
            post(auth::signup)
                .layer(auth_rate_limiter())
                .get(auth::signup_page),
        )
        .route("/logout", post(auth::logout))
}

/// Create the routes for one store.
pub fn store_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::show))
        .route("/products/{product_id}", get(products::show))
        .route("/categories/{category_id}", get(categories::show))
        .route("/about", get(pages::about))
        .route(
            "/contact",
            post(pages::contact_submit)
                .layer(form_rate_limiter())
                .get(pages::contact),
        )
        .route("/newsletter", post(home::newsletter))
        .route("/wishlist/toggle", post(wishlist::toggle))
        .nest("/cart", cart_routes())
        .nest("/checkout", checkout_routes())
        .merge(auth_routes())
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(stores::index))
        .nest("/stores/{store_id}", store_routes())
}
