//! Integration tests for Dukkan.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p dukkan-integration-tests
//! ```
//!
//! Each test starts its own storefront and admin servers on ephemeral
//! ports, sharing one temporary theme directory, and talks to them over
//! HTTP with a cookie-carrying client. No external services are needed.
//!
//! # Test Categories
//!
//! - `storefront` - Cart, variants and signup through the storefront
//! - `theme_builder` - Builder changes, saving, and the storefront picking
//!   them up

use std::net::SocketAddr;
use std::path::Path;

use reqwest::Client;

/// Token the test admin accepts.
pub const ADMIN_TOKEN: &str = "k7Qp2vXz9LmN4rT8wYb3Hc6Jd1Fg5Se0";

/// Base URL of a server spawned for one test.
pub struct TestServer {
    pub base_url: String,
}

impl TestServer {
    /// `{base_url}{path}`
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

async fn serve(app: axum::Router) -> TestServer {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener
        .local_addr()
        .expect("Failed to read test listener address");

    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .expect("Test server error");
    });

    TestServer {
        base_url: format!("http://{addr}"),
    }
}

/// Start a storefront reading themes from `theme_dir`.
pub async fn spawn_storefront(theme_dir: &Path) -> TestServer {
    let config = dukkan_storefront::config::StorefrontConfig::for_data_dir(theme_dir);
    serve(dukkan_storefront::app(dukkan_storefront::state::AppState::new(config))).await
}

/// Start an admin writing themes to `theme_dir`.
pub async fn spawn_admin(theme_dir: &Path) -> TestServer {
    let config = dukkan_admin::config::AdminConfig::for_data_dir(theme_dir, ADMIN_TOKEN);
    serve(dukkan_admin::app(dukkan_admin::state::AppState::new(config))).await
}

/// A client that keeps cookies and does not follow redirects.
#[must_use]
pub fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to create HTTP client")
}

/// Log the client into the admin.
pub async fn admin_login(client: &Client, admin: &TestServer) {
    let response = client
        .post(admin.url("/login"))
        .form(&[("token", ADMIN_TOKEN)])
        .send()
        .await
        .expect("Admin login request failed");
    assert_eq!(response.status(), reqwest::StatusCode::SEE_OTHER);
}

/// Location header of a redirect.
#[must_use]
pub fn location(response: &reqwest::Response) -> String {
    response
        .headers()
        .get(reqwest::header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned()
}

/// Section keys in the order they appear in a rendered page.
#[must_use]
pub fn section_order(html: &str) -> Vec<String> {
    const MARKER: &str = "data-section=\"";
    html.split(MARKER)
        .skip(1)
        .filter_map(|chunk| chunk.split('"').next())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_order() {
        let html = r#"<div data-section="hero"></div><div data-section="footer"></div>"#;
        assert_eq!(section_order(html), ["hero", "footer"]);
    }
}
