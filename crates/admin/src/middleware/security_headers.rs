//! Security headers for admin responses.
//!
//! The builder preview applies draft settings through inline `style`
//! attributes and a draft `<style>` block, so `style-src` allows inline
//! styles. Scripts are limited to the admin's own files; merchant custom JS
//! is never executed in the admin.

use axum::{
    extract::Request,
    http::{
        HeaderValue,
        header::{
            CACHE_CONTROL, CONTENT_SECURITY_POLICY, REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS,
            X_FRAME_OPTIONS,
        },
    },
    middleware::Next,
    response::Response,
};

/// Admin content security policy.
pub const ADMIN_CSP: &str = "default-src 'none'; \
     script-src 'self'; \
     style-src 'self' 'unsafe-inline'; \
     font-src 'self'; \
     img-src 'self' https: data:; \
     connect-src 'self'; \
     object-src 'none'; \
     base-uri 'self'; \
     form-action 'self'; \
     frame-ancestors 'none'";

/// Add security headers to all admin responses.
pub async fn security_headers_middleware(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    headers.insert(REFERRER_POLICY, HeaderValue::from_static("same-origin"));
    headers.insert(CONTENT_SECURITY_POLICY, HeaderValue::from_static(ADMIN_CSP));
    if !headers.contains_key(CACHE_CONTROL) {
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_csp_blocks_inline_scripts() {
        assert!(ADMIN_CSP.contains("script-src 'self';"));
        assert!(ADMIN_CSP.contains("style-src 'self' 'unsafe-inline'"));
        assert!(HeaderValue::from_str(ADMIN_CSP).is_ok());
    }
}
