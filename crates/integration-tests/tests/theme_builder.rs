//! Theme Builder flows: admin changes, saves, and the storefront picking
//! them up from the shared theme directory.

#![allow(clippy::unwrap_used)]

use dukkan_integration_tests::{
    TestServer, admin_login, client, location, section_order, spawn_admin, spawn_storefront,
};
use reqwest::{Client, StatusCode};

const BUILDER: &str = "/stores/tech-hub/theme-builder";

async fn fetch_post(
    client: &Client,
    admin: &TestServer,
    path: &str,
    form: &[(&str, &str)],
) -> reqwest::Response {
    client
        .post(admin.url(&format!("{BUILDER}{path}")))
        .header("x-requested-with", "fetch")
        .form(form)
        .send()
        .await
        .unwrap()
}

async fn save(client: &Client, admin: &TestServer) -> u64 {
    let response = fetch_post(client, admin, "/save", &[]).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = response.json().await.unwrap();
    json["version"].as_u64().unwrap()
}

async fn storefront_home(storefront: &TestServer) -> String {
    client()
        .get(storefront.url("/stores/tech-hub"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap()
}

#[tokio::test]
async fn test_builder_requires_login() {
    let dir = tempfile::tempdir().unwrap();
    let admin = spawn_admin(dir.path()).await;

    let response = client().get(admin.url(BUILDER)).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");

    let response = fetch_post(&client(), &admin, "/reset", &[]).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_device_switch_resizes_frame() {
    let dir = tempfile::tempdir().unwrap();
    let admin = spawn_admin(dir.path()).await;
    let client = client();
    admin_login(&client, &admin).await;

    let html = fetch_post(&client, &admin, "/device", &[("device", "mobile")])
        .await
        .text()
        .await
        .unwrap();
    assert!(html.contains("data-width=\"375\""));
    assert!(html.contains("data-height=\"667\""));

    // Plain form posts redirect back, and the page keeps the device
    let response = client
        .post(admin.url(&format!("{BUILDER}/device")))
        .form(&[("device", "tablet")])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), BUILDER);

    let page = client
        .get(admin.url(BUILDER))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(page.contains("data-width=\"768\""));

    let response = fetch_post(&client, &admin, "/device", &[("device", "watch")]).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_saved_layout_reaches_storefront() {
    let dir = tempfile::tempdir().unwrap();
    let admin = spawn_admin(dir.path()).await;
    let client = client();
    admin_login(&client, &admin).await;

    let preview = fetch_post(&client, &admin, "/layout/reorder", &[("from", "4"), ("to", "0")])
        .await
        .text()
        .await
        .unwrap();
    let expected = ["newsletter", "header", "hero", "categories", "featured", "footer"];
    assert_eq!(section_order(&preview), expected);

    assert_eq!(save(&client, &admin).await, 1);
    assert!(dir.path().join("tech-hub.json").exists());

    let storefront = spawn_storefront(dir.path()).await;
    let home = storefront_home(&storefront).await;
    let mut order = section_order(&home);
    assert_eq!(order, expected);

    // Same set of sections, only reordered
    order.sort();
    let mut all = expected.map(str::to_owned).to_vec();
    all.sort();
    assert_eq!(order, all);
}

#[tokio::test]
async fn test_invalid_reorder_leaves_draft() {
    let dir = tempfile::tempdir().unwrap();
    let admin = spawn_admin(dir.path()).await;
    let client = client();
    admin_login(&client, &admin).await;

    let response =
        fetch_post(&client, &admin, "/layout/reorder", &[("from", "9"), ("to", "0")]).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response =
        fetch_post(&client, &admin, "/layout/order", &[("order", "hero,header")]).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let preview = client
        .get(admin.url(&format!("{BUILDER}/preview")))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(
        section_order(&preview),
        ["header", "hero", "categories", "featured", "newsletter", "footer"]
    );
}

#[tokio::test]
async fn test_slider_settings_reach_storefront() {
    let dir = tempfile::tempdir().unwrap();
    let admin = spawn_admin(dir.path()).await;
    let client = client();
    admin_login(&client, &admin).await;

    for (field, value) in [("slide_interval_ms", "7000"), ("slider_autoplay", "false")] {
        let response = fetch_post(
            &client,
            &admin,
            "/settings",
            &[("category", "widgets"), ("field", field), ("value", value)],
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK, "{field}");
    }

    // Out of bounds is rejected
    let response = fetch_post(
        &client,
        &admin,
        "/settings",
        &[("category", "widgets"), ("field", "slide_interval_ms"), ("value", "10")],
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    save(&client, &admin).await;

    let storefront = spawn_storefront(dir.path()).await;
    let home = storefront_home(&storefront).await;
    assert!(home.contains("data-interval=\"7000\""));
    assert!(home.contains("data-autoplay=\"false\""));
}

#[tokio::test]
async fn test_auto_preview_off_acknowledges_changes() {
    let dir = tempfile::tempdir().unwrap();
    let admin = spawn_admin(dir.path()).await;
    let client = client();
    admin_login(&client, &admin).await;

    fetch_post(&client, &admin, "/auto-preview", &[]).await;
    let response = fetch_post(&client, &admin, "/reset", &[]).await;
    let json: serde_json::Value = response.json().await.unwrap();
    assert_eq!(json["ok"], true);
    assert_eq!(json["dirty"], true);

    let response = fetch_post(&client, &admin, "/auto-preview", &[("enabled", "on")]).await;
    assert!(response.text().await.unwrap().contains("preview-frame"));
}

#[tokio::test]
async fn test_export_import_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let admin = spawn_admin(dir.path()).await;
    let client = client();
    admin_login(&client, &admin).await;

    fetch_post(&client, &admin, "/theme", &[("theme", "luxe")]).await;
    let response = client
        .get(admin.url(&format!("{BUILDER}/export")))
        .send()
        .await
        .unwrap();
    assert!(
        response
            .headers()
            .get(reqwest::header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap()
            .contains("tech-hub-theme.json")
    );
    let document = response.text().await.unwrap();
    assert!(document.contains("\"luxe\""));

    // Another store's builder refuses it
    let response = client
        .post(admin.url("/stores/toy-land/theme-builder/import"))
        .header("x-requested-with", "fetch")
        .form(&[("document", document.as_str())])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = fetch_post(&client, &admin, "/reset", &[]).await;
    assert_eq!(response.status(), StatusCode::OK);
    let response =
        fetch_post(&client, &admin, "/import", &[("document", document.as_str())]).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.text().await.unwrap().contains("theme-luxe"));
}

#[tokio::test]
async fn test_import_rejects_partial_layout() {
    let dir = tempfile::tempdir().unwrap();
    let admin = spawn_admin(dir.path()).await;
    let client = client();
    admin_login(&client, &admin).await;

    let exported: serde_json::Value = client
        .get(admin.url(&format!("{BUILDER}/export")))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    for layout in [
        serde_json::json!([]),
        serde_json::json!([{ "id": "footer", "name": "التذييل" }]),
    ] {
        let mut document = exported.clone();
        document["layout"] = layout;
        let document = document.to_string();
        let response =
            fetch_post(&client, &admin, "/import", &[("document", document.as_str())]).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    let html = client
        .get(admin.url(&format!("{BUILDER}/preview")))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(
        section_order(&html),
        ["header", "hero", "categories", "featured", "newsletter", "footer"]
    );
}

#[tokio::test]
async fn test_dashboard_shows_saved_version() {
    let dir = tempfile::tempdir().unwrap();
    let admin = spawn_admin(dir.path()).await;
    let client = client();
    admin_login(&client, &admin).await;

    save(&client, &admin).await;
    assert_eq!(save(&client, &admin).await, 2);

    let html = client
        .get(admin.url("/"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(html.contains("v2"));
    assert!(html.contains(BUILDER));

    let response = client.post(admin.url("/logout")).send().await.unwrap();
    assert_eq!(location(&response), "/login");
    let response = client.get(admin.url("/")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}
