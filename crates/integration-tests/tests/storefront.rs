//! Shopping flows through a live storefront.

#![allow(clippy::unwrap_used)]

use dukkan_core::rtl::to_arabic_digits;
use dukkan_integration_tests::{TestServer, client, location, spawn_storefront};
use reqwest::StatusCode;

const STORE: &str = "/stores/tech-hub";

#[tokio::test]
async fn test_store_directory_lists_every_store() {
    let dir = tempfile::tempdir().unwrap();
    let storefront = spawn_storefront(dir.path()).await;

    let html = client()
        .get(storefront.url("/"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    for id in ["minimal-boutique", "tech-hub", "toy-land", "soft-keys"] {
        assert!(html.contains(&format!("/stores/{id}")), "{id}");
    }
}

#[tokio::test]
async fn test_cart_totals_with_tax() {
    let dir = tempfile::tempdir().unwrap();
    let storefront = spawn_storefront(dir.path()).await;
    let client = client();

    let response = client
        .post(storefront.url(&format!("{STORE}/cart/add")))
        .form(&[("product_id", "3"), ("quantity", "2"), ("color", "أسود")])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(location(&response).contains("notice="));

    client
        .post(storefront.url(&format!("{STORE}/cart/add")))
        .form(&[("product_id", "4")])
        .send()
        .await
        .unwrap();

    let html = client
        .get(storefront.url(&format!("{STORE}/cart")))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(html.contains(&to_arabic_digits("797.00")));
    assert!(html.contains(&to_arabic_digits("119.55")));
    assert!(html.contains(&to_arabic_digits("916.55")));

    let badge = client
        .get(storefront.url(&format!("{STORE}/cart/count")))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(badge.contains(&to_arabic_digits("3")));
}

#[tokio::test]
async fn test_missing_variant_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let storefront = spawn_storefront(dir.path()).await;
    let client = client();

    let response = client
        .post(storefront.url(&format!("{STORE}/cart/add")))
        .form(&[("product_id", "3")])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        location(&response),
        format!("{STORE}/products/3?error=error.select_color")
    );

    let badge = client
        .get(storefront.url(&format!("{STORE}/cart/count")))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(badge.contains(&to_arabic_digits("0")));
}

#[tokio::test]
async fn test_signup_password_mismatch_stores_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let storefront = spawn_storefront(dir.path()).await;
    let client = client();
    let signup = storefront.url(&format!("{STORE}/signup"));

    let response = client
        .post(&signup)
        .form(&[
            ("name", "سارة"),
            ("email", "sara@example.sa"),
            ("password", "correct-horse-1"),
            ("confirm_password", "correct-horse-2"),
            ("accept_terms", "on"),
        ])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.text().await.unwrap().contains("كلمتا المرور غير متطابقتين"));

    // No account was created, so logging in fails
    let response = client
        .post(storefront.url(&format!("{STORE}/login")))
        .form(&[("email", "sara@example.sa"), ("password", "correct-horse-1")])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // And the same email is still free
    let response = client
        .post(&signup)
        .form(&[
            ("name", "سارة"),
            ("email", "sara@example.sa"),
            ("password", "correct-horse-1"),
            ("confirm_password", "correct-horse-1"),
            ("accept_terms", "on"),
        ])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_home_renders_default_layout_and_slider() {
    let dir = tempfile::tempdir().unwrap();
    let storefront = spawn_storefront(dir.path()).await;

    let html = client()
        .get(storefront.url(STORE))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(
        dukkan_integration_tests::section_order(&html),
        ["header", "hero", "categories", "featured", "newsletter", "footer"]
    );
    assert!(html.contains("data-slider"));
    assert!(html.contains("data-interval=\""));
    assert!(html.contains("dir=\"rtl\""));
}

fn shipping_form(email: &str) -> Vec<(&'static str, String)> {
    vec![
        ("full_name", "خالد العتيبي".to_owned()),
        ("email", email.to_owned()),
        ("phone", "+966 55 123 4567".to_owned()),
        ("city", "الرياض".to_owned()),
        ("district", "العليا".to_owned()),
        ("street", "شارع التحلية".to_owned()),
    ]
}

const CARD: [(&str, &str); 5] = [
    ("method", "card"),
    ("card_name", "KHALID"),
    ("card_number", "4111 1111 1111 1111"),
    ("expiry", "12/30"),
    ("cvv", "123"),
];

async fn get_text(client: &reqwest::Client, url: String) -> String {
    client.get(url).send().await.unwrap().text().await.unwrap()
}

async fn checkout_step(client: &reqwest::Client, storefront: &TestServer) -> String {
    get_text(client, storefront.url(&format!("{STORE}/checkout"))).await
}

#[tokio::test]
async fn test_checkout_wizard_places_order() {
    let dir = tempfile::tempdir().unwrap();
    let storefront = spawn_storefront(dir.path()).await;
    let client = client();
    let url = |path: &str| storefront.url(&format!("{STORE}{path}"));

    client
        .post(url("/cart/add"))
        .form(&[("product_id", "4")])
        .send()
        .await
        .unwrap();
    assert!(checkout_step(&client, &storefront).await.contains("data-step=\"shipping\""));

    let response = client
        .post(url("/checkout/shipping"))
        .form(&shipping_form("khalid@example.sa"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), format!("{STORE}/checkout"));
    assert!(checkout_step(&client, &storefront).await.contains("data-step=\"payment\""));

    let response = client.post(url("/checkout/payment")).form(&CARD).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(checkout_step(&client, &storefront).await.contains("data-step=\"review\""));

    // Back on step 2 the order cannot be placed
    client.post(url("/checkout/back")).send().await.unwrap();
    let response = client
        .post(url("/checkout/place-order"))
        .form(&[("accept_terms", "on")])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.text().await.unwrap().contains("data-step=\"payment\""));

    client.post(url("/checkout/payment")).form(&CARD).send().await.unwrap();

    let response = client
        .post(url("/checkout/place-order"))
        .form(&[("notes", "")])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = response.text().await.unwrap();
    assert!(html.contains("يجب الموافقة على الشروط والأحكام"));
    assert!(html.contains("data-step=\"review\""));

    let response = client
        .post(url("/checkout/place-order"))
        .form(&[("accept_terms", "on")])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), format!("{STORE}/checkout/complete"));

    let html = get_text(&client, url("/checkout/complete")).await;
    assert!(html.contains("DK-"));
    assert!(html.contains(&to_arabic_digits("199.00")));
    assert!(html.contains(&to_arabic_digits("29.85")));

    let badge = get_text(&client, url("/cart/count")).await;
    assert!(badge.contains(&to_arabic_digits("0")));
}

#[tokio::test]
async fn test_checkout_account_password_mismatch_stores_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let storefront = spawn_storefront(dir.path()).await;
    let client = client();
    let url = |path: &str| storefront.url(&format!("{STORE}{path}"));

    client
        .post(url("/cart/add"))
        .form(&[("product_id", "4")])
        .send()
        .await
        .unwrap();

    let mut form = shipping_form("nora@example.sa");
    form.push(("create_account", "on".to_owned()));
    form.push(("password", "correct-horse-1".to_owned()));
    form.push(("confirm_password", "correct-horse-2".to_owned()));
    let response = client
        .post(url("/checkout/shipping"))
        .form(&form)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = response.text().await.unwrap();
    assert!(html.contains("كلمتا المرور غير متطابقتين"));
    assert!(html.contains("data-step=\"shipping\""));

    // Still on step 1 and not logged in
    assert!(checkout_step(&client, &storefront).await.contains("data-step=\"shipping\""));
    let home = get_text(&client, url("")).await;
    assert!(!home.contains(&format!("{STORE}/logout")));

    let response = client
        .post(url("/login"))
        .form(&[("email", "nora@example.sa"), ("password", "correct-horse-1")])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_checkout_duplicate_email_keeps_first_step() {
    let dir = tempfile::tempdir().unwrap();
    let storefront = spawn_storefront(dir.path()).await;
    let url = |path: &str| storefront.url(&format!("{STORE}{path}"));

    let response = client()
        .post(url("/signup"))
        .form(&[
            ("name", "ريم"),
            ("email", "reem@example.sa"),
            ("password", "correct-horse-1"),
            ("confirm_password", "correct-horse-1"),
            ("accept_terms", "on"),
        ])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let shopper = client();
    shopper
        .post(url("/cart/add"))
        .form(&[("product_id", "4")])
        .send()
        .await
        .unwrap();

    let mut form = shipping_form("reem@example.sa");
    form.push(("create_account", "on".to_owned()));
    form.push(("password", "another-horse-9".to_owned()));
    form.push(("confirm_password", "another-horse-9".to_owned()));
    let response = shopper
        .post(url("/checkout/shipping"))
        .form(&form)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(
        response
            .text()
            .await
            .unwrap()
            .contains("يوجد حساب مسجل بهذا البريد الإلكتروني")
    );
    assert!(checkout_step(&shopper, &storefront).await.contains("data-step=\"shipping\""));
}
