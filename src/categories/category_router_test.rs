use actix_web::{http::StatusCode, test};
use serde_json::Value;

use crate::test_support::{body_text, storefront_app, test_state};

#[actix_web::test]
async fn category_page_shows_only_matching_products() {
    let state = test_state();
    let app = storefront_app!(state);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/category/women").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_text(resp).await;
    assert!(body.contains("Collection"));
    assert!(body.contains("Women"));
    assert!(body.contains("Summer Floral Dress"));
    assert!(body.contains("High-Rise Slim Jeans"));
    assert!(!body.contains("Classic Denim Jacket"));
    assert!(!body.contains("Colorful Kids Hoodie"));
    assert!(!body.contains("No products found in this category."));
}

#[actix_web::test]
async fn unknown_category_renders_empty_state() {
    let state = test_state();
    let app = storefront_app!(state);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/category/shoes").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_text(resp).await;
    assert!(body.contains("Shoes"));
    assert!(body.contains("No products found in this category."));
    assert!(!body.contains("data-product-id"));
}

#[actix_web::test]
async fn category_match_is_case_sensitive() {
    let state = test_state();
    let app = storefront_app!(state);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/category/Men").to_request()).await;
    let body = body_text(resp).await;
    assert!(body.contains("No products found in this category."));
}

#[actix_web::test]
async fn json_category_endpoints() {
    let state = test_state();
    let app = storefront_app!(state);

    let req = test::TestRequest::get().uri("/api/categories").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["body"].as_array().map(Vec::len), Some(3));
    assert_eq!(body["body"][2]["slug"], "kids");

    let req = test::TestRequest::get().uri("/api/categories/kids/products").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let names: Vec<&str> = body["body"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|p| p["name"].as_str())
        .collect();
    assert_eq!(names, vec!["Striped Cotton T-Shirt", "Colorful Kids Hoodie"]);

    let req = test::TestRequest::get().uri("/api/categories/unknown/products").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "No products found in this category.");
    assert_eq!(body["body"], serde_json::json!([]));
}
