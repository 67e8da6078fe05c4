use actix_web::{http::StatusCode, test};
use serde_json::Value;

use crate::test_support::{body_text, storefront_app, test_state};

#[actix_web::test]
async fn unknown_route_renders_404_and_records_path() {
    let state = test_state();
    let app = storefront_app!(state);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/products").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = body_text(resp).await;
    assert!(body.contains("404"));
    assert!(body.contains("Page Not Found"));
    assert!(body.contains("Return to Home"));

    assert_eq!(state.missed_routes.recent(), vec!["/products"]);
}

#[actix_web::test]
async fn wrong_method_falls_through_to_404() {
    let state = test_state();
    let app = storefront_app!(state);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/cart/promo").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(state.missed_routes.recent(), vec!["/cart/promo"]);
}

#[actix_web::test]
async fn missed_routes_are_listed_by_the_api() {
    let state = test_state();
    let app = storefront_app!(state);

    for uri in ["/checkout", "/category"] {
        test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
    }

    let req = test::TestRequest::get().uri("/api/missed-routes").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["body"], serde_json::json!(["/checkout", "/category"]));
}
