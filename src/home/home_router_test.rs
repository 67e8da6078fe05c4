use actix_web::{http::StatusCode, test};

use crate::test_support::{body_text, storefront_app, test_state};

#[actix_web::test]
async fn home_page_lists_categories_and_featured_products() {
    let state = test_state();
    let app = storefront_app!(state);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_text(resp).await;
    assert!(body.contains("New Season Arrivals"));
    assert!(body.contains("Shop by Category"));
    for link in ["/category/women", "/category/men", "/category/kids"] {
        assert!(body.contains(link), "{link}");
    }

    // Os quatro primeiros produtos aparecem em destaque
    for name in ["Summer Floral Dress", "Classic Denim Jacket", "Striped Cotton T-Shirt", "High-Rise Slim Jeans"] {
        assert!(body.contains(name), "{name}");
    }
    assert!(!body.contains("Casual Oxford Shirt"));
    assert!(body.contains("$59.99"));

    // Cartões de categoria e o formulário "Add to Cart" de cada produto
    assert!(body.contains(r#"<a href="/category/kids" class="relative"#));
    assert!(body.contains(r#"data-product-id="3""#));
    assert!(body.contains(r#"name="product_id" value="3""#));
}

#[actix_web::test]
async fn home_page_does_not_start_a_session() {
    let state = test_state();
    let app = storefront_app!(state);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert!(resp.response().cookies().next().is_none());
}
