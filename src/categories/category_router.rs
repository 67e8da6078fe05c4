// src/categories/category_router.rs

use actix_web::{get, http::header::ContentType, web, HttpResponse};

use super::category_page;
use super::category_display::{display_name, EMPTY_CATEGORY_MESSAGE};
use crate::shared::shared_structs::GenericResponse;
use crate::AppState;

/// Página de uma categoria. O parâmetro da URL é comparado exatamente com
/// a categoria dos produtos; sem resultados, a página mostra o estado vazio.
#[get("/category/{category_id}")]
pub async fn view_category(data: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let category_id = path.into_inner();
    let products: Vec<_> = data.catalog.by_category(&category_id).into_iter().cloned().collect();

    if products.is_empty() {
        tracing::debug!(category = %category_id, "category has no products");
    }

    let body = category_page::render(display_name(&category_id), products);
    HttpResponse::Ok().content_type(ContentType::html()).body(body)
}

/// Rota para listar as categorias da vitrine.
#[get("/api/categories")]
pub async fn list_categories(data: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(GenericResponse::success(
        "Categories listed successfully!",
        data.catalog.categories(),
    ))
}

/// Rota para listar os produtos de uma categoria.
#[get("/api/categories/{category_id}/products")]
pub async fn list_category_products(data: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let category_id = path.into_inner();
    let products = data.catalog.by_category(&category_id);

    let message = if products.is_empty() {
        EMPTY_CATEGORY_MESSAGE.to_string()
    } else {
        format!("{} products found in {}.", products.len(), display_name(&category_id))
    };
    HttpResponse::Ok().json(GenericResponse::success(message, products))
}

#[cfg(test)]
#[path = "category_router_test.rs"]
mod tests;
