// src/products/product_router.rs

use actix_web::{get, web, HttpResponse};

use crate::error::StoreError;
use crate::shared::shared_structs::GenericResponse;
use crate::AppState;

/// Rota para listar todos os produtos do catálogo.
#[get("/api/products")]
pub async fn list_products(data: web::Data<AppState>) -> HttpResponse {
    let products = data.catalog.products();
    HttpResponse::Ok().json(GenericResponse::success(
        format!("{} products found.", products.len()),
        products,
    ))
}

/// Rota para buscar um produto por ID.
#[get("/api/products/{id}")]
pub async fn get_product(data: web::Data<AppState>, path: web::Path<i32>) -> Result<HttpResponse, StoreError> {
    let id = path.into_inner();
    let product = data.catalog.find(id).ok_or(StoreError::ProductNotFound(id))?;

    Ok(HttpResponse::Ok().json(GenericResponse::success(
        format!("Product with ID {id} found."),
        product,
    )))
}

#[cfg(test)]
#[path = "product_router_test.rs"]
mod tests;
