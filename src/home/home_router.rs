// src/home/home_router.rs

use actix_web::{get, http::header::ContentType, web, HttpResponse};

use super::home_page;
use crate::AppState;

/// Página inicial: categorias e produtos em destaque.
#[get("/")]
pub async fn view_home(data: web::Data<AppState>) -> HttpResponse {
    let body = home_page::render(data.catalog.categories().to_vec(), data.catalog.featured().to_vec());
    HttpResponse::Ok().content_type(ContentType::html()).body(body)
}

#[cfg(test)]
#[path = "home_router_test.rs"]
mod tests;
