// src/not_found/not_found_router.rs

use actix_web::{get, http::header::ContentType, web, HttpRequest, HttpResponse};

use super::not_found_page;
use crate::shared::shared_structs::GenericResponse;
use crate::AppState;

/// Serviço padrão: responde a qualquer caminho sem rota com a página 404
/// e registra o caminho acessado.
pub async fn not_found(req: HttpRequest, data: web::Data<AppState>) -> HttpResponse {
    let path = req.path();
    tracing::error!(path = %path, method = %req.method(), "404 Error: User attempted to access non-existent route");
    data.missed_routes.record(path);

    HttpResponse::NotFound()
        .content_type(ContentType::html())
        .body(not_found_page::render())
}

/// Rota para consultar os últimos caminhos inexistentes acessados.
#[get("/api/missed-routes")]
pub async fn list_missed_routes(data: web::Data<AppState>) -> HttpResponse {
    let paths = data.missed_routes.recent();
    HttpResponse::Ok().json(GenericResponse::success(
        format!("{} unmatched paths recorded.", paths.len()),
        paths,
    ))
}

#[cfg(test)]
#[path = "not_found_router_test.rs"]
mod tests;
