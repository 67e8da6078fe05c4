// src/login/login_router.rs

use actix_web::{get, http::header::ContentType, post, web, HttpResponse};

use super::login_page;
use super::login_structs::{LoginOutcome, LoginRequest};
use crate::shared::shared_structs::GenericResponse;

/// Rota que exibe o formulário de login.
#[get("/login")]
pub async fn view_login() -> HttpResponse {
    let body = login_page::render(String::new(), false, None);
    HttpResponse::Ok().content_type(ContentType::html()).body(body)
}

/// Envio do formulário de login. Demonstração: nenhuma credencial é verificada.
#[post("/login")]
pub async fn submit_login(form: web::Form<LoginRequest>) -> HttpResponse {
    let outcome = form.check();
    tracing::info!(accepted = outcome == LoginOutcome::Accepted, "login form submitted");

    let body = login_page::render(form.email.clone(), form.remember_me(), Some(outcome.notice()));
    HttpResponse::Ok().content_type(ContentType::html()).body(body)
}

/// Rota de login para a API JSON.
#[post("/api/login")]
pub async fn login_json(request: web::Json<LoginRequest>) -> HttpResponse {
    let outcome = request.check();
    let notice = outcome.notice();

    match outcome {
        LoginOutcome::Accepted => HttpResponse::Ok().json(GenericResponse::ok(notice.message)),
        LoginOutcome::MissingFields => HttpResponse::BadRequest().json(GenericResponse::error(notice.message)),
    }
}

#[cfg(test)]
#[path = "login_router_test.rs"]
mod tests;
