// src/test_support.rs
//
// Utilitários para os testes das rotas.

use actix_web::{body::MessageBody, cookie::Cookie, dev::ServiceResponse, test, web};

use crate::cart::session::SESSION_COOKIE;
use crate::config::StoreConfig;
use crate::AppState;

/// Monta o app completo (rotas + página 404) sobre o estado informado.
macro_rules! storefront_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data($state.clone())
                .configure(crate::configure)
                .default_service(actix_web::web::to(crate::not_found::not_found_router::not_found)),
        )
        .await
    };
}
pub(crate) use storefront_app;

pub fn test_state() -> web::Data<AppState> {
    web::Data::new(AppState::new(StoreConfig::default()))
}

pub async fn body_text<B: MessageBody>(resp: ServiceResponse<B>) -> String {
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).expect("body is utf-8")
}

pub fn session_cookie<B>(resp: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE)
        .map(Cookie::into_owned)
}
