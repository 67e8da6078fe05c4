// src/cart/session.rs

use actix_web::{
    cookie::{Cookie, SameSite},
    dev::Payload,
    FromRequest, HttpRequest, HttpResponseBuilder,
};
use futures::future::{ready, Ready};
use uuid::Uuid;

/// Nome do cookie que identifica a sacola do visitante.
pub const SESSION_COOKIE: &str = "vizifit_session";

/// Sessão do visitante, extraída do cookie `vizifit_session`.
/// Sem cookie (ou com um valor inválido) uma sessão nova é criada.
#[derive(Debug, Clone, Copy)]
pub struct CartSession {
    pub id: Uuid,
    pub is_new: bool,
}

impl CartSession {
    pub fn cookie(&self) -> Cookie<'static> {
        Cookie::build(SESSION_COOKIE, self.id.to_string())
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .finish()
    }

    /// Grava o cookie na resposta quando a sessão acabou de ser criada.
    pub fn attach(&self, builder: &mut HttpResponseBuilder) {
        if self.is_new {
            builder.cookie(self.cookie());
        }
    }
}

/// Extrator de sessão para Actix Web. Nunca falha.
impl FromRequest for CartSession {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let existing = req
            .cookie(SESSION_COOKIE)
            .and_then(|cookie| Uuid::parse_str(cookie.value()).ok());

        let session = match existing {
            Some(id) => CartSession { id, is_new: false },
            None => {
                let id = Uuid::new_v4();
                tracing::debug!(session = %id, "starting new cart session");
                CartSession { id, is_new: true }
            }
        };

        ready(Ok(session))
    }
}
