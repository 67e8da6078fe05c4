// src/error.rs

use actix_web::{http::StatusCode, HttpResponse, ResponseError};

use crate::shared::shared_structs::GenericResponse;

/// Erros da loja. Nas rotas JSON viram a resposta padrão `GenericResponse`
/// com o status HTTP correspondente; nas páginas viram um aviso de erro.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("invalid value for {var}: {reason}")]
    Config { var: &'static str, reason: String },
    #[error("Product with ID {0} not found.")]
    ProductNotFound(i32),
    #[error("Item with ID {0} is not in your cart.")]
    CartItemNotFound(i32),
    #[error("Quantity must be at least 1, got {0}.")]
    InvalidQuantity(i32),
}

impl ResponseError for StoreError {
    fn status_code(&self) -> StatusCode {
        match self {
            StoreError::ProductNotFound(_) | StoreError::CartItemNotFound(_) => StatusCode::NOT_FOUND,
            StoreError::InvalidQuantity(_) => StatusCode::BAD_REQUEST,
            StoreError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(GenericResponse::error(self.to_string()))
    }
}
