// src/login/login_structs.rs

use serde::Deserialize;

use crate::shared::shared_structs::Notice;

pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful! (Demo only, no actual authentication)";
pub const LOGIN_MISSING_FIELDS_MESSAGE: &str = "Please enter both email and password";

/// Dados do formulário de login (formulário HTML ou JSON).
/// Campos ausentes viram strings vazias.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default, rename = "remember-me")]
    pub remember_me: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Accepted,
    MissingFields,
}

impl LoginRequest {
    /// Só verifica se os dois campos foram preenchidos. Nenhuma credencial
    /// é conferida: qualquer par não vazio é aceito.
    pub fn check(&self) -> LoginOutcome {
        if !self.email.is_empty() && !self.password.is_empty() {
            LoginOutcome::Accepted
        } else {
            LoginOutcome::MissingFields
        }
    }

    pub fn remember_me(&self) -> bool {
        self.remember_me.is_some()
    }
}

impl LoginOutcome {
    pub fn notice(self) -> Notice {
        match self {
            LoginOutcome::Accepted => Notice::success(LOGIN_SUCCESS_MESSAGE),
            LoginOutcome::MissingFields => Notice::error(LOGIN_MISSING_FIELDS_MESSAGE),
        }
    }
}
