// src/login/mod.rs

// Formulário de login e validação (apenas demonstração, sem autenticação)
pub mod login_structs;
pub mod login_page;
pub mod login_router;
