// src/not_found/mod.rs

// Registro das rotas inexistentes acessadas
pub mod route_miss_log;
pub mod not_found_page;
pub mod not_found_router;
