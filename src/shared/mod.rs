// src/shared/mod.rs

// Estruturas comuns (resposta padrão da API, avisos, formatação de preço)
pub mod shared_structs;
// Componentes de layout usados por todas as páginas
pub mod layout;
