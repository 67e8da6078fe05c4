// src/cart/mod.rs

// Estruturas da sacola (itens, totais, requisições)
pub mod cart_structs;
// Sacolas em memória, uma por sessão
pub mod cart_store;
// Extrator do cookie de sessão
pub mod session;
// Verificação do código promocional
pub mod promo;
// Página HTML da sacola
pub mod cart_page;
// Rotas da sacola (páginas e API)
pub mod cart_router;
