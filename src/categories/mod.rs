// src/categories/mod.rs

pub mod category_display;
pub mod category_page;
pub mod category_router;
