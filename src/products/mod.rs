// src/products/mod.rs

pub mod product_structs;
pub mod catalog;
pub mod product_router;
