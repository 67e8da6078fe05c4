// src/products/product_structs.rs

use bigdecimal::BigDecimal;
use serde::Serialize;

/// Produto do catálogo de exemplo. Imutável durante a execução.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: BigDecimal,
    pub image: String,
    pub category: String, // "women", "men" ou "kids"
}

impl Product {
    /// Cria um produto com o preço em centavos (4999 -> 49.99).
    pub fn new(id: i32, name: &str, price_cents: i64, image: &str, category: &str) -> Self {
        Product {
            id,
            name: name.to_string(),
            price: BigDecimal::new(price_cents.into(), 2),
            image: image.to_string(),
            category: category.to_string(),
        }
    }
}

/// Bloco de categoria exibido na página inicial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTile {
    pub name: String,
    pub slug: String,
    pub image: String,
}

impl CategoryTile {
    pub fn new(name: &str, slug: &str, image: &str) -> Self {
        CategoryTile {
            name: name.to_string(),
            slug: slug.to_string(),
            image: image.to_string(),
        }
    }

    pub fn link(&self) -> String {
        format!("/category/{}", self.slug)
    }
}
