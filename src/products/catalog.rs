// src/products/catalog.rs
//
// Catálogo de exemplo compilado no binário. Não há banco de dados: os
// produtos e categorias abaixo fazem o papel do backend.

use super::product_structs::{CategoryTile, Product};

/// Quantidade de produtos em destaque na página inicial.
pub const FEATURED_COUNT: usize = 4;

const IMAGE_PARAMS: &str = "ixlib=rb-4.0.3&q=80&fm=jpg&crop=entropy&cs=tinysrgb&w=400";

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/{photo}?{IMAGE_PARAMS}")
}

pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<CategoryTile>,
}

impl Catalog {
    pub fn new(products: Vec<Product>, categories: Vec<CategoryTile>) -> Self {
        Catalog { products, categories }
    }

    /// Os seis produtos e as três categorias da vitrine de demonstração.
    pub fn sample() -> Self {
        let products = vec![
            Product::new(1, "Summer Floral Dress", 4999, &unsplash("photo-1515372039744-b13f739c273a"), "women"),
            Product::new(2, "Classic Denim Jacket", 7999, &unsplash("photo-1591213954196-2d0ccb3f8d4c"), "men"),
            Product::new(3, "Striped Cotton T-Shirt", 2499, &unsplash("photo-1576566588028-4147f3842f27"), "kids"),
            Product::new(4, "High-Rise Slim Jeans", 5999, &unsplash("photo-1604176424619-ec9c5df513ee"), "women"),
            Product::new(5, "Casual Oxford Shirt", 4599, &unsplash("photo-1626497764746-6dc36546b388"), "men"),
            Product::new(6, "Colorful Kids Hoodie", 2999, &unsplash("photo-1622290291468-a28f7a7dc6a8"), "kids"),
        ];

        let categories = vec![
            CategoryTile::new("Women", "women", &unsplash("photo-1483985988355-763728e1935b")),
            CategoryTile::new("Men", "men", &unsplash("photo-1552374196-1ab2a1c593e8")),
            CategoryTile::new("Kids", "kids", &unsplash("photo-1503919545889-aef636e10ad4")),
        ];

        Catalog::new(products, categories)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[CategoryTile] {
        &self.categories
    }

    pub fn find(&self, id: i32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Filtra os produtos pelo rótulo exato da categoria.
    /// Uma categoria desconhecida devolve uma lista vazia.
    pub fn by_category(&self, category: &str) -> Vec<&Product> {
        self.products.iter().filter(|p| p.category == category).collect()
    }

    pub fn featured(&self) -> &[Product] {
        &self.products[..FEATURED_COUNT.min(self.products.len())]
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
