// src/cart/cart_structs.rs

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::products::product_structs::Product;

/// Item da sacola: o produto mais a quantidade pedida (sempre >= 1).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: i32,
}

impl CartItem {
    pub fn id(&self) -> i32 {
        self.product.id
    }

    /// Preço unitário vezes a quantidade.
    pub fn line_total(&self) -> BigDecimal {
        &self.product.price * &BigDecimal::from(self.quantity)
    }
}

/// Totais da sacola. O frete é fixo e só é cobrado com subtotal positivo.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartTotals {
    pub subtotal: BigDecimal,
    pub shipping: BigDecimal,
    pub total: BigDecimal,
}

/// Sacola de compras em memória de uma sessão.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    pub items: Vec<CartItem>,
}

impl Cart {
    pub fn get(&self, id: i32) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Adiciona um produto à sacola. Se ele já estiver lá, soma a quantidade.
    pub fn add(&mut self, product: &Product, quantity: i32) -> Result<(), StoreError> {
        if quantity < 1 {
            return Err(StoreError::InvalidQuantity(quantity));
        }

        match self.items.iter_mut().find(|item| item.id() == product.id) {
            Some(item) => item.quantity = item.quantity.saturating_add(quantity),
            None => self.items.push(CartItem { product: product.clone(), quantity }),
        }
        Ok(())
    }

    /// Define a quantidade de um item. Valores abaixo de 1 são ignorados e
    /// devolvem `Ok(false)`; um item inexistente é erro.
    pub fn update_quantity(&mut self, id: i32, new_quantity: i32) -> Result<bool, StoreError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or(StoreError::CartItemNotFound(id))?;

        if new_quantity < 1 {
            return Ok(false);
        }
        item.quantity = new_quantity;
        Ok(true)
    }

    pub fn increment(&mut self, id: i32) -> Result<bool, StoreError> {
        let current = self.get(id).ok_or(StoreError::CartItemNotFound(id))?.quantity;
        self.update_quantity(id, current.saturating_add(1))
    }

    /// Diminui a quantidade em 1; com quantidade 1 nada acontece.
    pub fn decrement(&mut self, id: i32) -> Result<bool, StoreError> {
        let current = self.get(id).ok_or(StoreError::CartItemNotFound(id))?.quantity;
        self.update_quantity(id, current - 1)
    }

    /// Remove o item com o identificador informado, preservando a ordem dos demais.
    pub fn remove(&mut self, id: i32) -> Result<CartItem, StoreError> {
        let index = self
            .items
            .iter()
            .position(|item| item.id() == id)
            .ok_or(StoreError::CartItemNotFound(id))?;
        Ok(self.items.remove(index))
    }

    pub fn subtotal(&self) -> BigDecimal {
        self.items
            .iter()
            .fold(BigDecimal::from(0), |acc, item| acc + item.line_total())
    }

    pub fn totals(&self, shipping_fee: &BigDecimal) -> CartTotals {
        let subtotal = self.subtotal();
        let shipping = if subtotal > BigDecimal::from(0) {
            shipping_fee.clone()
        } else {
            BigDecimal::from(0)
        };
        let total = &subtotal + &shipping;

        CartTotals { subtotal, shipping, total }
    }
}

fn default_quantity() -> i32 {
    1
}

/// Corpo da requisição (JSON ou formulário) para adicionar um item à sacola.
#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub product_id: i32,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

/// Corpo da requisição para alterar a quantidade de um item.
#[derive(Debug, Deserialize)]
pub struct QuantityRequest {
    pub quantity: i32,
}

/// Código promocional digitado pelo usuário.
#[derive(Debug, Default, Deserialize)]
pub struct PromoRequest {
    #[serde(default)]
    pub code: String,
}

/// Conteúdo da sacola devolvido pela API.
#[derive(Debug, Serialize)]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
}

#[cfg(test)]
#[path = "cart_structs_test.rs"]
mod tests;
