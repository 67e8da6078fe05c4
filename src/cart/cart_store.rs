// src/cart/cart_store.rs

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use std::time::Instant;

use uuid::Uuid;

use super::cart_structs::Cart;
use crate::shared::shared_structs::Notice;

/// Número máximo de sacolas mantidas em memória ao mesmo tempo.
pub const MAX_CARTS: usize = 10_000;

/// Aviso guardado por um formulário da sacola e exibido uma única vez,
/// na próxima visita a `/cart`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub notice: Notice,
    // Código promocional digitado, mantido no campo do formulário
    pub promo_code: String,
}

impl Flash {
    pub fn new(notice: Notice) -> Self {
        Flash { notice, promo_code: String::new() }
    }
}

struct Entry {
    cart: Cart,
    flash: Option<Flash>,
    touched: Instant,
}

/// Sacolas em memória, uma por sessão. Nada é persistido: reiniciar o
/// processo esvazia todas as sacolas.
pub struct CartStore {
    carts: RwLock<HashMap<Uuid, Entry>>,
    // Conteúdo inicial de uma sessão nova
    seed: Cart,
    capacity: usize,
}

impl CartStore {
    pub fn new(seed: Cart) -> Self {
        Self::with_capacity(seed, MAX_CARTS)
    }

    pub fn with_capacity(seed: Cart, capacity: usize) -> Self {
        CartStore {
            carts: RwLock::new(HashMap::new()),
            seed,
            capacity: capacity.max(1),
        }
    }

    /// Cópia da sacola da sessão (ou da sacola inicial, se a sessão ainda não tem uma).
    pub fn snapshot(&self, session: Uuid) -> Cart {
        let carts = self.carts.read().unwrap_or_else(PoisonError::into_inner);
        carts.get(&session).map_or_else(|| self.seed.clone(), |entry| entry.cart.clone())
    }

    /// Executa `f` com acesso exclusivo à sacola da sessão, criando-a se necessário.
    pub fn with_cart<R>(&self, session: Uuid, f: impl FnOnce(&mut Cart) -> R) -> R {
        self.with_entry(session, |entry| f(&mut entry.cart))
    }

    /// Guarda o aviso da sessão, substituindo um que ainda não foi exibido.
    pub fn set_flash(&self, session: Uuid, flash: Flash) {
        self.with_entry(session, |entry| entry.flash = Some(flash));
    }

    /// Retira o aviso da sessão; uma segunda chamada devolve `None`.
    pub fn take_flash(&self, session: Uuid) -> Option<Flash> {
        let mut carts = self.carts.write().unwrap_or_else(PoisonError::into_inner);
        carts.get_mut(&session).and_then(|entry| entry.flash.take())
    }

    fn with_entry<R>(&self, session: Uuid, f: impl FnOnce(&mut Entry) -> R) -> R {
        let mut carts = self.carts.write().unwrap_or_else(PoisonError::into_inner);

        if !carts.contains_key(&session) && carts.len() >= self.capacity {
            evict_oldest(&mut carts);
        }

        let entry = carts.entry(session).or_insert_with(|| Entry {
            cart: self.seed.clone(),
            flash: None,
            touched: Instant::now(),
        });
        entry.touched = Instant::now();
        f(entry)
    }
}

fn evict_oldest(carts: &mut HashMap<Uuid, Entry>) {
    let oldest = carts
        .iter()
        .min_by_key(|(_, entry)| entry.touched)
        .map(|(id, _)| *id);

    if let Some(id) = oldest {
        tracing::debug!(session = %id, "evicting least recently used cart");
        carts.remove(&id);
    }
}

#[cfg(test)]
#[path = "cart_store_test.rs"]
mod tests;
