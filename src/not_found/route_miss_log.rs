// src/not_found/route_miss_log.rs

use std::collections::VecDeque;
use std::sync::{PoisonError, RwLock};

/// Quantos caminhos inexistentes ficam guardados.
pub const MISS_LOG_CAPACITY: usize = 100;

/// Últimos caminhos acessados que não correspondem a nenhuma rota.
/// O mais antigo é descartado quando a capacidade é atingida.
pub struct RouteMissLog {
    paths: RwLock<VecDeque<String>>,
    capacity: usize,
}

impl Default for RouteMissLog {
    fn default() -> Self {
        RouteMissLog::with_capacity(MISS_LOG_CAPACITY)
    }
}

impl RouteMissLog {
    pub fn with_capacity(capacity: usize) -> Self {
        RouteMissLog {
            paths: RwLock::new(VecDeque::with_capacity(capacity)),
            capacity: capacity.max(1),
        }
    }

    pub fn record(&self, path: &str) {
        let mut paths = self.paths.write().unwrap_or_else(PoisonError::into_inner);
        if paths.len() == self.capacity {
            paths.pop_front();
        }
        paths.push_back(path.to_string());
    }

    /// Caminhos registrados, do mais antigo para o mais recente.
    pub fn recent(&self) -> Vec<String> {
        self.paths
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }
}
