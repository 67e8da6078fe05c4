// src/config.rs
//
// Configuração lida de variáveis de ambiente, com valores padrão para rodar
// a demonstração localmente sem nenhuma variável definida.

use std::str::FromStr;

use bigdecimal::BigDecimal;

use crate::error::StoreError;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_SHIPPING_FEE: &str = "10.00";
pub const DEFAULT_PROMO_CODE: &str = "discount";

#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    pub host: String,
    pub port: u16,
    /// Frete fixo cobrado sempre que a sacola não está vazia.
    pub shipping_fee: BigDecimal,
    /// Único código promocional aceito (comparação sem diferenciar maiúsculas).
    pub promo_code: String,
}

impl StoreConfig {
    /// Monta a configuração a partir das variáveis de ambiente.
    ///
    /// Opcionais:
    /// - `HOST`: padrão `127.0.0.1`
    /// - `PORT`: padrão `8080`
    /// - `SHIPPING_FEE`: decimal não negativo, padrão `10.00`
    /// - `PROMO_CODE`: padrão `discount`
    pub fn from_env() -> Result<Self, StoreError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let shipping_fee = parse_shipping_fee(std::env::var("SHIPPING_FEE").ok().as_deref())?;
        let promo_code = parse_promo_code(std::env::var("PROMO_CODE").ok().as_deref())?;

        Ok(StoreConfig { host, port, shipping_fee, promo_code })
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            shipping_fee: BigDecimal::new(1000i64.into(), 2),
            promo_code: DEFAULT_PROMO_CODE.to_string(),
        }
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, StoreError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value.trim().parse::<u16>().map_err(|e| StoreError::Config {
            var: "PORT",
            reason: format!("{value:?} is not a valid port ({e})"),
        }),
    }
}

fn parse_shipping_fee(raw: Option<&str>) -> Result<BigDecimal, StoreError> {
    let value = raw.unwrap_or(DEFAULT_SHIPPING_FEE).trim();
    let fee = BigDecimal::from_str(value).map_err(|e| StoreError::Config {
        var: "SHIPPING_FEE",
        reason: format!("{value:?} is not a decimal ({e})"),
    })?;

    if fee < BigDecimal::from(0) {
        return Err(StoreError::Config {
            var: "SHIPPING_FEE",
            reason: format!("{value:?} is negative"),
        });
    }
    Ok(fee)
}

fn parse_promo_code(raw: Option<&str>) -> Result<String, StoreError> {
    match raw {
        None => Ok(DEFAULT_PROMO_CODE.to_string()),
        Some(value) if value.is_empty() => Err(StoreError::Config {
            var: "PROMO_CODE",
            reason: "must not be empty".to_string(),
        }),
        Some(value) => Ok(value.to_string()),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
