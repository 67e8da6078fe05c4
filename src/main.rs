// src/main.rs

use actix_web::{error::InternalError, middleware, web, App, HttpResponse, HttpServer};

// Importa os módulos
mod config;     // Configuração via variáveis de ambiente
mod error;      // Erros da loja
mod shared;     // Estruturas e layout compartilhados
mod products;   // Catálogo de produtos
mod categories; // Páginas de categoria
mod cart;       // Sacola de compras
mod home;       // Página inicial
mod login;      // Login de demonstração
mod not_found;  // Página 404

#[cfg(test)]
mod test_support;

use cart::cart_store::CartStore;
use cart::cart_structs::Cart;
use config::StoreConfig;
use not_found::route_miss_log::RouteMissLog;
use products::catalog::Catalog;
use shared::shared_structs::GenericResponse;

/// Produtos (id) que já estão na sacola de uma sessão nova.
const STARTER_CART: [i32; 2] = [1, 2];

// Estado compartilhado entre as rotas: configuração, catálogo, sacolas e o
// registro de rotas inexistentes. Tudo vive em memória.
pub struct AppState {
    pub config: StoreConfig,
    pub catalog: Catalog,
    pub carts: CartStore,
    pub missed_routes: RouteMissLog,
}

impl AppState {
    pub fn new(config: StoreConfig) -> Self {
        let catalog = Catalog::sample();
        let carts = CartStore::new(starter_cart(&catalog));

        AppState {
            config,
            catalog,
            carts,
            missed_routes: RouteMissLog::default(),
        }
    }
}

fn starter_cart(catalog: &Catalog) -> Cart {
    let mut cart = Cart::default();
    for product in STARTER_CART.iter().filter_map(|id| catalog.find(*id)) {
        if let Err(e) = cart.add(product, 1) {
            tracing::warn!(error = %e, "could not seed starter cart");
        }
    }
    cart
}

/// Corpo JSON inválido também responde no envelope `GenericResponse`.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        tracing::warn!(path = %req.path(), error = %err, "rejected JSON body");
        let response = HttpResponse::BadRequest().json(GenericResponse::error(err.to_string()));
        InternalError::from_response(err, response).into()
    })
}

/// Registra todas as rotas da loja.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .app_data(json_config())

        // Páginas
        .service(home::home_router::view_home)
        .service(categories::category_router::view_category)
        .service(login::login_router::view_login)
        .service(login::login_router::submit_login)

        // Sacola
        .service(cart::cart_router::view_cart)
        .service(cart::cart_router::add_to_cart_form)
        .service(cart::cart_router::increment_item)
        .service(cart::cart_router::decrement_item)
        .service(cart::cart_router::remove_item_form)
        .service(cart::cart_router::apply_promo_form)

        // API JSON
        .service(products::product_router::list_products)
        .service(products::product_router::get_product)
        .service(categories::category_router::list_categories)
        .service(categories::category_router::list_category_products)
        .service(cart::cart_router::get_cart)
        .service(cart::cart_router::add_item_json)
        .service(cart::cart_router::update_item_json)
        .service(cart::cart_router::remove_item_json)
        .service(cart::cart_router::apply_promo_json)
        .service(login::login_router::login_json)
        .service(not_found::not_found_router::list_missed_routes);
}

// Função principal da aplicação Actix Web.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();

    let config = StoreConfig::from_env().map_err(|e| {
        tracing::error!(error = %e, "invalid configuration");
        std::io::Error::other(e)
    })?;
    let bind_addr = (config.host.clone(), config.port);

    let app_state = web::Data::new(AppState::new(config));

    tracing::info!(host = %bind_addr.0, port = bind_addr.1, "starting VIZIFIT storefront");

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(app_state.clone())
            .configure(configure)
            // Qualquer caminho sem rota cai na página 404
            .default_service(web::to(not_found::not_found_router::not_found))
    })
    .bind(bind_addr)?
    .run()
    .await
}
