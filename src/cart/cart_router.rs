// src/cart/cart_router.rs

use actix_web::{
    delete, get,
    http::header::{self, ContentType},
    patch, post, web, HttpResponse,
};

use super::cart_page;
use super::cart_store::Flash;
use super::cart_structs::{AddItemRequest, CartResponse, PromoRequest, QuantityRequest};
use super::promo::check_promo_code;
use super::session::CartSession;
use crate::error::StoreError;
use crate::shared::shared_structs::{GenericResponse, Notice};
use crate::AppState;

pub const ITEM_REMOVED_MESSAGE: &str = "Item removed from cart";

const CART_PATH: &str = "/cart";

/// Guarda o aviso da ação e redireciona (303) para a sacola, para que
/// recarregar a página não reenvie o formulário.
fn redirect_to_cart(data: &AppState, session: &CartSession, flash: Option<Flash>) -> HttpResponse {
    if let Some(flash) = flash {
        data.carts.set_flash(session.id, flash);
    }

    let mut builder = HttpResponse::SeeOther();
    session.attach(&mut builder);
    builder.insert_header((header::LOCATION, CART_PATH)).finish()
}

fn cart_json(data: &AppState, session: &CartSession, message: String) -> HttpResponse {
    let cart = data.carts.snapshot(session.id);
    let totals = cart.totals(&data.config.shipping_fee);

    let mut builder = HttpResponse::Ok();
    session.attach(&mut builder);
    builder.json(GenericResponse::success(message, CartResponse { items: cart.items, totals }))
}

// --- Páginas da sacola ---

/// Rota para exibir a sacola, com o aviso pendente da sessão (se houver).
#[get("/cart")]
pub async fn view_cart(data: web::Data<AppState>, session: CartSession) -> HttpResponse {
    let flash = data.carts.take_flash(session.id);
    let cart = data.carts.snapshot(session.id);
    let totals = cart.totals(&data.config.shipping_fee);

    let (notice, promo_code) = match flash {
        Some(Flash { notice, promo_code }) => (Some(notice), promo_code),
        None => (None, String::new()),
    };
    let body = cart_page::render(cart.items, totals, notice, promo_code);

    let mut builder = HttpResponse::Ok();
    session.attach(&mut builder);
    builder.content_type(ContentType::html()).body(body)
}

/// Rota do botão "Add to Cart" das vitrines.
#[post("/cart/items")]
pub async fn add_to_cart_form(
    data: web::Data<AppState>,
    session: CartSession,
    form: web::Form<AddItemRequest>,
) -> HttpResponse {
    let notice = match add_item(&data, &session, &form) {
        Ok(name) => Notice::success(format!("{name} added to cart")),
        Err(e) => Notice::error(e.to_string()),
    };
    redirect_to_cart(&data, &session, Some(Flash::new(notice)))
}

#[post("/cart/items/{id}/increment")]
pub async fn increment_item(data: web::Data<AppState>, session: CartSession, path: web::Path<i32>) -> HttpResponse {
    let id = path.into_inner();
    let result = data.carts.with_cart(session.id, |cart| cart.increment(id));
    let flash = result.err().map(|e| Flash::new(Notice::error(e.to_string())));

    redirect_to_cart(&data, &session, flash)
}

/// Diminui a quantidade; com quantidade 1 a sacola fica como está.
#[post("/cart/items/{id}/decrement")]
pub async fn decrement_item(data: web::Data<AppState>, session: CartSession, path: web::Path<i32>) -> HttpResponse {
    let id = path.into_inner();
    let result = data.carts.with_cart(session.id, |cart| cart.decrement(id));
    let flash = result.err().map(|e| Flash::new(Notice::error(e.to_string())));

    redirect_to_cart(&data, &session, flash)
}

#[post("/cart/items/{id}/remove")]
pub async fn remove_item_form(data: web::Data<AppState>, session: CartSession, path: web::Path<i32>) -> HttpResponse {
    let id = path.into_inner();
    let notice = match data.carts.with_cart(session.id, |cart| cart.remove(id)) {
        Ok(item) => {
            tracing::info!(session = %session.id, product_id = id, product = %item.product.name, "item removed from cart");
            Notice::success(ITEM_REMOVED_MESSAGE)
        }
        Err(e) => Notice::error(e.to_string()),
    };

    redirect_to_cart(&data, &session, Some(Flash::new(notice)))
}

/// Aplica o código promocional. O código digitado continua no campo.
#[post("/cart/promo")]
pub async fn apply_promo_form(
    data: web::Data<AppState>,
    session: CartSession,
    form: web::Form<PromoRequest>,
) -> HttpResponse {
    let PromoRequest { code } = form.into_inner();
    let outcome = check_promo_code(&code, &data.config.promo_code);
    tracing::info!(session = %session.id, applied = outcome.is_applied(), "promo code submitted");

    let flash = Flash { notice: outcome.notice(), promo_code: code };
    redirect_to_cart(&data, &session, Some(flash))
}

fn add_item(data: &AppState, session: &CartSession, request: &AddItemRequest) -> Result<String, StoreError> {
    let product = data
        .catalog
        .find(request.product_id)
        .ok_or(StoreError::ProductNotFound(request.product_id))?;

    data.carts.with_cart(session.id, |cart| cart.add(product, request.quantity))?;
    tracing::info!(
        session = %session.id,
        product_id = product.id,
        quantity = request.quantity,
        "item added to cart"
    );
    Ok(product.name.clone())
}

// --- API JSON da sacola ---

/// Rota para visualizar o conteúdo atual da sacola de compras.
#[get("/api/cart")]
pub async fn get_cart(data: web::Data<AppState>, session: CartSession) -> HttpResponse {
    cart_json(&data, &session, "Cart contents".to_string())
}

/// Rota para adicionar um item à sacola. Se o produto já estiver na sacola,
/// a quantidade é somada.
#[post("/api/cart/items")]
pub async fn add_item_json(
    data: web::Data<AppState>,
    session: CartSession,
    item: web::Json<AddItemRequest>,
) -> Result<HttpResponse, StoreError> {
    let name = add_item(&data, &session, &item)?;
    Ok(cart_json(&data, &session, format!("{name} added to cart")))
}

/// Altera a quantidade de um item. Quantidades abaixo de 1 não mudam nada.
#[patch("/api/cart/items/{id}")]
pub async fn update_item_json(
    data: web::Data<AppState>,
    session: CartSession,
    path: web::Path<i32>,
    request: web::Json<QuantityRequest>,
) -> Result<HttpResponse, StoreError> {
    let id = path.into_inner();
    let changed = data
        .carts
        .with_cart(session.id, |cart| cart.update_quantity(id, request.quantity))?;

    let message = if changed { "Quantity updated" } else { "Quantity unchanged" };
    Ok(cart_json(&data, &session, message.to_string()))
}

#[delete("/api/cart/items/{id}")]
pub async fn remove_item_json(
    data: web::Data<AppState>,
    session: CartSession,
    path: web::Path<i32>,
) -> Result<HttpResponse, StoreError> {
    let id = path.into_inner();
    data.carts.with_cart(session.id, |cart| cart.remove(id))?;
    tracing::info!(session = %session.id, product_id = id, "item removed from cart");

    Ok(cart_json(&data, &session, ITEM_REMOVED_MESSAGE.to_string()))
}

/// Verifica o código promocional. Os totais devolvidos não mudam.
#[post("/api/cart/promo")]
pub async fn apply_promo_json(
    data: web::Data<AppState>,
    session: CartSession,
    request: web::Json<PromoRequest>,
) -> HttpResponse {
    let outcome = check_promo_code(&request.code, &data.config.promo_code);
    let notice = outcome.notice();

    if outcome.is_applied() {
        cart_json(&data, &session, notice.message)
    } else {
        let mut builder = HttpResponse::BadRequest();
        session.attach(&mut builder);
        builder.json(GenericResponse::error(notice.message))
    }
}

#[cfg(test)]
#[path = "cart_router_test.rs"]
mod tests;
