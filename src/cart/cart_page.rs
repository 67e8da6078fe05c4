// src/cart/cart_page.rs

use leptos::prelude::*;

use super::cart_structs::{CartItem, CartTotals};
use crate::shared::layout::{html_document, Document, NoticeBanner, SiteFooter, SiteHeader};
use crate::shared::shared_structs::{display_price, Notice};

/// Renderiza a página da sacola com um aviso opcional (item removido,
/// código promocional aceito ou recusado...).
pub fn render(items: Vec<CartItem>, totals: CartTotals, notice: Option<Notice>, promo_code: String) -> String {
    html_document(view! {
        <CartPage items=items totals=totals notice=notice promo_code=promo_code/>
    })
}

#[component]
fn CartPage(items: Vec<CartItem>, totals: CartTotals, notice: Option<Notice>, promo_code: String) -> impl IntoView {
    let content = if items.is_empty() {
        view! { <EmptyCart/> }.into_any()
    } else {
        view! {
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                <div class="lg:col-span-2 space-y-4">
                    {items.into_iter().map(|item| view! { <CartItemRow item=item/> }).collect_view()}
                </div>
                <OrderSummary totals=totals promo_code=promo_code/>
            </div>
        }
        .into_any()
    };

    view! {
        <Document title="Your Cart | VIZIFIT">
            <div class="flex flex-col min-h-screen">
                <SiteHeader compact=true/>
                <main class="flex-grow container mx-auto px-4 py-8">
                    <div class="flex items-center justify-between mb-6">
                        <h1 class="text-3xl font-bold">"Your Cart"</h1>
                        <a href="/" class="rounded-md border px-3 py-1 text-sm">"Continue Shopping"</a>
                    </div>
                    {notice.map(|notice| view! { <NoticeBanner notice=notice/> })}
                    {content}
                </main>
                <SiteFooter compact=true/>
            </div>
        </Document>
    }
}

#[component]
fn CartItemRow(item: CartItem) -> impl IntoView {
    let id = item.id();
    let unit_price = format!("Unit Price: {}", display_price(&item.product.price));
    let line_total = display_price(&item.line_total());

    view! {
        <div class="flex flex-col sm:flex-row bg-white rounded-lg shadow p-4 gap-4" data-cart-item=id.to_string()>
            <div class="w-full sm:w-24 h-24 overflow-hidden rounded">
                <img src=item.product.image alt=item.product.name.clone() class="w-full h-full object-cover"/>
            </div>
            <div class="flex-grow">
                <h3 class="font-medium">{item.product.name}</h3>
                <p class="text-gray-500 text-sm">{unit_price}</p>
                <div class="flex items-center mt-2">
                    <form method="post" action=format!("/cart/items/{id}/decrement")>
                        <button type="submit" class="p-1 rounded-full hover:bg-gray-100" aria-label="Decrease quantity">
                            "-"
                        </button>
                    </form>
                    <span class="mx-3" data-quantity=id.to_string()>{item.quantity.to_string()}</span>
                    <form method="post" action=format!("/cart/items/{id}/increment")>
                        <button type="submit" class="p-1 rounded-full hover:bg-gray-100" aria-label="Increase quantity">
                            "+"
                        </button>
                    </form>
                </div>
            </div>
            <div class="flex flex-row sm:flex-col items-center sm:items-end justify-between mt-2 sm:mt-0">
                <span class="font-semibold text-primary">{line_total}</span>
                <form method="post" action=format!("/cart/items/{id}/remove")>
                    <button type="submit" class="text-red-500 hover:text-red-700">"Remove"</button>
                </form>
            </div>
        </div>
    }
}

#[component]
fn OrderSummary(totals: CartTotals, promo_code: String) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow p-6 h-fit">
            <h2 class="text-xl font-semibold mb-4">"Order Summary"</h2>
            <div class="space-y-2 mb-4">
                <div class="flex justify-between">
                    <span class="text-gray-600">"Subtotal"</span>
                    <span data-total="subtotal">{display_price(&totals.subtotal)}</span>
                </div>
                <div class="flex justify-between">
                    <span class="text-gray-600">"Shipping"</span>
                    <span data-total="shipping">{display_price(&totals.shipping)}</span>
                </div>
                <div class="border-t pt-2 mt-2 flex justify-between font-semibold">
                    <span>"Total"</span>
                    <span class="text-primary" data-total="total">{display_price(&totals.total)}</span>
                </div>
            </div>
            <form method="post" action="/cart/promo" class="flex mt-4 mb-6">
                <input
                    type="text"
                    name="code"
                    placeholder="Promo code"
                    value=promo_code
                    class="flex-grow rounded-l-md border px-3 py-2"
                />
                <button type="submit" class="rounded-r-md bg-gray-900 px-4 py-2 text-white">"Apply"</button>
            </form>
            // Checkout fica fora do escopo da demonstração
            <button type="button" class="w-full rounded-md bg-gray-900 px-4 py-2 text-white" disabled=true>
                "Proceed to Checkout"
            </button>
        </div>
    }
}

#[component]
fn EmptyCart() -> impl IntoView {
    view! {
        <div class="text-center py-16 bg-white rounded-lg shadow-sm">
            <h2 class="mt-4 text-2xl font-semibold text-gray-700">"Your cart is empty"</h2>
            <p class="mt-2 text-gray-500">"Looks like you haven't added any products to your cart yet."</p>
            <a href="/" class="mt-6 inline-block rounded-md bg-gray-900 px-4 py-2 text-white">"Start Shopping"</a>
        </div>
    }
}
