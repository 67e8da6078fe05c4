// src/shared/layout.rs
//
// Componentes de layout compartilhados pelas páginas (cabeçalho, rodapé,
// aviso e cartão de produto). As páginas são renderizadas no servidor com
// `to_html`, sem hidratação no navegador.

use chrono::Datelike;
use leptos::prelude::*;

use super::shared_structs::{display_price, Notice};
use crate::products::product_structs::Product;

pub const STORE_NAME: &str = "VIZIFIT";

const TAILWIND_CDN_URL: &str = "https://cdn.tailwindcss.com";

/// Links de categoria usados na navegação e no rodapé.
pub const NAV_CATEGORIES: [(&str, &str); 3] = [
    ("Women", "/category/women"),
    ("Men", "/category/men"),
    ("Kids", "/category/kids"),
];

/// Renderiza uma página completa, com o doctype na frente.
pub fn html_document(view: impl IntoView) -> String {
    format!("<!DOCTYPE html>{}", view.to_html())
}

#[component]
pub fn Document(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{title}</title>
                <script src=TAILWIND_CDN_URL></script>
            </head>
            <body class="bg-white text-gray-900">{children()}</body>
        </html>
    }
}

/// Cabeçalho da loja. A versão `compact` mostra apenas o logotipo
/// (carrinho e login); a completa traz a navegação por categoria.
#[component]
pub fn SiteHeader(#[prop(optional)] compact: bool) -> impl IntoView {
    let header_class = if compact { "bg-white shadow-sm" } else { "sticky top-0 z-10 bg-white shadow-sm" };

    let navigation = (!compact).then(|| {
        view! {
            <nav class="hidden md:flex items-center space-x-8">
                {NAV_CATEGORIES
                    .iter()
                    .map(|(label, href)| {
                        view! { <a href=*href class="text-sm font-medium hover:text-primary">{*label}</a> }
                    })
                    .collect_view()}
            </nav>
            <div class="flex items-center space-x-4">
                <a href="/login" class="p-2 rounded-full hover:bg-gray-100" aria-label="Account">"Account"</a>
                <a href="/cart" class="p-2 rounded-full hover:bg-gray-100" aria-label="Cart">"Cart"</a>
            </div>
        }
    });

    view! {
        <header class=header_class>
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <a href="/" class="text-2xl font-bold text-primary">{STORE_NAME}</a>
                    {navigation}
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn SiteFooter(#[prop(optional)] compact: bool) -> impl IntoView {
    let copyright = format!("© {} {STORE_NAME}. All rights reserved.", chrono::Local::now().year());

    if compact {
        return view! {
            <footer class="bg-gray-900 text-white py-6">
                <div class="container mx-auto px-4">
                    <div class="text-center text-gray-400 text-sm">
                        <p>{copyright}</p>
                    </div>
                </div>
            </footer>
        }
        .into_any();
    }

    view! {
        <footer class="bg-gray-900 text-white py-12">
            <div class="container mx-auto px-4">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-8">
                    <div>
                        <h3 class="text-xl font-semibold mb-4">{STORE_NAME}</h3>
                        <p class="text-gray-400">"Your one-stop fashion destination for women, men, and kids."</p>
                    </div>
                    <div>
                        <h4 class="font-semibold mb-4">"Shop"</h4>
                        <ul class="space-y-2 text-gray-400">
                            {NAV_CATEGORIES
                                .iter()
                                .map(|(label, href)| view! { <li><a href=*href class="hover:text-white">{*label}</a></li> })
                                .collect_view()}
                            <li><a href="/" class="hover:text-white">"New Arrivals"</a></li>
                        </ul>
                    </div>
                    <div>
                        <h4 class="font-semibold mb-4">"Support"</h4>
                        <ul class="space-y-2 text-gray-400">
                            <li><a href="/" class="hover:text-white">"Contact Us"</a></li>
                            <li><a href="/" class="hover:text-white">"FAQs"</a></li>
                            <li><a href="/" class="hover:text-white">"Shipping & Returns"</a></li>
                            <li><a href="/" class="hover:text-white">"Size Guide"</a></li>
                        </ul>
                    </div>
                    <div>
                        <h4 class="font-semibold mb-4">"Connect With Us"</h4>
                        <div class="flex space-x-4 text-gray-400">
                            <a href="#" class="hover:text-white">"Facebook"</a>
                            <a href="#" class="hover:text-white">"Instagram"</a>
                            <a href="#" class="hover:text-white">"Twitter"</a>
                        </div>
                    </div>
                </div>
                <div class="border-t border-gray-800 mt-8 pt-8 text-center text-gray-400 text-sm">
                    <p>{copyright}</p>
                </div>
            </div>
        </footer>
    }
    .into_any()
}

#[component]
pub fn NoticeBanner(notice: Notice) -> impl IntoView {
    let class = if notice.is_success() {
        "mb-6 rounded-md border border-green-200 bg-green-50 px-4 py-3 text-green-800"
    } else {
        "mb-6 rounded-md border border-red-200 bg-red-50 px-4 py-3 text-red-800"
    };

    view! {
        <div role="status" class=class data-notice=notice.kind.as_str()>
            {notice.message}
        </div>
    }
}

/// Cartão de produto com o botão "Add to Cart", que envia o formulário
/// para a sacola da sessão.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let price = display_price(&product.price);
    let product_id = product.id.to_string();

    view! {
        <div class="bg-white rounded-lg shadow-md overflow-hidden" data-product-id=product_id.clone()>
            <div class="h-56 overflow-hidden">
                <img
                    src=product.image
                    alt=product.name.clone()
                    class="w-full h-full object-cover transition-transform hover:scale-105 duration-300"
                />
            </div>
            <div class="p-4">
                <h3 class="font-medium text-gray-900 mb-1">{product.name}</h3>
                <p class="text-primary font-semibold">{price}</p>
                <form method="post" action="/cart/items" class="mt-3">
                    <input type="hidden" name="product_id" value=product_id.clone()/>
                    <button type="submit" class="w-full rounded-md bg-gray-900 px-4 py-2 text-white">
                        "Add to Cart"
                    </button>
                </form>
            </div>
        </div>
    }
}
