// src/categories/category_page.rs

use leptos::prelude::*;

use super::category_display::EMPTY_CATEGORY_MESSAGE;
use crate::products::product_structs::Product;
use crate::shared::layout::{html_document, Document, ProductCard, SiteFooter, SiteHeader, STORE_NAME};

pub fn render(category_name: String, products: Vec<Product>) -> String {
    html_document(view! { <CategoryPage category_name=category_name products=products/> })
}

#[component]
fn CategoryPage(category_name: String, products: Vec<Product>) -> impl IntoView {
    let heading = format!("{category_name}'s Collection");
    let title = format!("{heading} | {STORE_NAME}");

    let grid = if products.is_empty() {
        view! {
            <div class="col-span-full text-center py-12">
                <p class="text-lg text-gray-600" data-empty-state="true">{EMPTY_CATEGORY_MESSAGE}</p>
            </div>
        }
        .into_any()
    } else {
        products
            .into_iter()
            .map(|product| view! { <ProductCard product=product/> })
            .collect_view()
            .into_any()
    };

    view! {
        <Document title=title>
            <div class="flex flex-col min-h-screen">
                <SiteHeader/>
                <main class="flex-grow container mx-auto px-4 py-8">
                    <div class="flex items-center justify-between mb-8">
                        <h1 class="text-3xl font-bold">{heading}</h1>
                        <a href="/" class="rounded-md border px-3 py-1 text-sm">"Back to Home"</a>
                    </div>
                    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">{grid}</div>
                </main>
                <SiteFooter/>
            </div>
        </Document>
    }
}
