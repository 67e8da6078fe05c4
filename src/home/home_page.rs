// src/home/home_page.rs

use leptos::prelude::*;

use crate::products::product_structs::{CategoryTile, Product};
use crate::shared::layout::{html_document, Document, ProductCard, SiteFooter, SiteHeader, STORE_NAME};

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1490114538077-0a7f8cb49891?ixlib=rb-4.0.3&q=80&fm=jpg&crop=entropy&cs=tinysrgb";

/// Diferenciais exibidos no fim da página inicial.
const BENEFITS: [(&str, &str); 3] = [
    ("Fast Shipping", "Get your order delivered to your doorstep within 3-5 business days."),
    ("Easy Returns", "Not satisfied with your purchase? Return it within 30 days for a full refund."),
    ("Premium Quality", "We ensure that all our products meet the highest quality standards."),
];

pub fn render(categories: Vec<CategoryTile>, featured: Vec<Product>) -> String {
    html_document(view! { <HomePage categories=categories featured=featured/> })
}

#[component]
fn HomePage(categories: Vec<CategoryTile>, featured: Vec<Product>) -> impl IntoView {
    view! {
        <Document title=format!("{STORE_NAME} | Fashion for women, men & kids")>
            <div class="flex flex-col min-h-screen">
                <SiteHeader/>
                <main class="flex-grow">
                    <section class="relative bg-gray-100 h-[60vh] flex items-center">
                        <div class="container mx-auto px-4 relative z-[1]">
                            <div class="max-w-lg">
                                <h1 class="text-4xl md:text-6xl font-bold mb-4">"New Season Arrivals"</h1>
                                <p class="text-lg mb-6">"Discover the latest trends in fashion for women, men & kids"</p>
                                <a href="#featured" class="rounded-md bg-gray-900 px-6 py-3 text-white">"Shop Now"</a>
                            </div>
                        </div>
                        <div
                            class="absolute inset-0 bg-cover bg-center opacity-20"
                            style=format!("background-image: url('{HERO_IMAGE}')")
                        ></div>
                    </section>

                    <section class="py-16 bg-white">
                        <div class="container mx-auto px-4">
                            <h2 class="text-3xl font-semibold mb-8 text-center">"Shop by Category"</h2>
                            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                                {categories.into_iter().map(|tile| view! { <CategoryCard tile=tile/> }).collect_view()}
                            </div>
                        </div>
                    </section>

                    <section id="featured" class="py-16 bg-gray-50">
                        <div class="container mx-auto px-4">
                            <h2 class="text-3xl font-semibold mb-8 text-center">"Featured Products"</h2>
                            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                                {featured.into_iter().map(|product| view! { <ProductCard product=product/> }).collect_view()}
                            </div>
                        </div>
                    </section>

                    <section class="py-16 bg-white">
                        <div class="container mx-auto px-4">
                            <div class="grid grid-cols-1 md:grid-cols-3 gap-8 text-center">
                                {BENEFITS
                                    .iter()
                                    .map(|(title, text)| {
                                        view! {
                                            <div class="p-6">
                                                <h3 class="text-xl font-semibold mb-2">{*title}</h3>
                                                <p class="text-gray-600">{*text}</p>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </section>
                </main>
                <SiteFooter/>
            </div>
        </Document>
    }
}

#[component]
fn CategoryCard(tile: CategoryTile) -> impl IntoView {
    let link = tile.link();

    view! {
        <a href=link class="relative rounded-lg overflow-hidden group h-64 block">
            <img
                src=tile.image
                alt=tile.name.clone()
                class="w-full h-full object-cover transition-transform duration-300 group-hover:scale-105"
            />
            <div class="absolute inset-0 bg-black bg-opacity-30 flex items-center justify-center">
                <span class="text-white text-2xl font-semibold">{tile.name}</span>
            </div>
        </a>
    }
}
