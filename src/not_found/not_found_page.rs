// src/not_found/not_found_page.rs

use leptos::prelude::*;

use crate::shared::layout::{html_document, Document, STORE_NAME};

pub fn render() -> String {
    html_document(view! { <NotFoundPage/> })
}

#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <Document title=format!("Page Not Found | {STORE_NAME}")>
            <div class="min-h-screen flex flex-col items-center justify-center bg-gray-100 p-4">
                <div class="text-center max-w-lg">
                    <h1 class="text-6xl font-bold text-primary mb-6">"404"</h1>
                    <p class="text-2xl text-gray-800 mb-4">"Page Not Found"</p>
                    <p class="text-gray-600 mb-8">
                        "We couldn't find the page you were looking for. It might have been removed, renamed, or didn't exist in the first place."
                    </p>
                    <a href="/" class="rounded-md bg-gray-900 px-6 py-3 text-lg text-white">"Return to Home"</a>
                </div>
            </div>
        </Document>
    }
}
