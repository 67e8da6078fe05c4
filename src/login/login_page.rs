// src/login/login_page.rs

use leptos::prelude::*;

use crate::shared::layout::{html_document, Document, NoticeBanner, SiteFooter, SiteHeader, STORE_NAME};
use crate::shared::shared_structs::Notice;

/// Renderiza o formulário de login. A senha nunca volta preenchida.
pub fn render(email: String, remember_me: bool, notice: Option<Notice>) -> String {
    html_document(view! { <LoginPage email=email remember_me=remember_me notice=notice/> })
}

#[component]
fn LoginPage(email: String, remember_me: bool, notice: Option<Notice>) -> impl IntoView {
    view! {
        <Document title=format!("Sign In | {STORE_NAME}")>
            <div class="flex flex-col min-h-screen">
                <SiteHeader compact=true/>
                <main class="flex-grow flex items-center justify-center bg-gray-50 py-12 px-4">
                    <div class="max-w-md w-full bg-white rounded-lg shadow-md p-8">
                        <div class="text-center mb-8">
                            <h1 class="text-3xl font-bold">"Welcome Back"</h1>
                            <p class="text-gray-600 mt-2">"Sign in to your account"</p>
                        </div>
                        {notice.map(|notice| view! { <NoticeBanner notice=notice/> })}
                        <form method="post" action="/login" class="space-y-6">
                            <div>
                                <label for="email" class="block text-sm font-medium text-gray-700 mb-1">"Email Address"</label>
                                <input
                                    id="email"
                                    name="email"
                                    type="email"
                                    placeholder="your@email.com"
                                    value=email
                                    required=true
                                    class="w-full rounded-md border px-3 py-2"
                                />
                            </div>
                            <div>
                                <label for="password" class="block text-sm font-medium text-gray-700 mb-1">"Password"</label>
                                <input
                                    id="password"
                                    name="password"
                                    type="password"
                                    placeholder="••••••••"
                                    required=true
                                    class="w-full rounded-md border px-3 py-2"
                                />
                            </div>
                            <div class="flex items-center justify-between">
                                <div class="flex items-center">
                                    <input
                                        id="remember-me"
                                        name="remember-me"
                                        type="checkbox"
                                        checked=remember_me
                                        class="h-4 w-4 border-gray-300 rounded"
                                    />
                                    <label for="remember-me" class="ml-2 block text-sm text-gray-700">"Remember me"</label>
                                </div>
                                <a href="/" class="text-sm font-medium text-primary hover:underline">"Forgot password?"</a>
                            </div>
                            <button type="submit" class="w-full rounded-md bg-gray-900 px-4 py-2 text-white">"Sign In"</button>
                        </form>
                        <div class="mt-6 text-center">
                            <p class="text-sm text-gray-600">
                                "Don't have an account? "
                                <a href="/" class="font-medium text-primary hover:underline">"Sign up"</a>
                            </p>
                        </div>
                    </div>
                </main>
                <SiteFooter compact=true/>
            </div>
        </Document>
    }
}
