use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

use crate::domain::categories::CategoriesPage;
use crate::domain::pendencies::PendenciesPage;
use crate::domain::prospects::ProspectsPage;
use crate::shared::notices::NoticeBanner;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <nav style="display: flex; gap: 16px; padding: 12px 20px; border-bottom: 1px solid #ddd;">
                <A href="/">"Prospects"</A>
                <A href="/pendencies">"Pendencies"</A>
                <A href="/categories">"Categories"</A>
            </nav>
            <NoticeBanner />
            <main>
                <Routes fallback=|| view! { <p style="padding: 20px;">"Page not found."</p> }>
                    <Route path=path!("/") view=ProspectsPage />
                    <Route path=path!("/pendencies") view=PendenciesPage />
                    <Route path=path!("/categories") view=CategoriesPage />
                </Routes>
            </main>
        </Router>
    }
}
