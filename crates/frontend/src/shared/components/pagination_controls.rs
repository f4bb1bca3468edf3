use browser::page_window;
use leptos::prelude::*;

use crate::shared::icons::icon;

/// PaginationControls component - reusable pagination controls
///
/// First/prev/next/last edges around a bounded window of page links, with
/// an ellipsis wherever the window leaves a gap to the edge pages.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<u32>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<u32>,

    /// Callback when a page is chosen
    on_page_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls" style="display: flex; gap: 4px; align-items: center; justify-content: center;">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=move || current_page.get() <= 1
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() <= 1
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            {move || {
                let current = current_page.get();
                let total = total_pages.get();
                let window = page_window(current, total);
                let mut parts: Vec<AnyView> = Vec::new();
                if window.needs_first_link() {
                    parts.push(page_button(1, current, on_page_change));
                    if window.has_leading_gap {
                        parts.push(ellipsis());
                    }
                }
                for page in window.pages.iter().copied() {
                    parts.push(page_button(page, current, on_page_change));
                }
                if window.needs_last_link(total) {
                    if window.has_trailing_gap {
                        parts.push(ellipsis());
                    }
                    parts.push(page_button(total, current, on_page_change));
                }
                parts
            }}
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || current_page.get() >= total_pages.get()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let total = total_pages.get();
                    if total > 0 {
                        on_page_change.run(total);
                    }
                }
                disabled=move || current_page.get() >= total_pages.get()
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}

fn page_button(page: u32, current: u32, on_page_change: Callback<u32>) -> AnyView {
    let active = page == current;
    view! {
        <button
            class="pagination-btn"
            style=if active { "font-weight: bold; background: #e2e8f0;" } else { "" }
            disabled=active
            on:click=move |_| on_page_change.run(page)
        >
            {page.to_string()}
        </button>
    }
    .into_any()
}

fn ellipsis() -> AnyView {
    view! { <span class="pagination-ellipsis" style="padding: 0 4px;">"\u{2026}"</span> }.into_any()
}
