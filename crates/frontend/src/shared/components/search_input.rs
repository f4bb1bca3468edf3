use leptos::prelude::*;

use crate::shared::icons::icon;

/// Explicit-submit search box: typing only updates the local value, the
/// query is issued on Enter or the search button.
#[component]
pub fn SearchBox(
    /// Value to seed the input with (the query's current term).
    #[prop(optional, into)]
    initial: String,
    /// Callback receiving the term when the user submits.
    on_submit: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };
    let (value, set_value) = signal(initial);

    view! {
        <form
            style="display: inline-flex; gap: 8px; align-items: center;"
            on:submit=move |ev| {
                ev.prevent_default();
                on_submit.run(value.get());
            }
        >
            <input
                type="text"
                placeholder=placeholder
                style="width: 250px; padding: 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px;"
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
            />
            <button
                type="submit"
                style="padding: 6px 10px; border: 1px solid #ddd; border-radius: 4px; background: white; cursor: pointer; display: inline-flex; align-items: center;"
                title="Search"
            >
                {icon("search")}
            </button>
        </form>
    }
}
