use std::rc::Rc;

use browser::{ColumnDef, ColumnVisibility};
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Dropdown of per-column visibility checkboxes. Toggling one column never
/// affects the others; the state resets with the owning screen.
#[component]
pub fn ColumnMenu(
    columns: Vec<ColumnDef>,
    registry: StoredValue<Rc<ColumnVisibility>, LocalStorage>,
    /// Bumped by the registry whenever visibility changes.
    #[prop(into)]
    version: Signal<usize>,
) -> impl IntoView {
    let open = RwSignal::new(false);

    let items = columns
        .into_iter()
        .map(|col| {
            let key = col.key;
            view! {
                <label style="display: flex; gap: 6px; align-items: center; padding: 2px 0; cursor: pointer; white-space: nowrap;">
                    <input
                        type="checkbox"
                        prop:checked=move || {
                            version.get();
                            registry.with_value(|r| r.is_visible(key))
                        }
                        on:change=move |_| registry.with_value(|r| r.toggle(key))
                    />
                    {col.label}
                </label>
            }
        })
        .collect_view();

    view! {
        <div style="position: relative; display: inline-block;">
            <button
                style="padding: 6px 10px; border: 1px solid #ddd; border-radius: 4px; background: white; cursor: pointer; display: inline-flex; align-items: center; gap: 6px;"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                {icon("columns")}
                " Columns"
            </button>
            <div style=move || format!(
                "position: absolute; right: 0; top: 100%; margin-top: 4px; background: white; border: 1px solid #ddd; border-radius: 6px; padding: 8px 12px; z-index: 10; box-shadow: 0 2px 8px rgba(0,0,0,0.15); {}",
                if open.get() { "" } else { "display: none;" }
            )>
                {items}
            </div>
        </div>
    }
}
