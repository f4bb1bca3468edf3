use browser::{BrowserError, FieldIssue};
use leptos::prelude::*;
use serde_json::json;
use wasm_bindgen_futures::spawn_local;

use super::{browser_config, Category, CATEGORY_KINDS};
use crate::shared::api_utils::api_url;
use crate::shared::components::browser_page::FormContext;
use crate::shared::rest_store::save_fields;

#[derive(Clone, Default)]
struct CategoryDraft {
    id: Option<String>,
    name: String,
    kind: String,
    notes: String,
}

impl CategoryDraft {
    fn from_record(record: &Category) -> Self {
        Self {
            id: Some(record.id.as_str().to_string()),
            name: record.name.clone(),
            kind: record.kind.clone(),
            notes: record.notes.clone().unwrap_or_default(),
        }
    }

    fn validate(&self) -> Result<(), BrowserError> {
        let mut issues = Vec::new();
        if self.name.trim().is_empty() {
            issues.push(FieldIssue::new("name", "Name is required"));
        }
        if self.kind.is_empty() {
            issues.push(FieldIssue::new("kind", "Kind is required"));
        }
        if issues.is_empty() {
            Ok(())
        } else {
            Err(BrowserError::Validation(issues))
        }
    }

    fn to_fields(&self) -> serde_json::Value {
        json!({
            "name": self.name.trim(),
            "kind": self.kind,
            "notes": if self.notes.trim().is_empty() {
                serde_json::Value::Null
            } else {
                json!(self.notes.trim())
            },
        })
    }
}

pub fn render(ctx: FormContext<Category>) -> AnyView {
    view! { <CategoryForm ctx=ctx /> }.into_any()
}

#[component]
pub fn CategoryForm(ctx: FormContext<Category>) -> impl IntoView {
    let editing = ctx.record.is_some();
    let read_only = ctx.read_only;
    let on_saved = ctx.on_saved;
    let on_cancel = ctx.on_cancel;

    let draft = RwSignal::new(match &ctx.record {
        Some(record) => CategoryDraft::from_record(record),
        None => CategoryDraft::default(),
    });
    let error = RwSignal::new(None::<String>);
    let issues = RwSignal::new(Vec::<FieldIssue>::new());
    let saving = RwSignal::new(false);

    let field_style = move |field: &'static str| {
        let flagged = issues.get().iter().any(|i| i.field == field);
        format!(
            "width: 100%; padding: 6px 10px; border: 1px solid {}; border-radius: 4px; font-size: 15px;",
            if flagged { "#e53e3e" } else { "#ddd" }
        )
    };

    let save = move |_| {
        if read_only || saving.get() {
            return;
        }
        let current = draft.get();
        match current.validate() {
            Err(err) => {
                issues.set(err.field_issues().to_vec());
                error.set(Some("Fix the highlighted fields".to_string()));
            }
            Ok(()) => {
                issues.set(Vec::new());
                error.set(None);
                saving.set(true);
                spawn_local(async move {
                    let endpoint = api_url(browser_config().endpoint);
                    match save_fields(&endpoint, current.id.as_deref(), &current.to_fields()).await
                    {
                        Ok(_) => {
                            saving.set(false);
                            on_saved.run(());
                        }
                        Err(BrowserError::Validation(list)) => {
                            saving.set(false);
                            issues.set(list);
                        }
                        Err(err) => {
                            saving.set(false);
                            error.set(Some(err.to_string()));
                        }
                    }
                });
            }
        }
    };

    let title = if read_only {
        "View category"
    } else if editing {
        "Edit category"
    } else {
        "New category"
    };

    view! {
        <div style="max-width: 560px;">
            <div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px;">
                <h2 style="font-size: 20px; font-weight: bold;">{title}</h2>
                <div style="display: flex; gap: 8px;">
                    <button
                        style="padding: 6px 14px; border: 1px solid #ddd; border-radius: 4px; background: white; cursor: pointer;"
                        on:click=move |_| on_cancel.run(())
                        disabled=move || saving.get()
                    >
                        {if read_only { "Back" } else { "Cancel" }}
                    </button>
                    {(!read_only).then(|| view! {
                        <button
                            style="padding: 6px 14px; border: none; border-radius: 4px; background: #3182ce; color: white; cursor: pointer;"
                            on:click=save
                            disabled=move || saving.get()
                        >
                            {move || if saving.get() { "Saving\u{2026}" } else { "Save" }}
                        </button>
                    })}
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div style="margin-bottom: 12px; padding: 10px 14px; background: #fff5f5; border: 1px solid #feb2b2; color: #742a2a; border-radius: 8px;">
                    {e}
                </div>
            })}

            <div style="margin-bottom: 12px;">
                <label style="display: block; margin-bottom: 4px; color: #555;">"Name"</label>
                <input
                    type="text"
                    style=move || field_style("name")
                    prop:value=move || draft.get().name
                    prop:disabled=read_only
                    on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                />
            </div>

            <div style="margin-bottom: 12px;">
                <label style="display: block; margin-bottom: 4px; color: #555;">"Kind"</label>
                <select
                    style=move || field_style("kind")
                    prop:disabled=read_only
                    on:change=move |ev| draft.update(|d| d.kind = event_target_value(&ev))
                >
                    <option value="" selected=move || draft.get().kind.is_empty()>
                        "Choose a kind"
                    </option>
                    {CATEGORY_KINDS.iter().map(|(id, name)| {
                        let id = *id;
                        view! {
                            <option value=id selected=move || draft.get().kind == id>
                                {*name}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </div>

            <div style="margin-bottom: 12px;">
                <label style="display: block; margin-bottom: 4px; color: #555;">"Notes"</label>
                <textarea
                    style="width: 100%; padding: 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px; min-height: 80px;"
                    prop:value=move || draft.get().notes
                    prop:disabled=read_only
                    on:input=move |ev| draft.update(|d| d.notes = event_target_value(&ev))
                ></textarea>
            </div>
        </div>
    }
}
