use browser::{BrowserError, FieldIssue};
use contracts::FacetOption;
use leptos::prelude::*;
use serde_json::json;
use wasm_bindgen_futures::spawn_local;

use super::{browser_config, client_source, status_source, Pendency};
use crate::shared::api_utils::api_url;
use crate::shared::components::browser_page::FormContext;
use crate::shared::rest_store::{fetch_facet_options, save_fields};

#[derive(Clone, Default)]
struct PendencyDraft {
    id: Option<String>,
    title: String,
    due_date: String,
    status_id: String,
    client_id: String,
    notes: String,
}

impl PendencyDraft {
    fn from_record(record: &Pendency) -> Self {
        Self {
            id: Some(record.id.as_str().to_string()),
            title: record.title.clone(),
            due_date: record.due_date.clone().unwrap_or_default(),
            status_id: record
                .status
                .as_ref()
                .map(|s| s.id.as_str().to_string())
                .unwrap_or_default(),
            client_id: record
                .client
                .as_ref()
                .map(|c| c.id.as_str().to_string())
                .unwrap_or_default(),
            notes: record.notes.clone().unwrap_or_default(),
        }
    }

    fn validate(&self) -> Result<(), BrowserError> {
        let mut issues = Vec::new();
        if self.title.trim().is_empty() {
            issues.push(FieldIssue::new("title", "Title is required"));
        }
        if issues.is_empty() {
            Ok(())
        } else {
            Err(BrowserError::Validation(issues))
        }
    }

    fn to_fields(&self) -> serde_json::Value {
        let optional = |value: &str| {
            if value.is_empty() {
                serde_json::Value::Null
            } else {
                json!(value)
            }
        };
        json!({
            "title": self.title.trim(),
            "due_date": optional(&self.due_date),
            "status_id": optional(&self.status_id),
            "client_id": optional(&self.client_id),
            "notes": optional(self.notes.trim()),
        })
    }
}

pub fn render(ctx: FormContext<Pendency>) -> AnyView {
    view! { <PendencyForm ctx=ctx /> }.into_any()
}

#[component]
pub fn PendencyForm(ctx: FormContext<Pendency>) -> impl IntoView {
    let editing = ctx.record.is_some();
    let read_only = ctx.read_only;
    let on_saved = ctx.on_saved;
    let on_cancel = ctx.on_cancel;

    let draft = RwSignal::new(match &ctx.record {
        Some(record) => PendencyDraft::from_record(record),
        None => PendencyDraft::default(),
    });
    let error = RwSignal::new(None::<String>);
    let issues = RwSignal::new(Vec::<FieldIssue>::new());
    let saving = RwSignal::new(false);
    let status_options = RwSignal::new(Vec::<FacetOption>::new());
    let client_options = RwSignal::new(Vec::<FacetOption>::new());

    spawn_local(async move {
        match fetch_facet_options(&status_source()).await {
            Ok(options) => status_options.set(options),
            Err(err) => log::warn!("failed to load pendency statuses: {err}"),
        }
    });
    spawn_local(async move {
        match fetch_facet_options(&client_source()).await {
            Ok(options) => client_options.set(options),
            Err(err) => log::warn!("failed to load clients: {err}"),
        }
    });

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
        "View pendency"
    } else if editing {
        "Edit pendency"
    } else {
        "New pendency"
    };

    let option_select = move |label: &'static str,
                              options: RwSignal<Vec<FacetOption>>,
                              selected: fn(&PendencyDraft) -> &String,
                              update: fn(&mut PendencyDraft, String),
                              empty_label: &'static str| {
        view! {
            <div style="flex: 1;">
                <label style="display: block; margin-bottom: 4px; color: #555;">{label}</label>
                <select
                    style="width: 100%; padding: 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px;"
                    prop:disabled=read_only
                    on:change=move |ev| draft.update(|d| update(d, event_target_value(&ev)))
                >
                    <option value="" selected=move || draft.with(|d| selected(d).is_empty())>
                        {empty_label}
                    </option>
                    {move || options.get().into_iter().map(|opt| {
                        let value = opt.id.clone();
                        let selected_id = opt.id;
                        view! {
                            <option
                                value=value
                                selected=move || draft.with(|d| selected(d) == &selected_id)
                            >
                                {opt.name}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </div>
        }
    };

    view! {
        <div style="max-width: 720px;">
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
                <label style="display: block; margin-bottom: 4px; color: #555;">"Title"</label>
                <input
                    type="text"
                    style=move || field_style("title")
                    prop:value=move || draft.get().title
                    prop:disabled=read_only
                    on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                />
            </div>

            <div style="display: flex; gap: 12px; margin-bottom: 12px;">
                {option_select(
                    "Status",
                    status_options,
                    |d| &d.status_id,
                    |d, v| d.status_id = v,
                    "No status",
                )}
                {option_select(
                    "Client",
                    client_options,
                    |d| &d.client_id,
                    |d, v| d.client_id = v,
                    "No client",
                )}
                <div style="flex: 1;">
                    <label style="display: block; margin-bottom: 4px; color: #555;">"Due date"</label>
                    <input
                        type="date"
                        style="width: 100%; padding: 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px;"
                        prop:value=move || draft.get().due_date
                        prop:disabled=read_only
                        on:input=move |ev| draft.update(|d| d.due_date = event_target_value(&ev))
                    />
                </div>
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
