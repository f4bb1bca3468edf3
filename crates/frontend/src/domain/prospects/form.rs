use browser::{format_tax_id, strip_digits, BrowserError, FieldIssue};
use contracts::{FacetOption, PersonKind};
use leptos::prelude::*;
use serde_json::json;
use wasm_bindgen_futures::spawn_local;

use super::{browser_config, status_source, Prospect};
use crate::shared::api_utils::api_url;
use crate::shared::components::browser_page::FormContext;
use crate::shared::components::masked_input::{MaskKind, MaskedInput};
use crate::shared::date_utils::today_iso;
use crate::shared::rest_store::{fetch_facet_options, save_fields};

#[derive(Clone)]
struct ProspectDraft {
    id: Option<String>,
    person_kind: PersonKind,
    tax_id: String,
    name: String,
    phone: String,
    entry_date: String,
    status_id: String,
}

impl Default for ProspectDraft {
    fn default() -> Self {
        Self {
            id: None,
            person_kind: PersonKind::Individual,
            tax_id: String::new(),
            name: String::new(),
            phone: String::new(),
            entry_date: today_iso(),
            status_id: String::new(),
        }
    }
}

impl ProspectDraft {
    fn from_record(record: &Prospect) -> Self {
        Self {
            id: Some(record.id.as_str().to_string()),
            person_kind: record.person_kind,
            tax_id: format_tax_id(&record.tax_id, record.person_kind),
            name: record.name.clone(),
            phone: record.phone.clone(),
            entry_date: record.entry_date.clone().unwrap_or_else(today_iso),
            status_id: record
                .status
                .as_ref()
                .map(|s| s.id.as_str().to_string())
                .unwrap_or_default(),
        }
    }

    fn validate(&self) -> Result<(), BrowserError> {
        let mut issues = Vec::new();
        if self.name.trim().is_empty() {
            issues.push(FieldIssue::new("name", "Name is required"));
        }
        let digits = strip_digits(&self.tax_id);
        let expected = match self.person_kind {
            PersonKind::Individual => 11,
            PersonKind::Organization => 14,
        };
        if digits.is_empty() {
            issues.push(FieldIssue::new("tax_id", "Tax ID is required"));
        } else if digits.len() != expected {
            issues.push(FieldIssue::new("tax_id", "Tax ID is incomplete"));
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
            "person_kind": self.person_kind.wire_value(),
            "tax_id": self.tax_id,
            "phone": self.phone,
            "entry_date": self.entry_date,
            "status_id": if self.status_id.is_empty() {
                serde_json::Value::Null
            } else {
                json!(self.status_id)
            },
        })
    }
}

pub fn render(ctx: FormContext<Prospect>) -> AnyView {
    view! { <ProspectForm ctx=ctx /> }.into_any()
}

#[component]
pub fn ProspectForm(ctx: FormContext<Prospect>) -> impl IntoView {
    let editing = ctx.record.is_some();
    let read_only = ctx.read_only;
    let on_saved = ctx.on_saved;
    let on_cancel = ctx.on_cancel;

    let draft = RwSignal::new(match &ctx.record {
        Some(record) => ProspectDraft::from_record(record),
        None => ProspectDraft::default(),
    });
    let error = RwSignal::new(None::<String>);
    let issues = RwSignal::new(Vec::<FieldIssue>::new());
    let saving = RwSignal::new(false);
    let status_options = RwSignal::new(Vec::<FacetOption>::new());

    spawn_local(async move {
        match fetch_facet_options(&status_source()).await {
            Ok(options) => status_options.set(options),
            Err(err) => log::warn!("failed to load negotiation statuses: {err}"),
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
        "View prospect"
    } else if editing {
        "Edit prospect"
    } else {
        "New prospect"
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

            <div style="display: flex; gap: 12px; margin-bottom: 12px;">
                <div style="flex: 1;">
                    <label style="display: block; margin-bottom: 4px; color: #555;">"Person kind"</label>
                    <select
                        style="width: 100%; padding: 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px;"
                        prop:disabled=read_only
                        on:change=move |ev| {
                            let kind = match event_target_value(&ev).as_str() {
                                "organization" => PersonKind::Organization,
                                _ => PersonKind::Individual,
                            };
                            // Re-mask what was typed so far under the new shape.
                            draft.update(|d| {
                                d.person_kind = kind;
                                d.tax_id = format_tax_id(&d.tax_id, kind);
                            });
                        }
                    >
                        <option
                            value="individual"
                            selected=move || draft.get().person_kind == PersonKind::Individual
                        >
                            "Individual"
                        </option>
                        <option
                            value="organization"
                            selected=move || draft.get().person_kind == PersonKind::Organization
                        >
                            "Organization"
                        </option>
                    </select>
                </div>
                <div style="flex: 1;">
                    <label style="display: block; margin-bottom: 4px; color: #555;">"Tax ID"</label>
                    <MaskedInput
                        value=Signal::derive(move || draft.get().tax_id)
                        on_change=Callback::new(move |v: String| draft.update(|d| d.tax_id = v))
                        kind=MaskKind::TaxId
                        person_kind=Signal::derive(move || draft.get().person_kind)
                        placeholder=Signal::derive(move || {
                            draft.get().person_kind.tax_id_placeholder().to_string()
                        })
                        disabled=read_only
                    />
                    {move || issues.get().iter().find(|i| i.field == "tax_id").map(|i| view! {
                        <span style="color: #e53e3e; font-size: 13px;">{i.message.clone()}</span>
                    })}
                </div>
                <div style="flex: 2;">
                    <label style="display: block; margin-bottom: 4px; color: #555;">"Name"</label>
                    <input
                        type="text"
                        style=move || field_style("name")
                        prop:value=move || draft.get().name
                        prop:disabled=read_only
                        on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                    />
                </div>
            </div>

            <div style="display: flex; gap: 12px; margin-bottom: 12px;">
                <div style="flex: 1;">
                    <label style="display: block; margin-bottom: 4px; color: #555;">"Phone"</label>
                    <MaskedInput
                        value=Signal::derive(move || draft.get().phone)
                        on_change=Callback::new(move |v: String| draft.update(|d| d.phone = v))
                        kind=MaskKind::Phone
                        placeholder="(00) 00000-0000".to_string()
                        disabled=read_only
                    />
                </div>
                <div style="flex: 1;">
                    <label style="display: block; margin-bottom: 4px; color: #555;">"Entry date"</label>
                    <input
                        type="date"
                        style="width: 100%; padding: 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px;"
                        prop:value=move || draft.get().entry_date
                        prop:disabled=read_only
                        on:input=move |ev| draft.update(|d| d.entry_date = event_target_value(&ev))
                    />
                </div>
                <div style="flex: 1;">
                    <label style="display: block; margin-bottom: 4px; color: #555;">"Status"</label>
                    <select
                        style="width: 100%; padding: 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px;"
                        prop:disabled=read_only
                        on:change=move |ev| draft.update(|d| d.status_id = event_target_value(&ev))
                    >
                        <option value="" selected=move || draft.get().status_id.is_empty()>
                            "No status"
                        </option>
                        {move || status_options.get().into_iter().map(|opt| {
                            let value = opt.id.clone();
                            let selected_id = opt.id;
                            view! {
                                <option
                                    value=value
                                    selected=move || draft.get().status_id == selected_id
                                >
                                    {opt.name}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>
            </div>
        </div>
    }
}
