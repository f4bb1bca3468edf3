use browser::{format_phone, format_tax_id};
use contracts::PersonKind;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskKind {
    TaxId,
    Phone,
}

/// Text input whose displayed value is the deterministic, punctuated
/// rendering of the digits typed so far. The mask runs on every input event
/// and the formatted value is what reaches `on_change` — the raw digits can
/// always be recovered with `strip_digits`.
#[component]
pub fn MaskedInput(
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    kind: MaskKind,
    /// Which tax-id shape applies; ignored for phone masks.
    #[prop(optional, into)]
    person_kind: Option<Signal<PersonKind>>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    let apply = move |raw: String| match kind {
        MaskKind::TaxId => {
            let person = person_kind.map(|s| s.get()).unwrap_or_default();
            format_tax_id(&raw, person)
        }
        MaskKind::Phone => format_phone(&raw),
    };

    view! {
        <input
            type="text"
            style="width: 100%; padding: 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px;"
            prop:value=move || value.get()
            placeholder=move || placeholder.get().unwrap_or_default()
            prop:disabled=move || disabled.get().unwrap_or(false)
            on:input=move |ev| on_change.run(apply(event_target_value(&ev)))
        />
    }
}
