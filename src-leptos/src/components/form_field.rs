//! Labelled form inputs bound to a draft held in a signal.

use concessionario_types::FieldErrors;
use leptos::prelude::*;

use super::Select;

/// Read/write handles for one text field of a draft.
pub fn text_binding<D: Send + Sync + 'static>(
    draft: RwSignal<D>,
    get: fn(&D) -> &String,
    set: fn(&mut D, String),
) -> (Signal<String>, Callback<String>) {
    (
        Signal::derive(move || draft.with(|d| get(d).clone())),
        Callback::new(move |value: String| draft.update(|d| set(d, value))),
    )
}

/// Message for `field`, if the last validation rejected it.
pub fn field_error(errors: RwSignal<FieldErrors>, field: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
}

fn field_id(label: &str) -> String {
    format!("field-{}", label.to_lowercase().replace(|c: char| !c.is_alphanumeric(), "-"))
}

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional, into)] error: Option<Signal<Option<String>>>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] disabled: bool,
) -> impl IntoView {
    let id = field_id(&label);
    let error = move || error.and_then(|e| e.get());

    view! {
        <div class=move || if error().is_some() { "form-group form-group--invalid" } else { "form-group" }>
            <label for=id.clone()>{label}</label>
            <input
                id=id
                class="form-input"
                type=input_type.unwrap_or("text")
                placeholder=placeholder.unwrap_or_default()
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=disabled
            />
            {move || error().map(|msg| view! { <span class="form-error">{msg}</span> })}
        </div>
    }
}

#[component]
pub fn TextAreaField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    let id = field_id(&label);

    view! {
        <div class="form-group">
            <label for=id.clone()>{label}</label>
            <textarea
                id=id
                class="form-input"
                rows="3"
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        </div>
    }
}

#[component]
pub fn CheckboxField(
    #[prop(into)] label: String,
    #[prop(into)] checked: Signal<bool>,
    #[prop(into)] on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <label class="form-checkbox">
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <span>{label}</span>
        </label>
    }
}

#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] error: Option<Signal<Option<String>>>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] searchable: bool,
) -> impl IntoView {
    let error = move || error.and_then(|e| e.get());

    view! {
        <div class=move || if error().is_some() { "form-group form-group--invalid" } else { "form-group" }>
            <label>{label}</label>
            <Select options=options value=value on_change=on_change placeholder=placeholder.unwrap_or_default() searchable=searchable />
            {move || error().map(|msg| view! { <span class="form-error">{msg}</span> })}
        </div>
    }
}
