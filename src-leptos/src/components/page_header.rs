use leptos::prelude::*;

/// Page title with a live subtitle and action buttons on the right.
#[component]
pub fn PageHeader(#[prop(into)] title: String, #[prop(into)] subtitle: Signal<String>, children: Children) -> impl IntoView {
    view! {
        <header class="page-header">
            <div class="header-left">
                <h1>{title}</h1>
                <p class="subtitle">{move || subtitle.get()}</p>
            </div>
            <div class="header-actions">{children()}</div>
        </header>
    }
}

/// Client-side filter box over the loaded rows.
#[component]
pub fn QuickFilter(#[prop(into)] value: Signal<String>, #[prop(into)] on_input: Callback<String>) -> impl IntoView {
    view! {
        <div class="toolbar">
            <input
                class="form-input toolbar-search"
                type="search"
                placeholder="Filtra elenco..."
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
