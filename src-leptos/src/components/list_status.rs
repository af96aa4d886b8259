use leptos::prelude::*;

/// Loading spinner, error alert or empty-state text in place of a table.
#[component]
pub fn ListStatus(
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] empty: Signal<bool>,
    #[prop(into)] empty_text: String,
    children: ChildrenFn,
) -> impl IntoView {
    move || {
        if loading.get() {
            view! {
                <div class="list-status">
                    <div class="spinner"></div>
                </div>
            }
            .into_any()
        } else if let Some(message) = error.get() {
            view! { <div class="alert alert--error">{message}</div> }.into_any()
        } else if empty.get() {
            view! { <div class="list-status list-status--empty">{empty_text.clone()}</div> }.into_any()
        } else {
            children().into_any()
        }
    }
}
