//! Custom Select dropdown component

use leptos::prelude::*;

/// Dropdown over `(value, label)` pairs. With `searchable` a text box narrows
/// the options, for long customer and vehicle lists.
#[component]
pub fn Select(
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(into, optional)] placeholder: Option<String>,
    #[prop(default = false)] disabled: bool,
    #[prop(default = false)] searchable: bool,
) -> impl IntoView {
    let is_open = RwSignal::new(false);
    let query = RwSignal::new(String::new());
    let placeholder = placeholder.filter(|p| !p.is_empty()).unwrap_or_else(|| "Seleziona...".to_string());

    let selected_label = Memo::new(move |_| {
        let current = value.get();
        options.with(|opts| opts.iter().find(|(v, _)| *v == current).map(|(_, label)| label.clone()))
    });

    let visible_options = Memo::new(move |_| {
        let needle = query.get().trim().to_lowercase();
        options
            .get()
            .into_iter()
            .filter(|(_, label)| needle.is_empty() || label.to_lowercase().contains(&needle))
            .collect::<Vec<_>>()
    });

    let on_select = move |new_value: String| {
        on_change.run(new_value);
        query.set(String::new());
        is_open.set(false);
    };

    view! {
        <div class="select-wrapper">
            <button
                type="button"
                class=move || {
                    if selected_label.get().is_none() { "select-button select-button--placeholder" } else { "select-button" }
                }
                on:click=move |_| is_open.update(|o| *o = !*o)
                disabled=disabled
            >
                {
                    let placeholder = placeholder.clone();
                    move || selected_label.get().unwrap_or_else(|| placeholder.clone())
                }
                <span class="select-arrow">{move || if is_open.get() { "▲" } else { "▼" }}</span>
            </button>

            <Show when=move || is_open.get()>
                <div class="select-dropdown">
                    {searchable.then(|| view! {
                        <input
                            class="form-input select-search"
                            type="text"
                            placeholder="Cerca..."
                            prop:value=move || query.get()
                            on:input=move |ev| query.set(event_target_value(&ev))
                        />
                    })}
                    <div class="select-option select-option--empty" on:click=move |_| on_select(String::new())>
                        {placeholder.clone()}
                    </div>
                    {move || visible_options.get().into_iter().map(|(val, label)| {
                        let val_clone = val.clone();
                        view! {
                            <div
                                class="select-option"
                                class:selected=move || value.get() == val
                                on:click=move |_| on_select(val_clone.clone())
                            >
                                {label}
                            </div>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
