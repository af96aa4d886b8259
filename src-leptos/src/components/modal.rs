//! Modal dialog component

use leptos::prelude::*;

/// Dialog with arbitrary content. Without `on_submit` only the close button
/// is shown (read-only detail views).
#[component]
pub fn Modal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(optional, into)] submit_text: Option<String>,
    #[prop(optional, into)] cancel_text: Option<String>,
    #[prop(optional, into)] busy: Option<Signal<bool>>,
    #[prop(optional, into)] on_submit: Option<Callback<()>>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(optional)] wide: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let submit_text = submit_text.unwrap_or_else(|| "Salva".to_string());
    let cancel_text =
        cancel_text.unwrap_or_else(|| (if on_submit.is_some() { "Annulla" } else { "Chiudi" }).to_string());
    let is_busy = move || busy.is_some_and(|b| b.get());
    let modal_class = if wide { "modal modal--wide" } else { "modal" };

    view! {
        <Show when=move || is_open.get()>
            <div class="modal-overlay" on:click=move |_| on_close.run(())>
                <div class=modal_class on:click=|e| e.stop_propagation()>
                    <div class="modal-header">
                        <h3 class="modal-title">{title.clone()}</h3>
                        <button class="modal-close" on:click=move |_| on_close.run(())>
                            "×"
                        </button>
                    </div>

                    <div class="modal-body">{children()}</div>

                    <div class="modal-footer">
                        <button
                            type="button"
                            class="btn btn--secondary"
                            disabled=is_busy
                            on:click=move |_| on_close.run(())
                        >
                            {cancel_text.clone()}
                        </button>
                        {on_submit.map(|submit| {
                            let submit_text = submit_text.clone();
                            view! {
                                <button
                                    type="button"
                                    class="btn btn--primary"
                                    disabled=is_busy
                                    on:click=move |_| submit.run(())
                                >
                                    {move || if is_busy() { "Attendere...".to_string() } else { submit_text.clone() }}
                                </button>
                            }
                        })}
                    </div>
                </div>
            </div>
        </Show>
    }
}
