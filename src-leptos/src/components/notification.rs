//! Auto-dismissing success/error banner.

use concessionario_types::Notification;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn NotificationBanner(
    #[prop(into)] notice: Signal<Option<Notification>>,
    #[prop(into)] on_dismiss: Callback<()>,
) -> impl IntoView {
    // Each new notification gets its own timer; a timer only dismisses the
    // notification it was started for, matched by id.
    Effect::new(move |_| {
        let Some(current) = notice.get() else {
            return;
        };
        spawn_local(async move {
            TimeoutFuture::new(current.auto_hide_ms).await;
            if notice.try_get_untracked().flatten().map(|n| n.id) == Some(current.id) {
                on_dismiss.run(());
            }
        });
    });

    view! {
        {move || notice.get().map(|n| view! {
            <div class=format!("alert {}", n.severity.class()) role="status">
                <span>{n.message}</span>
                <button class="alert-close" on:click=move |_| on_dismiss.run(())>"×"</button>
            </div>
        })}
    }
}
