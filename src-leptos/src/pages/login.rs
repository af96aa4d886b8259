//! Login page

use concessionario_client::guard::{self, GuardDecision};
use concessionario_types::{FieldErrors, FormDraft, LoginDraft, Route as AppRoute};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_navigate;

use crate::app::AppState;
use crate::components::{field_error, text_binding, Button, ButtonVariant, TextField};

#[component]
pub fn Login() -> impl IntoView {
    let state = expect_context::<AppState>();
    let auth = state.auth;

    let draft = RwSignal::new(LoginDraft::default());
    let errors = RwSignal::new(FieldErrors::new());
    let failure = RwSignal::new(Option::<String>::None);
    let loading = RwSignal::new(false);
    let navigate = use_navigate();

    let do_submit = move || {
        failure.set(None);
        let request = match draft.get_untracked().parse() {
            Ok(request) => request,
            Err(invalid) => {
                errors.set(invalid);
                return;
            }
        };
        errors.set(FieldErrors::new());
        loading.set(true);

        let state = state.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match state.login(&request.email, &request.password).await {
                Ok(_) => navigate(AppRoute::Dashboard.path(), Default::default()),
                Err(e) => {
                    failure.set(Some(e.to_string()));
                    loading.set(false);
                }
            }
        });
    };

    let (email, set_email) = text_binding(draft, |d| &d.email, |d, v| d.email = v);
    let (password, set_password) = text_binding(draft, |d| &d.password, |d, v| d.password = v);

    let submit_for_form = do_submit.clone();

    move || {
        if let GuardDecision::Redirect(target) = guard::decide_route(AppRoute::Login, auth.get()) {
            return view! { <Redirect path=target.path() /> }.into_any();
        }

        let submit_for_form = submit_for_form.clone();
        let submit_for_button = do_submit.clone();
        view! {
            <div class="login-page">
                <div class="login-container">
                    <div class="login-header">
                        <span class="login-logo">"🚘"</span>
                        <h1>"Concessionario"</h1>
                        <p class="login-subtitle">"Accedi per gestire clienti, veicoli e movimenti"</p>
                    </div>

                    <Show when=move || failure.get().is_some()>
                        <div class="alert alert--error">
                            <span>{move || failure.get().unwrap_or_default()}</span>
                        </div>
                    </Show>

                    <form
                        class="login-form"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            submit_for_form();
                        }
                    >
                        <TextField
                            label="Email"
                            input_type="email"
                            placeholder="nome@concessionario.it"
                            value=email
                            on_input=set_email
                            error=field_error(errors, "email")
                        />
                        <TextField
                            label="Password"
                            input_type="password"
                            value=password
                            on_input=set_password
                            error=field_error(errors, "password")
                        />

                        <Button
                            text="Accedi"
                            variant=ButtonVariant::Primary
                            loading=loading
                            on_click=submit_for_button
                            class="btn--full-width"
                        />
                    </form>
                </div>
            </div>
        }
        .into_any()
    }
}
