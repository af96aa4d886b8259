//! Configuration list. Entries are created server side; only the name is editable.

use concessionario_client::Page;
use concessionario_types::{Configurazione, ConfigurazioneDraft, FieldErrors};
use leptos::prelude::*;

use super::{count_label, load, submit_edit, visible_rows};
use crate::app::AppState;
use crate::components::{
    field_error, text_binding, Button, ButtonVariant, ListStatus, Modal, NotificationBanner, PageHeader,
    QuickFilter, TextField,
};

#[component]
pub fn Configurazioni() -> impl IntoView {
    let state = expect_context::<AppState>();
    let api = state.api.clone();

    let page = RwSignal::new(Page::<Configurazione>::new());
    let busy = RwSignal::new(false);
    let draft = RwSignal::new(ConfigurazioneDraft::default());
    let errors = RwSignal::new(FieldErrors::new());

    {
        let api = api.clone();
        Effect::new(move |_| load(api.clone(), page));
    }

    let open_edit = move |config: Configurazione| {
        draft.set(ConfigurazioneDraft::from(&config));
        errors.set(FieldErrors::new());
        page.update(|p| p.open_edit(config));
    };
    let on_edit = {
        let api = api.clone();
        Callback::new(move |_| submit_edit(api.clone(), page, &draft.get_untracked(), errors, busy))
    };
    let on_refresh = {
        let api = api.clone();
        move || load(api.clone(), page)
    };

    let (nome, set_nome) = text_binding(draft, |d| &d.nome_configurazione, |d, v| d.nome_configurazione = v);

    view! {
        <div class="page configurazioni">
            <PageHeader title="Configurazioni" subtitle=count_label(page, "configurazione", "configurazioni")>
                <Button text="↻ Aggiorna" variant=ButtonVariant::Secondary on_click=on_refresh />
            </PageHeader>

            <NotificationBanner
                notice=Signal::derive(move || page.with(|p| p.notification().cloned()))
                on_dismiss=Callback::new(move |_| page.update(Page::dismiss_notification))
            />

            <QuickFilter
                value=Signal::derive(move || page.with(|p| p.quick_filter().to_string()))
                on_input=Callback::new(move |v: String| page.update(|p| p.set_quick_filter(v)))
            />

            <ListStatus
                loading=Signal::derive(move || page.with(|p| p.is_loading()))
                error=Signal::derive(move || page.with(|p| p.error().map(str::to_string)))
                empty=Signal::derive(move || page.with(|p| p.visible_items().is_empty()))
                empty_text="Nessuna configurazione trovata"
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Nome"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible_rows(page).into_iter().map(|config| {
                            let for_edit = config.clone();
                            view! {
                                <tr>
                                    <td class="mono">{config.id_configurazione}</td>
                                    <td>{config.nome_configurazione}</td>
                                    <td class="row-actions">
                                        <button class="btn btn--ghost btn--small" on:click=move |_| open_edit(for_edit.clone())>
                                            "✏️ Modifica"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </ListStatus>

            <Modal
                is_open=Signal::derive(move || page.with(|p| p.editing().is_some()))
                title="Modifica configurazione"
                busy=busy
                on_submit=on_edit
                on_close=Callback::new(move |_| page.update(Page::close_edit))
            >
                <TextField
                    label="Nome configurazione"
                    value=nome
                    on_input=set_nome
                    error=field_error(errors, "nome_configurazione")
                />
            </Modal>
        </div>
    }
}
