//! Customer management page

use concessionario_client::Page;
use concessionario_types::{FieldErrors, Utente, UtenteDraft, UtenteFilter};
use leptos::prelude::*;

use super::{count_label, load, search, submit_add, submit_edit, visible_rows};
use crate::app::AppState;
use crate::components::{
    field_error, text_binding, Button, ButtonVariant, ListStatus, Modal, NotificationBanner, PageHeader,
    QuickFilter, TextField,
};
use crate::formatters::{format_date, or_empty};

#[component]
pub fn Utenti() -> impl IntoView {
    let state = expect_context::<AppState>();
    let api = state.api.clone();

    let page = RwSignal::new(Page::<Utente>::new());
    let busy = RwSignal::new(false);
    let add_draft = RwSignal::new(UtenteDraft::default());
    let add_errors = RwSignal::new(FieldErrors::new());
    let edit_draft = RwSignal::new(UtenteDraft::default());
    let edit_errors = RwSignal::new(FieldErrors::new());
    let filter = RwSignal::new(UtenteFilter::default());

    {
        let api = api.clone();
        Effect::new(move |_| load(api.clone(), page));
    }

    let open_add = move || {
        add_draft.set(UtenteDraft::default());
        add_errors.set(FieldErrors::new());
        page.update(Page::open_add);
    };
    let open_edit = move |utente: Utente| {
        edit_draft.set(UtenteDraft::from(&utente));
        edit_errors.set(FieldErrors::new());
        page.update(|p| p.open_edit(utente));
    };

    let on_add = {
        let api = api.clone();
        Callback::new(move |_| submit_add(api.clone(), page, &add_draft.get_untracked(), add_errors, busy))
    };
    let on_edit = {
        let api = api.clone();
        Callback::new(move |_| submit_edit(api.clone(), page, &edit_draft.get_untracked(), edit_errors, busy))
    };
    let on_search = {
        let api = api.clone();
        Callback::new(move |_| search(api.clone(), page, filter.get_untracked()))
    };
    let on_reset = {
        let api = api.clone();
        move || {
            filter.set(UtenteFilter::default());
            load(api.clone(), page);
        }
    };

    let (filter_nome, set_filter_nome) = text_binding(filter, |f| &f.nome, |f, v| f.nome = v);
    let (filter_cognome, set_filter_cognome) = text_binding(filter, |f| &f.cognome, |f, v| f.cognome = v);
    let (filter_email, set_filter_email) = text_binding(filter, |f| &f.email, |f, v| f.email = v);

    view! {
        <div class="page utenti">
            <PageHeader title="Utenti" subtitle=count_label(page, "utente", "utenti")>
                <Button text="🔍 Cerca" variant=ButtonVariant::Secondary on_click=move || page.update(Page::open_search) />
                <Button text="↺ Mostra tutti" variant=ButtonVariant::Ghost on_click=on_reset />
                <Button text="➕ Nuovo utente" variant=ButtonVariant::Primary on_click=open_add />
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
                empty_text="Nessun utente trovato"
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Nome"</th>
                            <th>"Cognome"</th>
                            <th>"Codice fiscale"</th>
                            <th>"Email"</th>
                            <th>"Telefono"</th>
                            <th>"Data di nascita"</th>
                            <th>"Indirizzo"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible_rows(page).into_iter().map(|utente| {
                            let for_edit = utente.clone();
                            view! {
                                <tr>
                                    <td>{utente.nome}</td>
                                    <td>{utente.cognome}</td>
                                    <td class="mono">{utente.codice_fiscale_utente}</td>
                                    <td>{or_empty(Some(&utente.email))}</td>
                                    <td>{or_empty(Some(&utente.telefono))}</td>
                                    <td>{format_date(utente.data_nascita.as_deref())}</td>
                                    <td>{or_empty(Some(&utente.indirizzo))}</td>
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
                is_open=Signal::derive(move || page.with(|p| p.is_add_open()))
                title="Nuovo utente"
                submit_text="Aggiungi"
                busy=busy
                on_submit=on_add
                on_close=Callback::new(move |_| page.update(Page::close_add))
                wide=true
            >
                <UtenteForm draft=add_draft errors=add_errors editing=false />
            </Modal>

            <Modal
                is_open=Signal::derive(move || page.with(|p| p.editing().is_some()))
                title="Modifica utente"
                busy=busy
                on_submit=on_edit
                on_close=Callback::new(move |_| page.update(Page::close_edit))
                wide=true
            >
                <UtenteForm draft=edit_draft errors=edit_errors editing=true />
            </Modal>

            <Modal
                is_open=Signal::derive(move || page.with(|p| p.is_search_open()))
                title="Ricerca utenti"
                submit_text="Cerca"
                on_submit=on_search
                on_close=Callback::new(move |_| page.update(Page::close_search))
            >
                <TextField label="Nome" value=filter_nome on_input=set_filter_nome />
                <TextField label="Cognome" value=filter_cognome on_input=set_filter_cognome />
                <TextField label="Email" value=filter_email on_input=set_filter_email />
            </Modal>
        </div>
    }
}

/// Add/edit form body. On edit the fiscal code cannot change.
#[component]
fn UtenteForm(draft: RwSignal<UtenteDraft>, errors: RwSignal<FieldErrors>, editing: bool) -> impl IntoView {
    let (nome, set_nome) = text_binding(draft, |d| &d.nome, |d, v| d.nome = v);
    let (cognome, set_cognome) = text_binding(draft, |d| &d.cognome, |d, v| d.cognome = v);
    let (cf, set_cf) = text_binding(draft, |d| &d.codice_fiscale_utente, |d, v| d.codice_fiscale_utente = v);
    let (email, set_email) = text_binding(draft, |d| &d.email, |d, v| d.email = v);
    let (telefono, set_telefono) = text_binding(draft, |d| &d.telefono, |d, v| d.telefono = v);
    let (nascita, set_nascita) = text_binding(draft, |d| &d.data_nascita, |d, v| d.data_nascita = v);
    let (indirizzo, set_indirizzo) = text_binding(draft, |d| &d.indirizzo, |d, v| d.indirizzo = v);

    view! {
        <div class="form-grid">
            <TextField label="Nome" value=nome on_input=set_nome error=field_error(errors, "nome") />
            <TextField label="Cognome" value=cognome on_input=set_cognome error=field_error(errors, "cognome") />
            <TextField
                label="Codice fiscale"
                value=cf
                on_input=set_cf
                error=field_error(errors, "codice_fiscale_utente")
                disabled=editing
            />
            <TextField label="Email" input_type="email" value=email on_input=set_email error=field_error(errors, "email") />
            <TextField label="Telefono" input_type="tel" value=telefono on_input=set_telefono error=field_error(errors, "telefono") />
            <TextField
                label="Data di nascita"
                input_type="date"
                value=nascita
                on_input=set_nascita
                error=field_error(errors, "data_nascita")
            />
            <TextField label="Indirizzo" value=indirizzo on_input=set_indirizzo error=field_error(errors, "indirizzo") />
        </div>
    }
}
