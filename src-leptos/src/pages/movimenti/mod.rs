//! Sales and purchases page

mod detail;
mod form;

use concessionario_client::{ApiClient, Page};
use concessionario_types::{FieldErrors, Movimento, MovimentoDraft, MovimentoFilter, Utente, Veicolo};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{count_label, load, search, submit_add, submit_edit, visible_rows};
use crate::app::AppState;
use crate::components::{
    Button, ButtonVariant, ListStatus, Modal, NotificationBanner, PageHeader, QuickFilter, SelectField,
};
use crate::formatters::{format_date, format_price, or_empty};
use detail::MovimentoDetail;
use form::MovimentoForm;

/// Pick-list options for a customer select.
fn customer_options(utenti: &[Utente]) -> Vec<(String, String)> {
    utenti
        .iter()
        .map(|u| (u.codice_fiscale_utente.clone(), format!("{} ({})", u.full_name(), u.codice_fiscale_utente)))
        .collect()
}

/// Pick-list options for a vehicle select.
fn vehicle_options(veicoli: &[Veicolo]) -> Vec<(String, String)> {
    veicoli
        .iter()
        .map(|v| (v.numero_telaio.clone(), format!("{} ({})", v.label(), v.numero_telaio)))
        .collect()
}

/// Fill the customer and vehicle lookups. Failures only leave a pick-list empty.
fn load_lookups(api: ApiClient, customers: RwSignal<Vec<Utente>>, vehicles: RwSignal<Vec<Veicolo>>) {
    spawn_local(async move {
        match api.utenti().list().await {
            Ok(utenti) => customers.set(utenti),
            Err(e) => log::warn!("Customer lookup failed: {}", e),
        }
        match api.veicoli().list().await {
            Ok(veicoli) => vehicles.set(veicoli),
            Err(e) => log::warn!("Vehicle lookup failed: {}", e),
        }
    });
}

#[component]
pub fn Movimenti() -> impl IntoView {
    let state = expect_context::<AppState>();
    let api = state.api.clone();

    let page = RwSignal::new(Page::<Movimento>::new());
    let busy = RwSignal::new(false);
    let add_draft = RwSignal::new(MovimentoDraft::default());
    let add_errors = RwSignal::new(FieldErrors::new());
    let edit_draft = RwSignal::new(MovimentoDraft::default());
    let edit_errors = RwSignal::new(FieldErrors::new());
    let filter = RwSignal::new(MovimentoFilter::default());

    let customers = RwSignal::new(Vec::<Utente>::new());
    let vehicles = RwSignal::new(Vec::<Veicolo>::new());
    let available = RwSignal::new(Vec::<Veicolo>::new());

    {
        let api = api.clone();
        Effect::new(move |_| {
            load(api.clone(), page);
            load_lookups(api.clone(), customers, vehicles);
        });
    }

    let open_add = {
        let api = api.clone();
        move || {
            add_draft.set(MovimentoDraft::default());
            add_errors.set(FieldErrors::new());
            page.update(Page::open_add);

            let api = api.clone();
            spawn_local(async move {
                match api.veicoli().list_available().await {
                    Ok(veicoli) => available.set(veicoli),
                    Err(e) => log::warn!("Available vehicles lookup failed: {}", e),
                }
            });
        }
    };
    let open_edit = move |movimento: Movimento| {
        edit_draft.set(MovimentoDraft::from(&movimento));
        edit_errors.set(FieldErrors::new());
        page.update(|p| p.open_edit(movimento));
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
            filter.set(MovimentoFilter::default());
            load(api.clone(), page);
        }
    };

    let customer_list = Signal::derive(move || customers.with(|u| customer_options(u)));
    let vehicle_list = Signal::derive(move || vehicles.with(|v| vehicle_options(v)));
    let available_list = Signal::derive(move || available.with(|v| vehicle_options(v)));

    view! {
        <div class="page movimenti">
            <PageHeader title="Movimenti" subtitle=count_label(page, "movimento", "movimenti")>
                <Button text="🔍 Cerca" variant=ButtonVariant::Secondary on_click=move || page.update(Page::open_search) />
                <Button text="↺ Mostra tutti" variant=ButtonVariant::Ghost on_click=on_reset />
                <Button text="➕ Nuovo movimento" variant=ButtonVariant::Primary on_click=open_add />
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
                empty_text="Nessun movimento trovato"
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Data"</th>
                            <th>"Tipo"</th>
                            <th>"Cliente"</th>
                            <th>"Comproprietario"</th>
                            <th>"Veicolo"</th>
                            <th class="numeric">"Prezzo"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible_rows(page).into_iter().map(|movimento| {
                            let key = movimento.id_movimento;
                            let for_edit = movimento.clone();
                            let tipo = movimento.tipo_movimento;
                            view! {
                                <tr>
                                    <td>{format_date(movimento.data_movimento.as_deref())}</td>
                                    <td>
                                        <span class=format!("badge badge--{}", tipo.as_str().to_lowercase())>
                                            {tipo.label()}
                                        </span>
                                    </td>
                                    <td>{or_empty(Some(&movimento.cliente()))}</td>
                                    <td>{or_empty(movimento.comproprietario().as_deref())}</td>
                                    <td>{or_empty(Some(&movimento.veicolo()))}</td>
                                    <td class="numeric">{format_price(movimento.prezzo)}</td>
                                    <td class="row-actions">
                                        <button class="btn btn--ghost btn--small" on:click=move |_| {
                                            page.update(|p| {
                                                p.view_by_key(&key);
                                            });
                                        }>
                                            "👁️ Dettagli"
                                        </button>
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
                title="Nuovo movimento"
                submit_text="Aggiungi"
                busy=busy
                on_submit=on_add
                on_close=Callback::new(move |_| page.update(Page::close_add))
                wide=true
            >
                <MovimentoForm draft=add_draft errors=add_errors customers=customer_list vehicles=available_list />
            </Modal>

            <Modal
                is_open=Signal::derive(move || page.with(|p| p.editing().is_some()))
                title="Modifica movimento"
                busy=busy
                on_submit=on_edit
                on_close=Callback::new(move |_| page.update(Page::close_edit))
                wide=true
            >
                <MovimentoForm draft=edit_draft errors=edit_errors customers=customer_list vehicles=vehicle_list />
            </Modal>

            <Modal
                is_open=Signal::derive(move || page.with(|p| p.is_search_open()))
                title="Ricerca movimenti"
                submit_text="Cerca"
                on_submit=on_search
                on_close=Callback::new(move |_| page.update(Page::close_search))
            >
                <SelectField
                    label="Cliente"
                    options=customer_list
                    value=Signal::derive(move || filter.with(|f| f.codice_fiscale_utente.clone()))
                    on_change=Callback::new(move |cf: String| filter.update(|f| f.codice_fiscale_utente = cf))
                    placeholder="Tutti i clienti"
                    searchable=true
                />
                <SelectField
                    label="Veicolo"
                    options=vehicle_list
                    value=Signal::derive(move || filter.with(|f| f.numero_telaio.clone()))
                    on_change=Callback::new(move |telaio: String| filter.update(|f| f.numero_telaio = telaio))
                    placeholder="Tutti i veicoli"
                    searchable=true
                />
            </Modal>

            <Modal
                is_open=Signal::derive(move || page.with(|p| p.viewing().is_some()))
                title="Dettaglio movimento"
                on_close=Callback::new(move |_| page.update(Page::close_view))
                wide=true
            >
                {move || page.with(|p| p.viewing().cloned()).map(|movimento| view! { <MovimentoDetail movimento=movimento /> })}
            </Modal>
        </div>
    }
}
