//! Vehicle inventory page

use concessionario_client::Page;
use concessionario_types::{FieldErrors, Veicolo, VeicoloDraft, VeicoloFilter};
use leptos::prelude::*;

use super::{count_label, load, search, submit_add, submit_edit, visible_rows};
use crate::app::AppState;
use crate::components::{
    field_error, text_binding, Button, ButtonVariant, CheckboxField, ListStatus, Modal, NotificationBanner,
    PageHeader, QuickFilter, TextField,
};

#[component]
pub fn Veicoli() -> impl IntoView {
    let state = expect_context::<AppState>();
    let api = state.api.clone();

    let page = RwSignal::new(Page::<Veicolo>::new());
    let busy = RwSignal::new(false);
    let add_draft = RwSignal::new(VeicoloDraft::default());
    let add_errors = RwSignal::new(FieldErrors::new());
    let edit_draft = RwSignal::new(VeicoloDraft::default());
    let edit_errors = RwSignal::new(FieldErrors::new());
    let filter = RwSignal::new(VeicoloFilter::default());

    {
        let api = api.clone();
        Effect::new(move |_| load(api.clone(), page));
    }

    let open_add = move || {
        add_draft.set(VeicoloDraft::default());
        add_errors.set(FieldErrors::new());
        page.update(Page::open_add);
    };
    let open_edit = move |veicolo: Veicolo| {
        edit_draft.set(VeicoloDraft::from(&veicolo));
        edit_errors.set(FieldErrors::new());
        page.update(|p| p.open_edit(veicolo));
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
            filter.set(VeicoloFilter::default());
            load(api.clone(), page);
        }
    };

    let (filter_telaio, set_filter_telaio) =
        text_binding(filter, |f| &f.numero_telaio, |f, v| f.numero_telaio = v);
    let (filter_marca, set_filter_marca) = text_binding(filter, |f| &f.marca, |f, v| f.marca = v);
    let (filter_modello, set_filter_modello) = text_binding(filter, |f| &f.modello, |f, v| f.modello = v);

    view! {
        <div class="page veicoli">
            <PageHeader title="Veicoli" subtitle=count_label(page, "veicolo", "veicoli")>
                <Button text="🔍 Cerca" variant=ButtonVariant::Secondary on_click=move || page.update(Page::open_search) />
                <Button text="↺ Mostra tutti" variant=ButtonVariant::Ghost on_click=on_reset />
                <Button text="➕ Nuovo veicolo" variant=ButtonVariant::Primary on_click=open_add />
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
                empty_text="Nessun veicolo trovato"
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Numero telaio"</th>
                            <th>"Marca"</th>
                            <th>"Modello"</th>
                            <th>"Anno"</th>
                            <th>"Disponibilità"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible_rows(page).into_iter().map(|veicolo| {
                            let for_edit = veicolo.clone();
                            let (badge_class, badge_text) = if veicolo.disponibile {
                                ("badge badge--success", "Disponibile")
                            } else {
                                ("badge badge--neutral", "Non disponibile")
                            };
                            view! {
                                <tr>
                                    <td class="mono">{veicolo.numero_telaio}</td>
                                    <td>{veicolo.marca}</td>
                                    <td>{veicolo.modello}</td>
                                    <td>{veicolo.anno_immatricolazione}</td>
                                    <td><span class=badge_class>{badge_text}</span></td>
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
                title="Nuovo veicolo"
                submit_text="Aggiungi"
                busy=busy
                on_submit=on_add
                on_close=Callback::new(move |_| page.update(Page::close_add))
            >
                <VeicoloForm draft=add_draft errors=add_errors editing=false />
            </Modal>

            <Modal
                is_open=Signal::derive(move || page.with(|p| p.editing().is_some()))
                title="Modifica veicolo"
                busy=busy
                on_submit=on_edit
                on_close=Callback::new(move |_| page.update(Page::close_edit))
            >
                <VeicoloForm draft=edit_draft errors=edit_errors editing=true />
            </Modal>

            <Modal
                is_open=Signal::derive(move || page.with(|p| p.is_search_open()))
                title="Ricerca veicoli"
                submit_text="Cerca"
                on_submit=on_search
                on_close=Callback::new(move |_| page.update(Page::close_search))
            >
                <TextField label="Numero telaio" value=filter_telaio on_input=set_filter_telaio />
                <TextField label="Marca" value=filter_marca on_input=set_filter_marca />
                <TextField label="Modello" value=filter_modello on_input=set_filter_modello />
            </Modal>
        </div>
    }
}

/// Add/edit form body. On edit the chassis number cannot change.
#[component]
fn VeicoloForm(draft: RwSignal<VeicoloDraft>, errors: RwSignal<FieldErrors>, editing: bool) -> impl IntoView {
    let (telaio, set_telaio) = text_binding(draft, |d| &d.numero_telaio, |d, v| d.numero_telaio = v);
    let (marca, set_marca) = text_binding(draft, |d| &d.marca, |d, v| d.marca = v);
    let (modello, set_modello) = text_binding(draft, |d| &d.modello, |d, v| d.modello = v);
    let (anno, set_anno) =
        text_binding(draft, |d| &d.anno_immatricolazione, |d, v| d.anno_immatricolazione = v);

    view! {
        <div class="form-grid">
            <TextField
                label="Numero telaio"
                value=telaio
                on_input=set_telaio
                error=field_error(errors, "numero_telaio")
                disabled=editing
            />
            <TextField label="Marca" value=marca on_input=set_marca error=field_error(errors, "marca") />
            <TextField label="Modello" value=modello on_input=set_modello error=field_error(errors, "modello") />
            <TextField
                label="Anno immatricolazione"
                input_type="number"
                value=anno
                on_input=set_anno
                error=field_error(errors, "anno_immatricolazione")
            />
            <CheckboxField
                label="Disponibile alla vendita"
                checked=Signal::derive(move || draft.with(|d| d.disponibile))
                on_change=Callback::new(move |checked: bool| draft.update(|d| d.disponibile = checked))
            />
        </div>
    }
}
