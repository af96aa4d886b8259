use concessionario_types::{FieldErrors, MovimentoDraft, TipoMovimento};
use leptos::prelude::*;

use crate::components::{field_error, text_binding, CheckboxField, SelectField, TextAreaField, TextField};

/// Add/edit form body for a movement.
#[component]
pub(super) fn MovimentoForm(
    draft: RwSignal<MovimentoDraft>,
    errors: RwSignal<FieldErrors>,
    #[prop(into)] customers: Signal<Vec<(String, String)>>,
    #[prop(into)] vehicles: Signal<Vec<(String, String)>>,
) -> impl IntoView {
    let tipi = Signal::derive(|| {
        TipoMovimento::ALL
            .iter()
            .map(|tipo| (tipo.as_str().to_string(), tipo.label().to_string()))
            .collect::<Vec<_>>()
    });

    let (data, set_data) = text_binding(draft, |d| &d.data_movimento, |d, v| d.data_movimento = v);
    let (importo, set_importo) = text_binding(draft, |d| &d.importo, |d, v| d.importo = v);
    let (cliente, set_cliente) =
        text_binding(draft, |d| &d.codice_fiscale_utente, |d, v| d.codice_fiscale_utente = v);
    let (telaio, set_telaio) = text_binding(draft, |d| &d.numero_telaio, |d, v| d.numero_telaio = v);
    let (note, set_note) = text_binding(draft, |d| &d.note, |d, v| d.note = v);
    let (comproprietario, set_comproprietario) = text_binding(
        draft,
        |d| &d.codice_fiscale_comproprietario,
        |d, v| d.codice_fiscale_comproprietario = v,
    );
    let has_comproprietario = Signal::derive(move || draft.with(|d| d.has_comproprietario));

    view! {
        <div class="form-grid">
            <SelectField
                label="Tipo movimento"
                options=tipi
                value=Signal::derive(move || draft.with(|d| d.tipo_movimento.as_str().to_string()))
                on_change=Callback::new(move |value: String| {
                    if let Ok(tipo) = value.parse::<TipoMovimento>() {
                        draft.update(|d| d.tipo_movimento = tipo);
                    }
                })
            />
            <TextField
                label="Data movimento"
                input_type="date"
                value=data
                on_input=set_data
                error=field_error(errors, "data_movimento")
            />
            <SelectField
                label="Cliente"
                options=customers
                value=cliente
                on_change=set_cliente
                error=field_error(errors, "codice_fiscale_utente")
                placeholder="Seleziona un cliente"
                searchable=true
            />
            <SelectField
                label="Veicolo"
                options=vehicles
                value=telaio
                on_change=set_telaio
                error=field_error(errors, "numero_telaio")
                placeholder="Seleziona un veicolo"
                searchable=true
            />
            <TextField
                label="Importo (€)"
                value=importo
                on_input=set_importo
                error=field_error(errors, "importo")
                placeholder="0,00"
            />
            <CheckboxField
                label="Con comproprietario"
                checked=has_comproprietario
                on_change=Callback::new(move |checked: bool| draft.update(|d| d.has_comproprietario = checked))
            />
            <Show when=move || has_comproprietario.get()>
                <SelectField
                    label="Comproprietario"
                    options=customers
                    value=comproprietario
                    on_change=set_comproprietario
                    error=field_error(errors, "codice_fiscale_comproprietario")
                    placeholder="Seleziona il comproprietario"
                    searchable=true
                />
            </Show>
            <TextAreaField label="Note" value=note on_input=set_note />
        </div>
    }
}
