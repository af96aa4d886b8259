use concessionario_types::Movimento;
use leptos::prelude::*;

use crate::formatters::{format_date, format_price, or_empty};

/// Read-only view of one movement.
#[component]
pub(super) fn MovimentoDetail(movimento: Movimento) -> impl IntoView {
    let rows = vec![
        ("ID", movimento.id_movimento.to_string()),
        ("Tipo", movimento.tipo_movimento.label().to_string()),
        ("Data", format_date(movimento.data_movimento.as_deref())),
        ("Prezzo", format_price(movimento.prezzo)),
        ("Cliente", or_empty(Some(&movimento.cliente()))),
        ("Codice fiscale", or_empty(Some(&movimento.codice_fiscale_utente))),
        ("Comproprietario", or_empty(movimento.comproprietario().as_deref())),
        ("Veicolo", or_empty(Some(&movimento.veicolo()))),
        ("Numero telaio", or_empty(Some(&movimento.numero_telaio))),
        ("Note", or_empty(movimento.note.as_deref())),
    ];

    view! {
        <dl class="detail-list">
            {rows
                .into_iter()
                .map(|(label, value)| view! {
                    <div class="detail-row">
                        <dt>{label}</dt>
                        <dd>{value}</dd>
                    </div>
                })
                .collect_view()}
        </dl>
    }
}
