//! Page components
//!
//! Each management page keeps its own `Page<R>` in a signal and drives it
//! through the helpers below: a synchronous transition, one API call on
//! `spawn_local`, then the closing transition. Responses arriving after the
//! page is gone hit a disposed signal and are dropped.

mod configurazioni;
mod dashboard;
mod login;
mod movimenti;
mod utenti;
mod veicoli;

pub use configurazioni::Configurazioni;
pub use dashboard::Dashboard;
pub use login::Login;
pub use movimenti::Movimenti;
pub use utenti::Utenti;
pub use veicoli::Veicoli;

use concessionario_client::resource::PayloadOf;
use concessionario_client::{ApiClient, Creatable, Editable, Page, Resource, Searchable};
use concessionario_types::{FieldErrors, FormDraft};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Fetch the full list.
pub(crate) fn load<R>(api: ApiClient, page: RwSignal<Page<R>>)
where
    R: Resource + Send + Sync,
{
    page.update(Page::begin_load);
    spawn_local(async move {
        let result = R::fetch_all(&api).await;
        page.update(|p| p.finish_load(result));
    });
}

/// Validate the add form and, if it passes, create the record.
pub(crate) fn submit_add<R>(
    api: ApiClient,
    page: RwSignal<Page<R>>,
    draft: &R::Draft,
    errors: RwSignal<FieldErrors>,
    busy: RwSignal<bool>,
) where
    R: Creatable + Send + Sync,
    PayloadOf<R::Draft>: 'static,
{
    let payload = match draft.parse() {
        Ok(payload) => payload,
        Err(invalid) => {
            errors.set(invalid);
            return;
        }
    };
    errors.set(FieldErrors::new());
    busy.set(true);

    spawn_local(async move {
        let result = R::create(&api, &payload).await;
        busy.set(false);
        if page.try_update(|p| p.finish_add(result)).unwrap_or(false) {
            load(api, page);
        }
    });
}

/// Validate the edit form and update the record being edited.
pub(crate) fn submit_edit<R>(
    api: ApiClient,
    page: RwSignal<Page<R>>,
    draft: &R::EditDraft,
    errors: RwSignal<FieldErrors>,
    busy: RwSignal<bool>,
) where
    R: Editable + Send + Sync,
    R::Key: 'static,
    PayloadOf<R::EditDraft>: 'static,
{
    let payload = match draft.parse() {
        Ok(payload) => payload,
        Err(invalid) => {
            errors.set(invalid);
            return;
        }
    };
    errors.set(FieldErrors::new());

    let Some(key) = page.with_untracked(|p| p.editing().map(Resource::key)) else {
        return;
    };
    busy.set(true);

    spawn_local(async move {
        let result = R::update(&api, &key, &payload).await;
        busy.set(false);
        if page.try_update(|p| p.finish_edit(result)).unwrap_or(false) {
            load(api, page);
        }
    });
}

/// Run a filtered fetch; the search dialog closes only when it succeeds.
pub(crate) fn search<R>(api: ApiClient, page: RwSignal<Page<R>>, filter: R::Filter)
where
    R: Searchable + Send + Sync,
    R::Filter: 'static,
{
    page.update(Page::begin_search);
    spawn_local(async move {
        let result = R::search(&api, &filter).await;
        page.update(|p| p.finish_search(result));
    });
}

/// Rows currently visible through the quick filter.
pub(crate) fn visible_rows<R>(page: RwSignal<Page<R>>) -> Vec<R>
where
    R: Resource + Send + Sync,
{
    page.with(|p| p.visible_items().into_iter().cloned().collect())
}

/// "N elementi" subtitle for a page header.
pub(crate) fn count_label<R>(page: RwSignal<Page<R>>, singular: &'static str, plural: &'static str) -> Signal<String>
where
    R: Resource + Send + Sync,
{
    Signal::derive(move || {
        let count = page.with(|p| p.items().len());
        format!("{} {}", count, if count == 1 { singular } else { plural })
    })
}
