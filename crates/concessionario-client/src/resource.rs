//! Capabilities of the records shown on a management page.
//!
//! `Resource` is what every page needs (fetch the list, identify a row);
//! `Creatable`, `Editable` and `Searchable` unlock the matching dialogs on
//! [`crate::Page`]. Configurations are list-and-edit only.

use async_trait::async_trait;
use concessionario_types::{
    Configurazione, ConfigurazioneDraft, FormDraft, Movimento, MovimentoDraft, MovimentoFilter, SearchFilter, Utente,
    UtenteDraft, UtenteFilter, Veicolo, VeicoloDraft, VeicoloFilter,
};

use crate::api::ApiClient;
use crate::error::ClientError;

/// Payload produced by a draft.
pub type PayloadOf<D> = <D as FormDraft>::Payload;

#[async_trait(?Send)]
pub trait Resource: Clone + 'static {
    type Key: Clone + PartialEq + std::fmt::Debug;

    /// Path segment of the collection, used in "endpoint not found" messages.
    const NAME: &'static str;
    const LOAD_ERROR: &'static str;

    fn key(&self) -> Self::Key;

    /// Lower-cased text matched by the quick filter.
    fn search_text(&self) -> String;

    async fn fetch_all(api: &ApiClient) -> Result<Vec<Self>, ClientError>;
}

#[async_trait(?Send)]
pub trait Creatable: Resource {
    type Draft: FormDraft;

    const ADD_SUCCESS: &'static str;
    const ADD_ERROR: &'static str;

    async fn create(api: &ApiClient, payload: &PayloadOf<Self::Draft>) -> Result<Self, ClientError>;
}

#[async_trait(?Send)]
pub trait Editable: Resource {
    type EditDraft: FormDraft;

    const EDIT_SUCCESS: &'static str;
    const EDIT_ERROR: &'static str;
    /// Re-fetch the list after a successful edit, on top of patching the row.
    const REFETCH_AFTER_EDIT: bool = true;

    async fn update(api: &ApiClient, key: &Self::Key, payload: &PayloadOf<Self::EditDraft>)
        -> Result<Self, ClientError>;
}

#[async_trait(?Send)]
pub trait Searchable: Resource {
    type Filter: SearchFilter + Clone + Default;

    const SEARCH_ERROR: &'static str;

    async fn search(api: &ApiClient, filter: &Self::Filter) -> Result<Vec<Self>, ClientError>;
}

// ---- utenti ----

#[async_trait(?Send)]
impl Resource for Utente {
    type Key = String;

    const NAME: &'static str = "utenti";
    const LOAD_ERROR: &'static str = "Errore durante il recupero degli utenti. Riprova più tardi.";

    fn key(&self) -> String {
        self.codice_fiscale_utente.clone()
    }

    fn search_text(&self) -> String {
        Utente::search_text(self)
    }

    async fn fetch_all(api: &ApiClient) -> Result<Vec<Self>, ClientError> {
        api.utenti().list().await
    }
}

#[async_trait(?Send)]
impl Creatable for Utente {
    type Draft = UtenteDraft;

    const ADD_SUCCESS: &'static str = "Utente aggiunto con successo";
    const ADD_ERROR: &'static str = "Errore durante l'aggiunta dell'utente";

    async fn create(api: &ApiClient, payload: &PayloadOf<UtenteDraft>) -> Result<Self, ClientError> {
        api.utenti().create(payload).await
    }
}

#[async_trait(?Send)]
impl Editable for Utente {
    type EditDraft = UtenteDraft;

    const EDIT_SUCCESS: &'static str = "Utente aggiornato con successo";
    const EDIT_ERROR: &'static str = "Errore durante l'aggiornamento dell'utente";

    async fn update(api: &ApiClient, key: &String, payload: &PayloadOf<UtenteDraft>) -> Result<Self, ClientError> {
        api.utenti().update(key, payload).await
    }
}

#[async_trait(?Send)]
impl Searchable for Utente {
    type Filter = UtenteFilter;

    const SEARCH_ERROR: &'static str = "Errore durante la ricerca degli utenti";

    async fn search(api: &ApiClient, filter: &UtenteFilter) -> Result<Vec<Self>, ClientError> {
        api.utenti().search(filter).await
    }
}

// ---- veicoli ----

#[async_trait(?Send)]
impl Resource for Veicolo {
    type Key = String;

    const NAME: &'static str = "veicoli";
    const LOAD_ERROR: &'static str = "Errore durante il recupero dei veicoli. Riprova più tardi.";

    fn key(&self) -> String {
        self.numero_telaio.clone()
    }

    fn search_text(&self) -> String {
        Veicolo::search_text(self)
    }

    async fn fetch_all(api: &ApiClient) -> Result<Vec<Self>, ClientError> {
        api.veicoli().list().await
    }
}

#[async_trait(?Send)]
impl Creatable for Veicolo {
    type Draft = VeicoloDraft;

    const ADD_SUCCESS: &'static str = "Veicolo aggiunto con successo";
    const ADD_ERROR: &'static str = "Errore durante l'aggiunta del veicolo";

    async fn create(api: &ApiClient, payload: &PayloadOf<VeicoloDraft>) -> Result<Self, ClientError> {
        api.veicoli().create(payload).await
    }
}

#[async_trait(?Send)]
impl Editable for Veicolo {
    type EditDraft = VeicoloDraft;

    const EDIT_SUCCESS: &'static str = "Veicolo aggiornato con successo";
    const EDIT_ERROR: &'static str = "Errore durante l'aggiornamento del veicolo";

    async fn update(api: &ApiClient, key: &String, payload: &PayloadOf<VeicoloDraft>) -> Result<Self, ClientError> {
        api.veicoli().update(key, payload).await
    }
}

#[async_trait(?Send)]
impl Searchable for Veicolo {
    type Filter = VeicoloFilter;

    const SEARCH_ERROR: &'static str = "Errore durante la ricerca dei veicoli";

    async fn search(api: &ApiClient, filter: &VeicoloFilter) -> Result<Vec<Self>, ClientError> {
        api.veicoli().search(filter).await
    }
}

// ---- movimenti ----

#[async_trait(?Send)]
impl Resource for Movimento {
    type Key = i64;

    const NAME: &'static str = "movimenti";
    const LOAD_ERROR: &'static str = "Errore durante il recupero dei movimenti. Riprova più tardi.";

    fn key(&self) -> i64 {
        self.id_movimento
    }

    fn search_text(&self) -> String {
        Movimento::search_text(self)
    }

    async fn fetch_all(api: &ApiClient) -> Result<Vec<Self>, ClientError> {
        api.movimenti().list().await
    }
}

#[async_trait(?Send)]
impl Creatable for Movimento {
    type Draft = MovimentoDraft;

    const ADD_SUCCESS: &'static str = "Movimento aggiunto con successo";
    const ADD_ERROR: &'static str = "Errore durante l'aggiunta del movimento";

    async fn create(api: &ApiClient, payload: &PayloadOf<MovimentoDraft>) -> Result<Self, ClientError> {
        api.movimenti().create(payload).await
    }
}

#[async_trait(?Send)]
impl Editable for Movimento {
    type EditDraft = MovimentoDraft;

    const EDIT_SUCCESS: &'static str = "Movimento aggiornato con successo";
    const EDIT_ERROR: &'static str = "Errore durante l'aggiornamento del movimento";

    async fn update(api: &ApiClient, key: &i64, payload: &PayloadOf<MovimentoDraft>) -> Result<Self, ClientError> {
        api.movimenti().update(*key, payload).await
    }
}

#[async_trait(?Send)]
impl Searchable for Movimento {
    type Filter = MovimentoFilter;

    const SEARCH_ERROR: &'static str = "Errore durante la ricerca dei movimenti";

    async fn search(api: &ApiClient, filter: &MovimentoFilter) -> Result<Vec<Self>, ClientError> {
        api.movimenti().search(filter).await
    }
}

// ---- configurazioni ----

#[async_trait(?Send)]
impl Resource for Configurazione {
    type Key = i64;

    const NAME: &'static str = "configurazioni";
    const LOAD_ERROR: &'static str = "Errore durante il recupero delle configurazioni. Riprova più tardi.";

    fn key(&self) -> i64 {
        self.id_configurazione
    }

    fn search_text(&self) -> String {
        Configurazione::search_text(self)
    }

    async fn fetch_all(api: &ApiClient) -> Result<Vec<Self>, ClientError> {
        api.configurazioni().list().await
    }
}

#[async_trait(?Send)]
impl Editable for Configurazione {
    type EditDraft = ConfigurazioneDraft;

    const EDIT_SUCCESS: &'static str = "Configurazione aggiornata con successo";
    const EDIT_ERROR: &'static str = "Errore durante l'aggiornamento";
    const REFETCH_AFTER_EDIT: bool = false;

    async fn update(
        api: &ApiClient,
        key: &i64,
        payload: &PayloadOf<ConfigurazioneDraft>,
    ) -> Result<Self, ClientError> {
        api.configurazioni().update(*key, payload).await
    }
}
