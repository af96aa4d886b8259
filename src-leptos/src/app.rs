//! Main App component with routing

use std::sync::Arc;

use concessionario_client::guard::{self, AuthState, GuardDecision};
use concessionario_client::{ApiClient, ClientConfig, LoginError, SessionStore};
use concessionario_types::{Notification, Route as AppRoute, SessionUser};
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::components::{NotificationBanner, Sidebar};
use crate::pages::{Configurazioni, Dashboard, Login, Movimenti, Utenti, Veicoli};
use crate::storage::BrowserStorage;

/// Global application state
#[derive(Clone)]
pub struct AppState {
    pub api: ApiClient,
    pub session: Arc<SessionStore>,
    pub auth: RwSignal<AuthState>,
    pub user: RwSignal<Option<SessionUser>>,
    /// Login/logout banner
    pub notice: RwSignal<Option<Notification>>,
}

impl AppState {
    pub fn new(api: ApiClient) -> Self {
        let session = Arc::new(SessionStore::new(api.clone()));
        Self {
            api,
            auth: RwSignal::new(session.auth_state()),
            user: RwSignal::new(None),
            notice: RwSignal::new(None),
            session,
        }
    }

    /// Copy the session store into the signals.
    fn sync(&self) {
        self.auth.set(self.session.auth_state());
        self.user.set(self.session.current_user());
        if let Some(notice) = self.session.take_notification() {
            self.notice.set(Some(notice));
        }
    }

    pub fn restore(&self) {
        self.session.restore();
        self.sync();
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<SessionUser, LoginError> {
        let result = self.session.login(email, password).await;
        self.sync();
        result
    }

    /// Clears the session; returns the route to navigate to.
    pub fn logout(&self) -> AppRoute {
        let target = self.session.logout();
        self.sync();
        target
    }
}

/// API root baked in at build time, falling back to the local backend.
fn api_config() -> ClientConfig {
    option_env!("CONCESSIONARIO_API_URL")
        .filter(|url| !url.trim().is_empty())
        .map_or_else(ClientConfig::default, ClientConfig::new)
}

/// Root App component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let api = match ApiClient::new(api_config(), Arc::new(BrowserStorage)) {
        Ok(api) => api,
        Err(e) => {
            log::error!("Invalid API configuration: {}", e);
            return view! {
                <div class="fatal-error">
                    <h1>"Configurazione non valida"</h1>
                    <p>{e.to_string()}</p>
                </div>
            }
            .into_any();
        }
    };

    let state = AppState::new(api);
    provide_context(state.clone());

    // Restore after the first render so the guard shows its placeholder
    // until storage has been read.
    Effect::new(move |_| state.restore());

    view! {
        <Title text="Concessionario" />
        <Router>
            <Routes fallback=|| view! { <Redirect path="/" /> }>
                <Route path=path!("/login") view=Login />
                <Route path=path!("/") view=|| view! { <Protected route=AppRoute::Dashboard><Dashboard /></Protected> } />
                <Route path=path!("/utenti") view=|| view! { <Protected route=AppRoute::Utenti><Utenti /></Protected> } />
                <Route path=path!("/veicoli") view=|| view! { <Protected route=AppRoute::Veicoli><Veicoli /></Protected> } />
                <Route path=path!("/movimenti") view=|| view! { <Protected route=AppRoute::Movimenti><Movimenti /></Protected> } />
                <Route
                    path=path!("/configurazioni")
                    view=|| view! { <Protected route=AppRoute::Configurazioni><Configurazioni /></Protected> }
                />
            </Routes>
            <SessionBanner />
        </Router>
    }
    .into_any()
}

/// Renders `children` inside the app shell once the guard lets `route` through.
#[component]
fn Protected(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let state = expect_context::<AppState>();

    move || match guard::decide_route(route, state.auth.get()) {
        GuardDecision::Loading => view! {
            <div class="loading-screen">
                <div class="spinner"></div>
                <p>"Caricamento..."</p>
            </div>
        }
        .into_any(),
        GuardDecision::Render(route) => {
            let children = children.clone();
            view! {
                <Title text=format!("{} | Concessionario", route.title()) />
                <div class="app-container">
                    <Sidebar />
                    <main class="main-content">{children()}</main>
                </div>
            }
            .into_any()
        }
        GuardDecision::Redirect(target) => view! { <Redirect path=target.path() /> }.into_any(),
    }
}

/// Login/logout confirmation, shown over whatever page is active.
#[component]
fn SessionBanner() -> impl IntoView {
    let state = expect_context::<AppState>();
    let notice = state.notice;

    view! {
        <div class="session-banner">
            <NotificationBanner notice=Signal::derive(move || notice.get()) on_dismiss=Callback::new(move |_| notice.set(None)) />
        </div>
    }
}
