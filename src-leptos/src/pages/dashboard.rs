//! Dashboard page: one card per management page.

use concessionario_types::Route as AppRoute;
use leptos::prelude::*;

use crate::app::AppState;
use crate::components::NavCard;

fn card(route: AppRoute) -> Option<(&'static str, &'static str, &'static str)> {
    match route {
        AppRoute::Utenti => Some(("👥", "Anagrafica clienti: inserimento, modifica e ricerca", "blue")),
        AppRoute::Veicoli => Some(("🚗", "Parco veicoli e disponibilità alla vendita", "green")),
        AppRoute::Movimenti => Some(("🔁", "Vendite e acquisti con cliente e veicolo", "amber")),
        AppRoute::Configurazioni => Some(("⚙️", "Impostazioni di sistema", "gray")),
        AppRoute::Dashboard | AppRoute::Login => None,
    }
}

#[component]
pub fn Dashboard() -> impl IntoView {
    let state = expect_context::<AppState>();
    let user = state.user;

    let greeting = move || match user.get() {
        Some(user) => format!("Benvenuto, {}", user.username),
        None => "Benvenuto".to_string(),
    };

    view! {
        <div class="page dashboard">
            <header class="page-header">
                <div class="header-left">
                    <h1>"Dashboard"</h1>
                    <p class="subtitle">{greeting}</p>
                </div>
            </header>

            <div class="nav-cards">
                {AppRoute::NAVIGATION
                    .into_iter()
                    .filter_map(|route| card(route).map(|(icon, description, color)| view! {
                        <NavCard
                            title=route.title()
                            description=description
                            icon=icon
                            href=route.path()
                            color=color
                        />
                    }))
                    .collect_view()}
            </div>
        </div>
    }
}
