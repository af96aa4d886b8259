//! Sidebar navigation component

use concessionario_types::Route;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::app::AppState;

const VERSION: &str = env!("GIT_VERSION");

fn icon(route: Route) -> &'static str {
    match route {
        Route::Dashboard => "🏠",
        Route::Utenti => "👥",
        Route::Veicoli => "🚗",
        Route::Movimenti => "🔁",
        Route::Configurazioni => "⚙️",
        Route::Login => "🔑",
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let state = expect_context::<AppState>();
    let location = use_location();
    let navigate = use_navigate();

    let user = state.user;
    let username = move || user.get().map(|u| u.username).unwrap_or_default();

    let on_logout = move |_| {
        let target = state.logout();
        navigate(target.path(), Default::default());
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar-header">
                <div class="logo">
                    <span class="logo-icon">"🚘"</span>
                    <span class="logo-text">"Concessionario"</span>
                </div>
                <span class="version">{format!("v{}", VERSION)}</span>
            </div>

            <nav class="sidebar-nav">
                {Route::NAVIGATION.into_iter().map(|route| {
                    let current_path = location.pathname;
                    let path = route.path();
                    let is_active = move || {
                        let curr = current_path.get();
                        if path == "/" {
                            curr == "/"
                        } else {
                            curr.starts_with(path)
                        }
                    };

                    view! {
                        <a
                            href=path
                            class=move || format!("nav-item {}", if is_active() { "active" } else { "" })
                        >
                            <span class="nav-icon">{icon(route)}</span>
                            <span class="nav-label">{route.title()}</span>
                        </a>
                    }
                }).collect_view()}
            </nav>

            <div class="sidebar-footer">
                <div class="sidebar-user">
                    <span class="nav-icon">"👤"</span>
                    <span class="sidebar-username">{username}</span>
                </div>
                <button class="nav-item nav-item--logout" on:click=on_logout>
                    <span class="nav-icon">"⏻"</span>
                    <span class="nav-label">"Logout"</span>
                </button>
            </div>
        </aside>
    }
}
