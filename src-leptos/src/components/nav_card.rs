//! Dashboard card linking to a management page

use leptos::prelude::*;

#[component]
pub fn NavCard(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    #[prop(into)] icon: String,
    #[prop(into)] href: String,
    #[prop(optional, into)] color: String,
) -> impl IntoView {
    let color_class = if color.is_empty() { "blue".to_string() } else { color };

    view! {
        <a href=href class=format!("nav-card nav-card--{}", color_class)>
            <div class="nav-card__icon">{icon}</div>
            <div class="nav-card__content">
                <div class="nav-card__title">{title}</div>
                <div class="nav-card__description">{description}</div>
            </div>
        </a>
    }
}
