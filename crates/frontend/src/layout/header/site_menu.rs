use super::MenuContext;
use contracts::shared::config::BehaviorConfig;
use leptos::prelude::*;

pub const NAV_ID: &str = "main-nav";

const NAV_LINKS: [(&str, &str); 4] = [
    ("index.html", "Início"),
    ("sobre.html", "Sobre nós"),
    ("projetos.html", "Projetos"),
    ("cadastro.html", "Seja voluntário"),
];

#[component]
pub fn SiteMenu(config: BehaviorConfig) -> impl IntoView {
    let ctx = MenuContext::new(config.mobile_breakpoint_px);

    view! {
        <button
            type="button"
            class="menu-toggle"
            aria-controls=NAV_ID
            aria-label="Abrir menu"
            aria-expanded=move || ctx.menu.get().aria_expanded()
            on:click=move |_| ctx.toggle()
        >
            <span class="menu-toggle__bar"></span>
            <span class="menu-toggle__bar"></span>
            <span class="menu-toggle__bar"></span>
        </button>
        <nav id=NAV_ID class=move || ctx.menu.get().nav_class("main-nav")>
            <ul class="main-nav__list">
                {NAV_LINKS
                    .iter()
                    .map(|(href, title)| {
                        view! {
                            <li class="main-nav__item">
                                <a class="main-nav__link" href=*href>
                                    {*title}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
