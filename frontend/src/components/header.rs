use yew::prelude::*;

use crate::config::HEADER_SCROLLED_PX;
use crate::data::PERSONAL;
use crate::i18n::use_language;
use crate::scroll::hooks::use_scrolled_past;
use crate::scroll::registry::SectionId;
use crate::scroll::store::use_section_context;

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_scrolled_past(HEADER_SCROLLED_PX);
    let sections = use_section_context();
    let language = use_language();

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let toggle_language = {
        let toggle = language.toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            toggle.emit(());
        })
    };

    let nav_button = |section: SectionId, class: &'static str| {
        let onclick = {
            let menu_open = menu_open.clone();
            let navigate = sections.navigate.clone();
            Callback::from(move |_: MouseEvent| {
                menu_open.set(false);
                navigate.emit(section);
            })
        };
        let active = sections.current == section;
        html! {
            <button
                key={section.as_str()}
                class={classes!(class, active.then(|| "active"))}
                aria-current={active.then(|| "true")}
                {onclick}
            >
                { language.t(&section.nav_key()).to_string() }
            </button>
        }
    };

    html! {
        <header class={classes!("site-header", is_scrolled.then(|| "scrolled"))}>
            <style>
                {r#"
                    .site-header {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        z-index: 40;
                        background: rgba(0, 0, 0, 0.8);
                        backdrop-filter: blur(12px);
                        transition: all 0.5s ease;
                    }
                    .site-header.scrolled {
                        background: rgba(0, 0, 0, 0.95);
                        border-bottom: 1px solid rgba(6, 182, 212, 0.3);
                    }
                    .header-content {
                        max-width: 1280px;
                        margin: 0 auto;
                        padding: 1rem 1.5rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .header-brand {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                    }
                    .header-logo {
                        width: 56px;
                        height: 56px;
                        border-radius: 50%;
                        border: 2px solid #22d3ee;
                        object-fit: cover;
                    }
                    .header-brand h1 {
                        font-size: 1.25rem;
                        color: #fff;
                        margin: 0;
                    }
                    .header-brand p {
                        font-size: 0.75rem;
                        color: #22d3ee;
                        margin: 0;
                    }
                    .desktop-nav {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .nav-button {
                        padding: 0.6rem 1.25rem;
                        border: none;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.05);
                        color: #d1d5db;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }
                    .nav-button:hover {
                        background: rgba(255, 255, 255, 0.1);
                        color: #fff;
                    }
                    .nav-button.active {
                        background: linear-gradient(to right, rgba(6, 182, 212, 0.3), rgba(59, 130, 246, 0.3));
                        color: #fff;
                        box-shadow: 0 4px 12px rgba(6, 182, 212, 0.25);
                    }
                    .language-toggle {
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        background: rgba(255, 255, 255, 0.1);
                        color: #fff;
                        cursor: pointer;
                    }
                    .burger-menu {
                        display: none;
                        background: rgba(255, 255, 255, 0.1);
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        border-radius: 9999px;
                        padding: 0.75rem;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        display: block;
                        width: 20px;
                        height: 2px;
                        margin: 4px 0;
                        background: #fff;
                    }
                    .mobile-nav {
                        display: none;
                    }
                    .mobile-nav-button {
                        display: block;
                        width: 100%;
                        padding: 0.75rem 1rem;
                        border: none;
                        background: none;
                        color: #d1d5db;
                        font-size: 1.1rem;
                        text-align: start;
                    }
                    .mobile-nav-button.active {
                        color: #fff;
                        background: rgba(6, 182, 212, 0.2);
                        border-inline-start: 2px solid #22d3ee;
                    }
                    @media (max-width: 768px) {
                        .desktop-nav {
                            display: none;
                        }
                        .burger-menu {
                            display: block;
                        }
                        .mobile-nav.open {
                            display: block;
                            padding: 1rem 0;
                            background: rgba(0, 0, 0, 0.95);
                            border-top: 1px solid rgba(31, 41, 55, 0.5);
                        }
                    }
                "#}
            </style>
            <div class="header-content">
                <div class="header-brand">
                    <img class="header-logo" src={PERSONAL.logo} alt={language.t("hero.name").to_string()} />
                    <div>
                        <h1>{ language.t("header.brand") }</h1>
                        <p>{ language.t("header.tagline") }</p>
                    </div>
                </div>

                <nav class="desktop-nav">
                    { for SectionId::ALL.iter().map(|&section| nav_button(section, "nav-button")) }
                    <button class="language-toggle" onclick={toggle_language.clone()}>
                        { language.lang.toggle_label() }
                    </button>
                </nav>

                <button class="burger-menu" onclick={toggle_menu} aria-expanded={(*menu_open).to_string()}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            <nav class={classes!("mobile-nav", (*menu_open).then(|| "open"))}>
                { for SectionId::ALL.iter().map(|&section| nav_button(section, "mobile-nav-button")) }
                <button class="mobile-nav-button" onclick={toggle_language}>
                    { language.lang.toggle_label() }
                </button>
            </nav>
        </header>
    }
}
