use yew::prelude::*;

use crate::i18n::use_language;
use crate::scroll::registry::SectionId;
use crate::scroll::store::use_section_context;

#[function_component(Hero)]
pub fn hero() -> Html {
    let language = use_language();
    let sections = use_section_context();

    let go_to = |target: SectionId| {
        let navigate = sections.navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(target))
    };

    html! {
        <section id={SectionId::Home.as_str()} class="hero-section">
            <style>
                {r#"
                    .hero-section {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        position: relative;
                        padding: 8rem 1.5rem 4rem;
                        background: radial-gradient(circle at 50% 30%, rgba(6, 182, 212, 0.15), transparent 60%), #000;
                        overflow: hidden;
                    }
                    .hero-content {
                        max-width: 960px;
                        text-align: center;
                        position: relative;
                        z-index: 1;
                    }
                    .hero-greeting {
                        display: inline-block;
                        padding: 0.5rem 1.25rem;
                        border-radius: 9999px;
                        border: 1px solid rgba(6, 182, 212, 0.4);
                        color: #22d3ee;
                        margin-bottom: 1.5rem;
                    }
                    .hero-name {
                        font-size: clamp(2.5rem, 7vw, 5rem);
                        color: #fff;
                        margin: 0 0 1rem;
                    }
                    .hero-title {
                        display: block;
                        font-size: clamp(1.1rem, 3vw, 1.75rem);
                        background: linear-gradient(to right, #22d3ee, #3b82f6);
                        -webkit-background-clip: text;
                        color: transparent;
                    }
                    .hero-subtitle {
                        font-size: 1.35rem;
                        color: #e5e7eb;
                    }
                    .hero-description {
                        color: #9ca3af;
                        max-width: 720px;
                        margin: 0 auto 2.5rem;
                        line-height: 1.7;
                    }
                    .hero-cta-group {
                        display: flex;
                        gap: 1rem;
                        justify-content: center;
                        flex-wrap: wrap;
                    }
                    .hero-cta {
                        padding: 1rem 2rem;
                        border-radius: 9999px;
                        border: none;
                        font-weight: 600;
                        cursor: pointer;
                        background: linear-gradient(to right, #06b6d4, #2563eb);
                        color: #fff;
                        transition: transform 0.3s ease;
                    }
                    .hero-cta.secondary {
                        background: transparent;
                        border: 1px solid rgba(255, 255, 255, 0.3);
                    }
                    .hero-cta:hover {
                        transform: translateY(-3px);
                    }
                "#}
            </style>
            <div class="hero-content">
                <span class="hero-greeting">{ language.t("hero.greeting") }</span>
                <h1 class="hero-name">
                    { language.t("hero.name") }
                    <span class="hero-title">{ language.t("hero.title") }</span>
                </h1>
                <p class="hero-subtitle">{ language.t("hero.subtitle") }</p>
                <p class="hero-description">{ language.t("hero.description") }</p>
                <div class="hero-cta-group">
                    <button class="hero-cta" onclick={go_to(SectionId::Projects)}>
                        { language.t("hero.cta") }
                    </button>
                    <button class="hero-cta secondary" onclick={go_to(SectionId::Contact)}>
                        { language.t("hero.contact") }
                    </button>
                </div>
            </div>
        </section>
    }
}
