use yew::prelude::*;

use crate::data::SERVICES;
use crate::i18n::use_language;
use crate::scroll::registry::SectionId;

#[function_component(Services)]
pub fn services() -> Html {
    let language = use_language();

    html! {
        <section id={SectionId::Services.as_str()} class="page-section services-section">
            <style>
                {r#"
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                        gap: 2rem;
                    }
                    .service-card {
                        padding: 2rem;
                        border-radius: 1.5rem;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        transition: transform 0.3s ease, border-color 0.3s ease;
                    }
                    .service-card:hover {
                        transform: translateY(-8px);
                        border-color: rgba(6, 182, 212, 0.4);
                    }
                    .service-icon {
                        font-size: 2.25rem;
                        margin-bottom: 1rem;
                    }
                    .service-card h3 {
                        color: #fff;
                        margin: 0 0 0.75rem;
                    }
                    .service-card p {
                        color: #9ca3af;
                        line-height: 1.6;
                    }
                "#}
            </style>
            <div class="section-inner">
                <div class="section-header">
                    <h2>{ language.t("services.title") }</h2>
                    <p>{ language.t("services.subtitle") }</p>
                </div>
                <div class="services-grid">
                    { for SERVICES.iter().map(|service| html! {
                        <div class="service-card" key={service.key}>
                            <div class="service-icon">{ service.icon }</div>
                            <h3>{ language.t(&service.title_key()).to_string() }</h3>
                            <p>{ language.t(&service.description_key()).to_string() }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
