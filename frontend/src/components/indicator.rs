use yew::prelude::*;

use crate::i18n::use_language;
use crate::scroll::registry::SectionId;
use crate::scroll::store::use_section_context;

/// Dot per section on the page edge; the current one is highlighted.
#[function_component(SectionIndicator)]
pub fn section_indicator() -> Html {
    let sections = use_section_context();
    let language = use_language();

    html! {
        <nav class="section-indicator">
            <style>
                {r#"
                    .section-indicator {
                        position: fixed;
                        top: 50%;
                        inset-inline-start: 1.5rem;
                        transform: translateY(-50%);
                        z-index: 30;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                    }
                    .indicator-dot {
                        width: 12px;
                        height: 12px;
                        padding: 0;
                        border-radius: 50%;
                        border: 1px solid rgba(255, 255, 255, 0.4);
                        background: transparent;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }
                    .indicator-dot.active {
                        height: 28px;
                        border-radius: 9999px;
                        border-color: #22d3ee;
                        background: linear-gradient(to bottom, #06b6d4, #2563eb);
                    }
                    @media (max-width: 768px) {
                        .section-indicator {
                            display: none;
                        }
                    }
                "#}
            </style>
            { for SectionId::ALL.iter().map(|&section| {
                let active = sections.current == section;
                let onclick = {
                    let navigate = sections.navigate.clone();
                    Callback::from(move |_: MouseEvent| navigate.emit(section))
                };
                html! {
                    <button
                        key={section.as_str()}
                        class={classes!("indicator-dot", active.then(|| "active"))}
                        title={language.t(&section.nav_key()).to_string()}
                        aria-label={language.t(&section.nav_key()).to_string()}
                        {onclick}
                    />
                }
            }) }
        </nav>
    }
}
