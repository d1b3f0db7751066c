use yew::prelude::*;

use crate::config::SCROLL_TOP_VISIBLE_PX;
use crate::i18n::use_language;
use crate::scroll::hooks::use_scrolled_past;
use crate::scroll::registry::SectionId;
use crate::scroll::store::use_section_context;

#[function_component(ScrollTopButton)]
pub fn scroll_top_button() -> Html {
    let visible = use_scrolled_past(SCROLL_TOP_VISIBLE_PX);
    let sections = use_section_context();
    let language = use_language();

    let onclick = {
        let navigate = sections.navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(SectionId::Home))
    };

    if !visible {
        return html! {};
    }

    html! {
        <button class="scroll-top" {onclick} aria-label={language.t("scrollTop")}>
            <style>
                {r#"
                    .scroll-top {
                        position: fixed;
                        bottom: 2rem;
                        right: 2rem;
                        z-index: 50;
                        width: 56px;
                        height: 56px;
                        border: none;
                        border-radius: 50%;
                        background: linear-gradient(to right, #06b6d4, #2563eb);
                        color: #fff;
                        font-size: 1.5rem;
                        cursor: pointer;
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.4);
                        animation: pop-in 0.3s ease-out;
                    }
                    .scroll-top:hover {
                        transform: translateY(-5px) scale(1.1);
                    }
                    @keyframes pop-in {
                        from { transform: scale(0) translateY(100px); opacity: 0; }
                        to { transform: scale(1) translateY(0); opacity: 1; }
                    }
                "#}
            </style>
            {"↑"}
        </button>
    }
}
