use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::i18n::use_language;

#[function_component(Footer)]
pub fn footer() -> Html {
    let language = use_language();
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        position: relative;
                        z-index: 1;
                        padding: 3rem 1.5rem;
                        background: #000;
                        border-top: 1px solid #1f2937;
                        text-align: center;
                    }
                    .site-footer h3 {
                        color: #fff;
                        font-size: 1.5rem;
                        margin: 0 0 0.5rem;
                    }
                    .footer-role {
                        color: #9ca3af;
                    }
                    .footer-bottom {
                        margin-top: 2rem;
                        padding-top: 2rem;
                        border-top: 1px solid #1f2937;
                        color: #6b7280;
                        font-size: 0.85rem;
                    }
                    .footer-bottom span {
                        color: #22d3ee;
                    }
                "#}
            </style>
            <h3>{ language.t("footer.brand") }</h3>
            <p class="footer-role">{ language.t("footer.role") }</p>
            <div class="footer-bottom">
                { format!("© {} {} {} | ", year, language.t("footer.brand"), language.t("footer.rights")) }
                <span>{ language.t("footer.motto") }</span>
            </div>
        </footer>
    }
}
