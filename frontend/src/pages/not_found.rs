use yew::prelude::*;
use yew_router::prelude::*;

use crate::i18n::use_language;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let language = use_language();

    html! {
        <div class="not-found" dir={language.lang.dir()}>
            <style>
                {r#"
                    .not-found {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1.5rem;
                        background: #000;
                        color: #fff;
                    }
                    .not-found a {
                        color: #22d3ee;
                    }
                "#}
            </style>
            <h1>{"404"}</h1>
            <p>{ language.t("notFound.title") }</p>
            <Link<Route> to={Route::Home}>
                { language.t("notFound.back") }
            </Link<Route>>
        </div>
    }
}
