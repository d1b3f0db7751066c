use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod data;
mod i18n;
mod scroll {
    pub mod geometry;
    pub mod registry;
    pub mod tracker;
    pub mod pipeline;
    pub mod store;
    pub mod hooks;
    pub mod driver;
}
mod contact {
    pub mod form;
    pub mod submit;
}
mod components {
    pub mod header;
    pub mod hero;
    pub mod services;
    pub mod projects;
    pub mod contact;
    pub mod indicator;
    pub mod scroll_top;
    pub mod floating;
    pub mod footer;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use i18n::LanguageProvider;
use pages::{home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <LanguageProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </LanguageProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { Level::Debug } else { Level::Info };
    if let Err(e) = console_log::init_with_level(level) {
        gloo_console::error!("error initializing log:", e.to_string());
    }

    info!("Starting portfolio");
    yew::Renderer::<App>::new().render();
}
