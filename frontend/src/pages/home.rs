use yew::prelude::*;

use crate::components::{
    contact::Contact, floating::FloatingElements, footer::Footer, header::Header, hero::Hero,
    indicator::SectionIndicator, projects::Projects, scroll_top::ScrollTopButton,
    services::Services,
};
use crate::i18n::use_language;
use crate::scroll::driver::ScrollSpyProvider;

#[function_component(Home)]
pub fn home() -> Html {
    let language = use_language();

    html! {
        <ScrollSpyProvider>
            <div class={classes!("app", language.lang.dir())} dir={language.lang.dir()}>
                <style>
                    {r#"
                        body {
                            margin: 0;
                            background: #000;
                            font-family: "Heebo", -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
                        }
                        .app main {
                            position: relative;
                            z-index: 10;
                        }
                        .page-section {
                            position: relative;
                            padding: 6rem 1.5rem;
                            background: linear-gradient(to bottom, #000, #111827, #000);
                            overflow: hidden;
                        }
                        .section-inner {
                            max-width: 1280px;
                            margin: 0 auto;
                        }
                        .section-header {
                            text-align: center;
                            margin-bottom: 4rem;
                        }
                        .section-header h2 {
                            font-size: clamp(2.25rem, 5vw, 3.75rem);
                            color: #fff;
                            margin: 0 0 1.5rem;
                        }
                        .section-header p {
                            font-size: 1.25rem;
                            color: #9ca3af;
                            max-width: 768px;
                            margin: 0 auto;
                        }
                        @media (max-width: 768px) {
                            .page-section {
                                padding-top: 8rem;
                            }
                        }
                    "#}
                </style>
                <FloatingElements />
                <Header />
                <SectionIndicator />
                <main>
                    <Hero />
                    <Services />
                    <Projects />
                    <Contact />
                </main>
                <ScrollTopButton />
                <Footer />
            </div>
        </ScrollSpyProvider>
    }
}
