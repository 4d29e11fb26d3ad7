use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod contact_form;
mod content;
mod relay;
mod typewriter;

mod components {
    pub mod reveal;
    pub mod typewriter_text;
}
mod sections {
    pub mod about;
    pub mod contact;
    pub mod education;
    pub mod footer;
    pub mod hero;
    pub mod navbar;
    pub mod projects;
    pub mod skills;
}

use config::RelayConfig;
use sections::{
    about::About,
    contact::Contact,
    education::Education,
    footer::Footer,
    hero::Hero,
    navbar::Navbar,
    projects::Projects,
    skills::Skills,
};

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
            info!("Rendering portfolio");
            html! { <Portfolio /> }
        }
        Route::NotFound => {
            info!("Rendering not found page");
            html! {
                <section class="page-section not-found">
                    <div class="section-container">
                        <h1 class="section-title">{"404"}</h1>
                        <p>{"Nothing lives here."}</p>
                        <Link<Route> to={Route::Home} classes={classes!("cyberpunk-button")}>
                            {"Back home"}
                        </Link<Route>>
                    </div>
                </section>
            }
        }
    }
}

#[function_component(Portfolio)]
fn portfolio() -> Html {
    let relay_config = use_memo(|_| RelayConfig::from_build_env(), ());

    html! {
        <>
            <Navbar />
            <Hero />
            <About />
            <Skills />
            <Projects />
            <Education />
            <Contact relay_config={(*relay_config).clone()} />
            <Footer />
        </>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <div class="app">
            <style>
                {r#"
                    * {
                        box-sizing: border-box;
                        margin: 0;
                        padding: 0;
                    }
                    html {
                        scroll-behavior: smooth;
                    }
                    body {
                        background: #000;
                        color: #fff;
                        font-family: "Inter", -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
                        overflow-x: hidden;
                    }
                    a {
                        color: inherit;
                        text-decoration: none;
                    }
                    .app {
                        min-height: 100vh;
                        position: relative;
                        animation: fade 0.5s ease-out;
                    }
                    .app::before {
                        content: '';
                        position: fixed;
                        inset: 0;
                        background: linear-gradient(135deg, rgba(88, 28, 135, 0.2), #000);
                        pointer-events: none;
                        z-index: 0;
                    }
                    .app > * {
                        position: relative;
                        z-index: 1;
                    }
                    .app > header {
                        position: fixed;
                        z-index: 50;
                    }
                    @keyframes fade {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                    .section-container {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }
                    .page-section {
                        padding: 6rem 0;
                    }
                    .section-title {
                        font-size: 2.5rem;
                        font-weight: 700;
                        text-align: center;
                        margin-bottom: 3rem;
                        background: linear-gradient(90deg, #c084fc, #e879f9);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .gradient-text {
                        background: linear-gradient(90deg, #a855f7, #d946ef);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .cyberpunk-card {
                        background: rgba(17, 17, 17, 0.8);
                        border: 1px solid rgba(88, 28, 135, 0.4);
                        border-radius: 0.75rem;
                        padding: 1.5rem;
                        backdrop-filter: blur(8px);
                    }
                    .cyberpunk-button {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.75rem 1.5rem;
                        border-radius: 0.375rem;
                        border: 1px solid transparent;
                        background: linear-gradient(90deg, #9333ea, #c026d3);
                        color: #fff;
                        font-weight: 600;
                        cursor: pointer;
                        transition: transform 0.2s ease;
                    }
                    .cyberpunk-button:hover {
                        transform: scale(1.05);
                    }
                    .cyberpunk-button.outline {
                        background: transparent;
                        border-color: #a855f7;
                    }
                    .reveal {
                        opacity: 0;
                        transform: translateY(20px);
                        transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                    }
                    .reveal.visible {
                        opacity: 1;
                        transform: none;
                    }
                    .not-found {
                        min-height: 100vh;
                        text-align: center;
                    }
                    .not-found p {
                        color: #9ca3af;
                        margin-bottom: 2rem;
                    }
                "#}
            </style>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting portfolio");
    yew::Renderer::<App>::new().render();
}
