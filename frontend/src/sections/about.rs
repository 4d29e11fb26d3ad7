use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{ABOUT_ITEMS, ABOUT_PARAGRAPHS};

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="page-section">
            <style>
                {r#"
                    .about-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 2rem;
                    }
                    .about-text p {
                        color: #d1d5db;
                        margin-bottom: 1rem;
                        line-height: 1.75;
                    }
                    .about-cards {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 1rem;
                    }
                    .about-card h3 {
                        font-size: 1.125rem;
                        font-weight: 600;
                        margin-bottom: 0.5rem;
                    }
                    .about-card p {
                        color: #9ca3af;
                        font-size: 0.875rem;
                    }
                    @media (max-width: 768px) {
                        .about-grid, .about-cards {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="section-container">
                <Reveal>
                    <h2 class="section-title">{"About Me"}</h2>
                </Reveal>
                <Reveal class={classes!("about-grid")}>
                    <div class="about-text">
                        { for ABOUT_PARAGRAPHS.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                    </div>
                    <div class="about-cards">
                        { for ABOUT_ITEMS.iter().map(|item| html! {
                            <div class="cyberpunk-card about-card">
                                <h3>{item.title}</h3>
                                <p>{item.description}</p>
                            </div>
                        }) }
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
