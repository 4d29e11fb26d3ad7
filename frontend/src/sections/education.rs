use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{CERTIFICATIONS, EDUCATION};

#[function_component(Education)]
pub fn education() -> Html {
    html! {
        <section id="education" class="page-section">
            <style>
                {r#"
                    .education-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 3rem;
                    }
                    .education-column h3 {
                        font-size: 1.5rem;
                        font-weight: 600;
                        color: #c084fc;
                        margin-bottom: 1.5rem;
                    }
                    .timeline {
                        border-left: 2px solid rgba(147, 51, 234, 0.4);
                        padding-left: 1.5rem;
                    }
                    .timeline-item {
                        position: relative;
                        margin-bottom: 2rem;
                    }
                    .timeline-item::before {
                        content: '';
                        position: absolute;
                        left: -1.95rem;
                        top: 0.4rem;
                        width: 0.75rem;
                        height: 0.75rem;
                        border-radius: 50%;
                        background: #a855f7;
                        box-shadow: 0 0 8px rgba(168, 85, 247, 0.6);
                    }
                    .timeline-item h4 {
                        font-size: 1.125rem;
                        font-weight: 600;
                    }
                    .timeline-meta {
                        color: #9ca3af;
                        font-size: 0.875rem;
                        margin: 0.25rem 0 0.5rem;
                    }
                    .timeline-item p {
                        color: #d1d5db;
                        font-size: 0.9rem;
                    }
                    .cert-card {
                        margin-bottom: 1rem;
                    }
                    .cert-card h4 {
                        font-weight: 600;
                    }
                    .cert-card a {
                        color: #c084fc;
                        font-size: 0.875rem;
                    }
                    @media (max-width: 768px) {
                        .education-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="section-container">
                <Reveal>
                    <h2 class="section-title">{"Education & Certifications"}</h2>
                </Reveal>
                <div class="education-grid">
                    <div class="education-column">
                        <h3>{"Education"}</h3>
                        <div class="timeline">
                            { for EDUCATION.iter().map(|entry| html! {
                                <Reveal class={classes!("timeline-item")} threshold={0.2}>
                                    <h4>{entry.degree}</h4>
                                    <div class="timeline-meta">
                                        <div>{entry.institution}{", "}{entry.location}</div>
                                        <div>{entry.period}</div>
                                    </div>
                                    <p>{entry.description}</p>
                                </Reveal>
                            }) }
                        </div>
                    </div>
                    <div class="education-column">
                        <h3>{"Certifications"}</h3>
                        { for CERTIFICATIONS.iter().map(|cert| html! {
                            <Reveal class={classes!("cyberpunk-card", "cert-card")} threshold={0.2}>
                                <h4>{cert.name}</h4>
                                <div class="timeline-meta">{cert.issuer}{" • "}{cert.date}</div>
                                <a href={cert.link} target="_blank" rel="noopener noreferrer">
                                    {"View Certificate"}
                                </a>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
