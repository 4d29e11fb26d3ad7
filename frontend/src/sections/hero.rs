use yew::prelude::*;

use crate::components::typewriter_text::TypewriterText;
use crate::config;
use crate::content::{HERO_INTRO, OWNER_NAME, PROFILE_IMAGE, RESUME_URL, ROLES};

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id="home" class="hero">
            <style>
                {r#"
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        position: relative;
                        overflow: hidden;
                        padding-top: 4rem;
                    }
                    .hero-glow {
                        position: absolute;
                        border-radius: 50%;
                        filter: blur(64px);
                        pointer-events: none;
                    }
                    .hero-glow.purple {
                        top: 25%;
                        right: 25%;
                        width: 24rem;
                        height: 24rem;
                        background: rgba(126, 34, 206, 0.2);
                        animation: drift 15s ease-in-out infinite;
                    }
                    .hero-glow.fuchsia {
                        bottom: 33%;
                        left: 33%;
                        width: 16rem;
                        height: 16rem;
                        background: rgba(192, 38, 211, 0.2);
                        animation: drift 18s ease-in-out 1s infinite reverse;
                    }
                    @keyframes drift {
                        0%, 100% { transform: translate(0, 0) scale(1); }
                        50% { transform: translate(50px, 30px) scale(1.1); }
                    }
                    .hero-layout {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 3rem;
                        animation: rise 0.5s ease-out both;
                    }
                    @keyframes rise {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .hero-greeting {
                        font-size: 1.75rem;
                        color: #e5e7eb;
                    }
                    .hero-name {
                        font-size: 4.5rem;
                        font-weight: 700;
                        margin: 0.5rem 0 1rem;
                    }
                    .typewriter h3 {
                        font-size: 1.5rem;
                        font-weight: 600;
                        color: #c084fc;
                        min-height: 2.5rem;
                    }
                    .typewriter-cursor {
                        display: inline-block;
                        width: 2px;
                        height: 1.75rem;
                        margin-left: 4px;
                        vertical-align: middle;
                        background: #c084fc;
                        animation: blink 1s step-end infinite;
                    }
                    @keyframes blink {
                        50% { opacity: 0; }
                    }
                    .hero-intro {
                        color: #d1d5db;
                        max-width: 32rem;
                        font-size: 1.125rem;
                        line-height: 1.75;
                        margin: 1.5rem 0 2rem;
                    }
                    .hero-actions {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                    }
                    .hero-portrait {
                        width: 100%;
                        max-width: 28rem;
                        padding: 0.5rem;
                        border-radius: 50%;
                        background: linear-gradient(135deg, #9333ea, #c026d3);
                        box-shadow: 0 20px 40px rgba(88, 28, 135, 0.3);
                        transition: transform 0.3s ease;
                    }
                    .hero-portrait:hover {
                        transform: scale(1.02);
                    }
                    .hero-portrait img {
                        width: 100%;
                        aspect-ratio: 1;
                        object-fit: cover;
                        border-radius: 50%;
                        border: 2px solid rgba(192, 132, 252, 0.5);
                    }
                    @media (max-width: 768px) {
                        .hero-layout {
                            flex-direction: column;
                        }
                        .hero-name {
                            font-size: 3rem;
                        }
                    }
                "#}
            </style>
            <div class="hero-glow purple"></div>
            <div class="hero-glow fuchsia"></div>

            <div class="section-container">
                <div class="hero-layout">
                    <div>
                        <h2 class="hero-greeting">{"Hi, I'm"}</h2>
                        <h1 class="hero-name gradient-text">{OWNER_NAME}</h1>
                        <TypewriterText roles={ROLES} timing={config::typewriter_timing()} />
                        <p class="hero-intro">{HERO_INTRO}</p>
                        <div class="hero-actions">
                            <a href="#contact" class="cyberpunk-button">{"Hire Me"}</a>
                            <a
                                href={RESUME_URL}
                                target="_blank"
                                rel="noopener noreferrer"
                                class="cyberpunk-button outline"
                            >
                                {"Download Resume"}
                            </a>
                        </div>
                    </div>
                    <div class="hero-portrait">
                        <img src={PROFILE_IMAGE} alt={OWNER_NAME} />
                    </div>
                </div>
            </div>
        </section>
    }
}
