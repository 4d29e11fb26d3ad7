use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::content::{FOOTER_TAGLINE, OWNER_NAME, SOCIAL_LINKS};

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = use_memo(|_| Local::now().year(), ());

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        border-top: 1px solid rgba(88, 28, 135, 0.3);
                        padding: 3rem 0;
                    }
                    .footer-content {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        gap: 2rem;
                    }
                    .footer-brand p, .footer-copyright {
                        color: #9ca3af;
                        font-size: 0.875rem;
                        max-width: 24rem;
                    }
                    .footer-links {
                        display: flex;
                        gap: 1.5rem;
                        margin-bottom: 0.75rem;
                    }
                    .footer-links a {
                        color: #c084fc;
                    }
                    @media (max-width: 768px) {
                        .footer-content {
                            flex-direction: column;
                            text-align: center;
                        }
                    }
                "#}
            </style>
            <div class="section-container footer-content">
                <div class="footer-brand">
                    <a href="#home" class="nav-logo gradient-text">{OWNER_NAME}</a>
                    <p>{FOOTER_TAGLINE}</p>
                </div>
                <div>
                    <div class="footer-links">
                        { for SOCIAL_LINKS.iter().map(|link| html! {
                            <a href={link.url} target="_blank" rel="noopener noreferrer">{link.label}</a>
                        }) }
                    </div>
                    <p class="footer-copyright">
                        {format!("© {} {}. All rights reserved.", *year, OWNER_NAME)}
                    </p>
                </div>
            </div>
        </footer>
    }
}
