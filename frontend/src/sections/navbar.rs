use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::use_window_scroll;

use crate::content::{NAV_ITEMS, OWNER_NAME, SOCIAL_LINKS};

/// Scroll offset after which the bar gets its solid background.
const SCROLLED_THRESHOLD_PX: f64 = 20.0;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > SCROLLED_THRESHOLD_PX;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Links still follow their anchor, only the menu closes.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let social_icons = html! {
        <div class="nav-social">
            { for SOCIAL_LINKS.iter().map(|link| html! {
                <a
                    href={link.url}
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label={link.label}
                    class="nav-social-link"
                >
                    {link.label}
                </a>
            }) }
        </div>
    };

    html! {
        <header class={classes!("top-nav", is_scrolled.then_some("scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        transition: background 0.3s ease, backdrop-filter 0.3s ease;
                        background: transparent;
                    }
                    .top-nav.scrolled {
                        background: rgba(0, 0, 0, 0.8);
                        backdrop-filter: blur(16px);
                    }
                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 1rem 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-size: 1.5rem;
                        font-weight: 700;
                    }
                    .nav-links {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link {
                        color: #d1d5db;
                        transition: color 0.2s ease, text-shadow 0.2s ease;
                    }
                    .nav-link:hover {
                        color: #a855f7;
                        text-shadow: 0 0 8px rgba(168, 85, 247, 0.5);
                    }
                    .nav-social {
                        display: flex;
                        gap: 1rem;
                    }
                    .nav-social-link {
                        color: #c084fc;
                        font-size: 0.85rem;
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        display: block;
                        width: 24px;
                        height: 2px;
                        margin: 5px 0;
                        background: #d1d5db;
                    }
                    .mobile-menu {
                        display: none;
                    }
                    @media (max-width: 768px) {
                        .nav-links {
                            display: none;
                        }
                        .burger-menu {
                            display: block;
                        }
                        .mobile-menu.open {
                            display: block;
                            margin: 0 1.5rem 1rem;
                            background: rgba(0, 0, 0, 0.95);
                            border-radius: 0.5rem;
                            overflow: hidden;
                        }
                        .mobile-menu .nav-link {
                            display: block;
                            padding: 0.75rem 1rem;
                        }
                        .mobile-menu .nav-social {
                            justify-content: center;
                            padding: 1rem 0;
                            border-top: 1px solid rgba(88, 28, 135, 0.3);
                        }
                    }
                "#}
            </style>
            <nav>
                <div class="nav-content">
                    <a href="#home" class="nav-logo gradient-text">{OWNER_NAME}</a>

                    <div class="nav-links">
                        { for NAV_ITEMS.iter().map(|item| html! {
                            <a href={item.href()} class="nav-link">{item.label}</a>
                        }) }
                        {social_icons.clone()}
                    </div>

                    <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>

                <div class={classes!("mobile-menu", (*menu_open).then_some("open"))}>
                    { for NAV_ITEMS.iter().map(|item| html! {
                        <a href={item.href()} class="nav-link" onclick={close_menu.clone()}>
                            {item.label}
                        </a>
                    }) }
                    {social_icons}
                </div>
            </nav>
        </header>
    }
}
