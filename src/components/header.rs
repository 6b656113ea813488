use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::components::flag_icon::FlagIcon;
use crate::context::{use_app, AppAction, Language, Theme};

struct HeaderContent {
    nav_items: [(&'static str, &'static str); 5],
    theme: &'static str,
    language: &'static str,
}

fn header_content(language: Language) -> HeaderContent {
    match language {
        Language::Pt => HeaderContent {
            nav_items: [
                ("O Problema", "#problema"),
                ("Sobre Nós", "#sobre"),
                ("A Solução", "#solucao"),
                ("A Nossa Equipa", "#time"),
                ("Contacto", "#contato"),
            ],
            theme: "Alternar tema",
            language: "Mudar para Inglês",
        },
        Language::En => HeaderContent {
            nav_items: [
                ("The Problem", "#problema"),
                ("About Us", "#sobre"),
                ("The Solution", "#solucao"),
                ("Our Team", "#time"),
                ("Contact", "#contato"),
            ],
            theme: "Toggle theme",
            language: "Switch to Portuguese",
        },
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let app = use_app();
    let mobile_open = use_state(|| false);
    let scrolled = use_state_eq(|| false);

    // Detect scroll for the header background
    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = window_clone.scroll_y().unwrap_or(0.0);
                    scrolled.set(scroll_top > 20.0);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let content = header_content(app.language);

    let toggle_language = {
        let app = app.clone();
        Callback::from(move |_e: MouseEvent| {
            app.dispatch(AppAction::ToggleLanguage);
        })
    };

    let toggle_theme = {
        let app = app.clone();
        Callback::from(move |_e: MouseEvent| {
            app.dispatch(AppAction::ToggleTheme);
        })
    };

    let toggle_mobile = {
        let mobile_open = mobile_open.clone();
        Callback::from(move |_e: MouseEvent| {
            mobile_open.set(!*mobile_open);
        })
    };

    let close_mobile = {
        let mobile_open = mobile_open.clone();
        Callback::from(move |_e: MouseEvent| {
            mobile_open.set(false);
        })
    };

    html! {
        <header class={classes!("site-header", (*scrolled).then(|| "scrolled"))}>
            <div class="header-background"></div>
            <div class="header-container">
                <a href="#hero" class="logo-link">
                    <div class="logo-container">
                        <img
                            src="/assets/logo.webp"
                            alt="AgroFlow"
                            width="48"
                            height="48"
                            class="logo-image"
                        />
                        <div class="logo-text">
                            <span class="logo-main">{"AgroFlow"}</span>
                            <span class="logo-sub">{"Smart Irrigation"}</span>
                        </div>
                    </div>
                </a>

                <nav class="desktop-nav">
                    {
                        content.nav_items.iter().map(|(label, href)| {
                            html! {
                                <a key={*href} href={*href} class="nav-link">{*label}</a>
                            }
                        }).collect::<Html>()
                    }
                </nav>

                <div class="header-actions">
                    <button
                        onclick={toggle_language}
                        class="lang-button"
                        aria-label={content.language}
                    >
                        <FlagIcon language={app.language} size={16} />
                        <span class="lang-text">
                            {
                                match app.language {
                                    Language::Pt => "PT",
                                    Language::En => "EN",
                                }
                            }
                        </span>
                    </button>

                    <button
                        onclick={toggle_theme}
                        class="theme-button"
                        aria-label={content.theme}
                    >
                        {
                            match app.theme {
                                Theme::Dark => html! { <span class="theme-icon">{"☀️"}</span> },
                                Theme::Light => html! { <span class="theme-icon">{"🌙"}</span> },
                            }
                        }
                    </button>

                    <button onclick={toggle_mobile} class="mobile-button" aria-label="Menu">
                        <span class="mobile-icon">
                            { if *mobile_open { "✕" } else { "☰" } }
                        </span>
                    </button>
                </div>

                {
                    if *mobile_open {
                        html! {
                            <div class="mobile-menu">
                                {
                                    content.nav_items.iter().map(|(label, href)| {
                                        html! {
                                            <a
                                                key={*href}
                                                href={*href}
                                                class="mobile-link"
                                                onclick={close_mobile.clone()}
                                            >
                                                {*label}
                                            </a>
                                        }
                                    }).collect::<Html>()
                                }
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </header>
    }
}
