use yew::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use chrono::{Datelike, Utc};

use crate::context::{use_app, Language};

struct FooterContent {
    tagline: &'static str,
    links_title: &'static str,
    nav_links: [(&'static str, &'static str); 4],
    contact_title: &'static str,
    email: &'static str,
    location: &'static str,
    rights: &'static str,
    legal: &'static str,
    legal_links: [&'static str; 2],
}

fn footer_content(language: Language) -> FooterContent {
    match language {
        Language::Pt => FooterContent {
            tagline: "Regue com Precisão: Tecnologia ao Serviço da Água e da Sustentabilidade",
            links_title: "Navegação",
            nav_links: [
                ("Sobre Nós", "sobre"),
                ("A Solução", "solucao"),
                ("A Nossa Equipa", "time"),
                ("Contacto", "contato"),
            ],
            contact_title: "Contacto",
            email: "contacto@agroflow.pt",
            location: "Porto, Portugal",
            rights: "Todos os direitos reservados.",
            legal: "Legal",
            legal_links: ["Política de Privacidade", "Termos de Serviço"],
        },
        Language::En => FooterContent {
            tagline: "Irrigate with Precision: Technology at the Service of Water and Sustainability",
            links_title: "Navigation",
            nav_links: [
                ("About Us", "sobre"),
                ("The Solution", "solucao"),
                ("Our Team", "time"),
                ("Contact", "contato"),
            ],
            contact_title: "Contact",
            email: "contact@agroflow.pt",
            location: "Porto, Portugal",
            rights: "All rights reserved.",
            legal: "Legal",
            legal_links: ["Privacy Policy", "Terms of Service"],
        },
    }
}

fn scroll_to_section(id: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(element) = document.get_element_by_id(id) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let app = use_app();
    let content = footer_content(app.language);
    let year = Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="background-gradient"></div>
            <div class="background-pattern"></div>
            <div class="footer-container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <img
                            src="/assets/agroflow-no-bg.webp"
                            alt="AgroFlow"
                            width="150"
                            height="150"
                        />
                        <p class="footer-tagline">{content.tagline}</p>
                    </div>

                    <div class="footer-links">
                        <h3 class="footer-section-title">{content.links_title}</h3>
                        <nav class="footer-links-list">
                            {
                                content.nav_links.iter().map(|(label, id)| {
                                    let id = *id;
                                    let onclick = Callback::from(move |e: MouseEvent| {
                                        e.prevent_default();
                                        scroll_to_section(id);
                                    });
                                    html! {
                                        <a
                                            key={id}
                                            href={format!("#{}", id)}
                                            {onclick}
                                            class="footer-link"
                                        >
                                            {*label}
                                        </a>
                                    }
                                }).collect::<Html>()
                            }
                        </nav>
                    </div>

                    <div class="footer-contact">
                        <h3 class="footer-section-title">{content.contact_title}</h3>
                        <div class="footer-contact-item">
                            <span class="footer-contact-icon">{"✉"}</span>
                            <a href={format!("mailto:{}", content.email)} class="footer-contact-link">
                                {content.email}
                            </a>
                        </div>
                        <div class="footer-contact-item">
                            <span class="footer-contact-icon">{"📍"}</span>
                            <span>{content.location}</span>
                        </div>
                        <div class="footer-social">
                            <button
                                class="social-button"
                                aria-label="LinkedIn"
                                type="button"
                                onclick={Callback::from(move |_e: MouseEvent| {
                                    if let Some(window) = web_sys::window() {
                                        let _ = window.open_with_url_and_target_and_features(
                                            "https://linkedin.com/company/agroflow",
                                            "_blank",
                                            "noopener,noreferrer",
                                        );
                                    }
                                })}
                            >
                                <span class="social-icon">{"in"}</span>
                            </button>
                        </div>
                    </div>

                    <div class="footer-legal">
                        <h3 class="footer-section-title">{content.legal}</h3>
                        <nav class="footer-links-list">
                            {
                                content.legal_links.iter().map(|label| {
                                    html! {
                                        <a key={*label} href="#" class="footer-link">{*label}</a>
                                    }
                                }).collect::<Html>()
                            }
                        </nav>
                    </div>
                </div>

                <div class="footer-divider"></div>

                <div class="footer-bottom">
                    <p class="footer-copyright">
                        { format!("© {} AgroFlow. {}", year, content.rights) }
                    </p>
                </div>
            </div>
        </footer>
    }
}
