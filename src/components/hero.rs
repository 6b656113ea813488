use yew::prelude::*;
use crate::context::{use_app, Language};

struct HeroContent {
    badge: &'static str,
    title: &'static str,
    subtitle: &'static str,
    primary_cta: &'static str,
    secondary_cta: &'static str,
    scroll_hint: &'static str,
}

fn hero_content(language: Language) -> HeroContent {
    match language {
        Language::Pt => HeroContent {
            badge: "Rega inteligente para a agricultura",
            title: "Regue com Precisão, Poupe com Inteligência",
            subtitle: "O AgroFlow liga sensores de solo, previsão meteorológica e \
                controlo remoto num único sistema que rega apenas quando a sua \
                plantação precisa.",
            primary_cta: "Conhecer a Solução",
            secondary_cta: "Pedir Demonstração",
            scroll_hint: "Descubra mais",
        },
        Language::En => HeroContent {
            badge: "Smart irrigation for agriculture",
            title: "Irrigate with Precision, Save with Intelligence",
            subtitle: "AgroFlow connects soil sensors, weather forecasting and \
                remote control in a single system that irrigates only when your \
                plantation needs it.",
            primary_cta: "See the Solution",
            secondary_cta: "Request a Demo",
            scroll_hint: "Find out more",
        },
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let app = use_app();
    let content = hero_content(app.language);

    html! {
        <section id="hero" class="hero">
            <div class="hero-background"></div>
            <div class="hero-container">
                <span class="hero-badge">{content.badge}</span>
                <h1 class="hero-title">{content.title}</h1>
                <p class="hero-subtitle">{content.subtitle}</p>
                <div class="hero-cta-group">
                    <a href="#solucao" class="hero-cta primary">{content.primary_cta}</a>
                    <a href="#contato" class="hero-cta secondary">{content.secondary_cta}</a>
                </div>
                <div class="hero-scroll-hint">
                    <span>{content.scroll_hint}</span>
                </div>
            </div>
        </section>
    }
}
