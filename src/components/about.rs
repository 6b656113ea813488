use yew::prelude::*;
use crate::context::{use_app, Language};

struct AboutContent {
    title: &'static str,
    subtitle: &'static str,
    description: &'static str,
    highlights: [(&'static str, &'static str, &'static str); 3],
}

fn about_content(language: Language) -> AboutContent {
    match language {
        Language::Pt => AboutContent {
            title: "Sobre Nós",
            subtitle: "Tecnologia portuguesa ao serviço da água e da sustentabilidade",
            description: "O AgroFlow nasceu no Porto da vontade de aproximar a \
                agricultura familiar da tecnologia usada nas grandes explorações. \
                Desenvolvemos hardware e software próprios para que qualquer \
                agricultor possa regar com precisão, sem substituir o equipamento \
                que já tem.",
            highlights: [
                (
                    "🎯",
                    "Missão",
                    "Tornar a rega de precisão acessível a pequenas e médias explorações.",
                ),
                (
                    "🌱",
                    "Visão",
                    "Uma agricultura que produz mais com menos água.",
                ),
                (
                    "🤝",
                    "Compromisso",
                    "Equipamento aberto, instalação simples e suporte próximo do agricultor.",
                ),
            ],
        },
        Language::En => AboutContent {
            title: "About Us",
            subtitle: "Portuguese technology at the service of water and sustainability",
            description: "AgroFlow was born in Porto from the will to bring family \
                farming closer to the technology used on large farms. We build our \
                own hardware and software so that any farmer can irrigate with \
                precision without replacing the equipment they already own.",
            highlights: [
                (
                    "🎯",
                    "Mission",
                    "Make precision irrigation affordable for small and medium farms.",
                ),
                (
                    "🌱",
                    "Vision",
                    "Agriculture that produces more with less water.",
                ),
                (
                    "🤝",
                    "Commitment",
                    "Open equipment, simple installation and support close to the farmer.",
                ),
            ],
        },
    }
}

#[function_component(About)]
pub fn about() -> Html {
    let app = use_app();
    let content = about_content(app.language);

    html! {
        <section id="sobre" class="about section">
            <div class="background-gradient"></div>
            <div class="background-pattern"></div>
            <div class="section-container">
                <div class="section-header">
                    <h1 class="section-title">{content.title}</h1>
                    <p class="section-subtitle">{content.subtitle}</p>
                </div>

                <p class="about-description">{content.description}</p>

                <div class="about-grid">
                    {
                        content.highlights.iter().map(|(icon, title, text)| {
                            html! {
                                <div key={*title} class="about-card">
                                    <div class="about-icon">{*icon}</div>
                                    <h3 class="about-card-title">{*title}</h3>
                                    <p class="about-card-text">{*text}</p>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
