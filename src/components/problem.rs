use yew::prelude::*;
use crate::context::{use_app, Language};

struct ProblemContent {
    title: &'static str,
    subtitle: &'static str,
    cards: [(&'static str, &'static str, &'static str); 4],
    closing: &'static str,
}

fn problem_content(language: Language) -> ProblemContent {
    match language {
        Language::Pt => ProblemContent {
            title: "O Problema",
            subtitle: "A rega tradicional desperdiça o recurso mais valioso do campo",
            cards: [
                (
                    "💧",
                    "Água desperdiçada",
                    "Até 60% da água usada na rega tradicional perde-se por evaporação, \
                     escorrência ou rega fora de horas.",
                ),
                (
                    "🕐",
                    "Trabalho manual constante",
                    "Abrir e fechar válvulas à mão obriga a deslocações diárias e a \
                     decisões tomadas sem dados.",
                ),
                (
                    "🌦️",
                    "Clima imprevisível",
                    "Regar antes de uma chuvada ou falhar uma onda de calor custa \
                     produção e dinheiro.",
                ),
                (
                    "📈",
                    "Custos a subir",
                    "Água e energia cada vez mais caras apertam as margens dos pequenos \
                     e médios agricultores.",
                ),
            ],
            closing: "Pequenas e médias explorações não têm acesso a sistemas de rega \
                inteligente a preços acessíveis — até agora.",
        },
        Language::En => ProblemContent {
            title: "The Problem",
            subtitle: "Traditional irrigation wastes the field's most valuable resource",
            cards: [
                (
                    "💧",
                    "Wasted water",
                    "Up to 60% of the water used in traditional irrigation is lost to \
                     evaporation, runoff or watering at the wrong time.",
                ),
                (
                    "🕐",
                    "Constant manual work",
                    "Opening and closing valves by hand means daily trips to the field \
                     and decisions made without data.",
                ),
                (
                    "🌦️",
                    "Unpredictable weather",
                    "Irrigating right before rainfall or missing a heat wave costs \
                     yield and money.",
                ),
                (
                    "📈",
                    "Rising costs",
                    "Increasingly expensive water and energy squeeze the margins of \
                     small and medium farmers.",
                ),
            ],
            closing: "Small and medium farms have had no access to affordable smart \
                irrigation — until now.",
        },
    }
}

#[function_component(Problem)]
pub fn problem() -> Html {
    let app = use_app();
    let content = problem_content(app.language);

    html! {
        <section id="problema" class="problem section">
            <div class="background-gradient"></div>
            <div class="section-container">
                <div class="section-header">
                    <h1 class="section-title">{content.title}</h1>
                    <p class="section-subtitle">{content.subtitle}</p>
                </div>

                <div class="problem-grid">
                    {
                        content.cards.iter().map(|(icon, title, text)| {
                            html! {
                                <div key={*title} class="problem-card">
                                    <div class="problem-icon">{*icon}</div>
                                    <h3 class="problem-card-title">{*title}</h3>
                                    <p class="problem-card-text">{*text}</p>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>

                <p class="problem-closing">{content.closing}</p>
            </div>
        </section>
    }
}
