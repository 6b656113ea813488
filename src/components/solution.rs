use yew::prelude::*;
use crate::context::{use_app, Language};

struct SolutionCard {
    title: &'static str,
    description: &'static str,
    features: [&'static str; 4],
}

struct SolutionContent {
    title: &'static str,
    subtitle: &'static str,
    portal_title: &'static str,
    portal_subtitle: &'static str,
    portal_description: &'static str,
    portal_features: [&'static str; 6],
    architecture_title: &'static str,
    architecture_description: &'static str,
    cards: [SolutionCard; 4],
    results_title: &'static str,
    results: [&'static str; 4],
}

fn solution_content(language: Language) -> SolutionContent {
    match language {
        Language::Pt => SolutionContent {
            title: "A Nossa Solução",
            subtitle: "Sistema integrado de rega inteligente para pequenos e médios agricultores",
            portal_title: "AgroFlow Portal",
            portal_subtitle: "Controlo total da sua plantação em qualquer lugar",
            portal_description: "Aceda ao portal através de qualquer dispositivo com \
                ligação à Internet para monitorizar e controlar toda a sua operação \
                de rega em tempo real.",
            portal_features: [
                "Estado da plantação e da rega em tempo real",
                "Histórico completo do sistema",
                "Previsão meteorológica integrada",
                "Relatórios de poupança de água",
                "Controlo remoto do sistema",
                "Alertas e notificações inteligentes",
            ],
            architecture_title: "Como Funciona o Sistema",
            architecture_description: "Arquitetura modular que se adapta à sua realidade, \
                sem necessidade de substituir equipamentos existentes.",
            cards: [
                SolutionCard {
                    title: "AgroFlow Solum",
                    description: "Sensor de solo inteligente com elevada eficiência energética",
                    features: [
                        "Instalado diretamente na plantação",
                        "Monitoriza em tempo real o estado do solo",
                        "Até 5 anos sem necessidade de carregamento",
                        "Comunicação wireless de longo alcance",
                    ],
                },
                SolutionCard {
                    title: "AgroFlow Aqua",
                    description: "Controlador de rega compatível",
                    features: [
                        "Controla o acionamento do sistema de rega",
                        "Instalação direta no sistema existente",
                        "Não requer a aquisição de um novo sistema",
                        "Funcionamento autónomo e fiável",
                    ],
                },
                SolutionCard {
                    title: "AgroFlow Caput",
                    description: "Central de comunicação inteligente",
                    features: [
                        "Posicionada num local com acesso à Internet",
                        "Faz a ligação entre os dispositivos do campo e o Portal",
                        "Processamento local de dados",
                        "Comunicação bidirecional",
                    ],
                },
                SolutionCard {
                    title: "AgroFlow Portal",
                    description: "Interface web de gestão completa",
                    features: [
                        "Acesso a partir de qualquer dispositivo com Internet",
                        "Controlo total da operação",
                        "Dados em tempo real e históricos",
                        "Gestão multiplataforma",
                    ],
                },
            ],
            results_title: "Benefícios para o Agricultor",
            results: [
                "Redução de até 50% no consumo de água",
                "Poupança com os equipamentos existentes",
                "Monitorização 24/7 de qualquer local",
                "Retorno do investimento em 6-12 meses",
            ],
        },
        Language::En => SolutionContent {
            title: "Our Solution",
            subtitle: "Integrated smart irrigation system for small and medium farmers",
            portal_title: "AgroFlow Portal",
            portal_subtitle: "Complete control of your plantation anywhere",
            portal_description: "Access the portal through any internet-connected device \
                to monitor and control your entire irrigation operation in real time.",
            portal_features: [
                "Real-time plantation and irrigation status",
                "Complete system history",
                "Integrated weather forecast",
                "Water savings reports",
                "Remote system control",
                "Smart alerts and notifications",
            ],
            architecture_title: "How the System Works",
            architecture_description: "Modular architecture that adapts to your reality, \
                without needing to replace existing equipment.",
            cards: [
                SolutionCard {
                    title: "AgroFlow Solum",
                    description: "Smart soil sensor with high energy efficiency",
                    features: [
                        "Installed directly in the plantation",
                        "Checks soil status in real time",
                        "Up to 5 years without needing charging",
                        "Long-range wireless communication",
                    ],
                },
                SolutionCard {
                    title: "AgroFlow Aqua",
                    description: "Compatible irrigation controller",
                    features: [
                        "Controls irrigation system activation",
                        "Direct installation in existing system",
                        "No need to buy new system",
                        "Autonomous and reliable operation",
                    ],
                },
                SolutionCard {
                    title: "AgroFlow Caput",
                    description: "Smart communication hub",
                    features: [
                        "Positioned in location with internet access",
                        "Connects field devices to the Portal",
                        "Local data processing",
                        "Bidirectional communication",
                    ],
                },
                SolutionCard {
                    title: "AgroFlow Portal",
                    description: "Complete web management interface",
                    features: [
                        "Access from any internet device",
                        "Complete operation control",
                        "Real-time and historical data",
                        "Multi-platform management",
                    ],
                },
            ],
            results_title: "Farmer Benefits",
            results: [
                "Up to 50% reduction in water consumption",
                "Savings with existing equipment",
                "24/7 monitoring from anywhere",
                "Return on investment in 6-12 months",
            ],
        },
    }
}

#[function_component(Solution)]
pub fn solution() -> Html {
    let app = use_app();
    let content = solution_content(app.language);

    html! {
        <section id="solucao" class="solution section">
            <div class="background-gradient"></div>
            <div class="background-pattern"></div>
            <div class="section-container">
                <div class="section-header">
                    <h1 class="section-title">{content.title}</h1>
                    <p class="section-subtitle">{content.subtitle}</p>
                </div>

                <div class="portal-highlight">
                    <div class="portal-text">
                        <h2 class="portal-title">{content.portal_title}</h2>
                        <p class="portal-subtitle">{content.portal_subtitle}</p>
                        <p class="portal-description">{content.portal_description}</p>
                        <ul class="portal-features">
                            {
                                content.portal_features.iter().map(|feature| {
                                    html! { <li key={*feature}>{*feature}</li> }
                                }).collect::<Html>()
                            }
                        </ul>
                    </div>
                    <div class="portal-image">
                        <img
                            src="/assets/portal-dashboard.webp"
                            alt="AgroFlow Portal"
                            loading="lazy"
                        />
                    </div>
                </div>

                <div class="architecture-header">
                    <h2 class="architecture-title">{content.architecture_title}</h2>
                    <p class="architecture-description">{content.architecture_description}</p>
                </div>

                <div class="solution-grid">
                    {
                        content.cards.iter().map(|card| {
                            html! {
                                <div key={card.title} class="solution-card">
                                    <h3 class="solution-card-title">{card.title}</h3>
                                    <p class="solution-card-description">{card.description}</p>
                                    <ul class="solution-card-features">
                                        {
                                            card.features.iter().map(|feature| {
                                                html! { <li key={*feature}>{*feature}</li> }
                                            }).collect::<Html>()
                                        }
                                    </ul>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>

                <div class="solution-results">
                    <h2 class="results-title">{content.results_title}</h2>
                    <ul class="results-list">
                        {
                            content.results.iter().map(|result| {
                                html! { <li key={*result}>{*result}</li> }
                            }).collect::<Html>()
                        }
                    </ul>
                </div>
            </div>
        </section>
    }
}
