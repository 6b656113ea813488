use yew::prelude::*;
use crate::context::{use_app, Language};

struct TeamMember {
    name: &'static str,
    role: &'static str,
    image: &'static str,
    linkedin: &'static str,
}

struct TeamContent {
    title: &'static str,
    subtitle: &'static str,
    description: &'static str,
    members: [TeamMember; 4],
}

fn team_content(language: Language) -> TeamContent {
    let (leonardo_role, julio_role, daniel_role, henrique_role) = match language {
        Language::Pt => (
            "Programação Industrial & Python",
            "Desenvolvimento de Software",
            "BI & Analytics",
            "Infraestrutura & Hardware",
        ),
        Language::En => (
            "Industrial Programming & Python",
            "Software Development",
            "BI & Analytics",
            "Infrastructure & Hardware",
        ),
    };

    let (title, subtitle, description) = match language {
        Language::Pt => (
            "A Nossa Equipa",
            "Especialistas em tecnologia para uma agricultura sustentável",
            "Equipa multidisciplinar especializada em programação industrial, \
             desenvolvimento web, análise de dados e infraestrutura para soluções \
             completas de agricultura inteligente.",
        ),
        Language::En => (
            "Our Team",
            "Technology experts for sustainable agriculture",
            "Multidisciplinary team specialized in industrial programming, web \
             development, data analysis and infrastructure for complete smart \
             agriculture solutions.",
        ),
    };

    TeamContent {
        title,
        subtitle,
        description,
        members: [
            TeamMember {
                name: "Leonardo Antunes",
                role: leonardo_role,
                image: "/assets/team/leonardo.jpg",
                linkedin: "https://linkedin.com/in/leonardo-antunes",
            },
            TeamMember {
                name: "Júlio César",
                role: julio_role,
                image: "/assets/team/julio.jpg",
                linkedin: "https://www.linkedin.com/in/j%C3%BAlio-c%C3%A9sar-70a533262/",
            },
            TeamMember {
                name: "Daniel Pires",
                role: daniel_role,
                image: "/assets/team/daniel.jpg",
                linkedin: "https://www.linkedin.com/in/daniel-pires-b6b03a258",
            },
            TeamMember {
                name: "Henrique Ernesto",
                role: henrique_role,
                image: "/assets/team/henrique.jpg",
                linkedin: "https://linkedin.com/in/henrique-ernesto",
            },
        ],
    }
}

#[function_component(Team)]
pub fn team() -> Html {
    let app = use_app();
    let content = team_content(app.language);

    html! {
        <section id="time" class="team section">
            <div class="background-gradient"></div>
            <div class="background-pattern"></div>
            <div class="section-container">
                <div class="section-header">
                    <h1 class="section-title">{content.title}</h1>
                    <p class="section-subtitle">{content.subtitle}</p>
                </div>

                <div class="team-grid">
                    {
                        content.members.iter().map(|member| {
                            let linkedin = member.linkedin;
                            let open_linkedin = Callback::from(move |_e: MouseEvent| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.open_with_url_and_target_and_features(
                                        linkedin,
                                        "_blank",
                                        "noopener,noreferrer",
                                    );
                                }
                            });

                            html! {
                                <div key={member.name} class="team-member">
                                    <div class="avatar-wrapper">
                                        <img
                                            src={member.image}
                                            alt={member.name}
                                            width="180"
                                            height="180"
                                            class="member-avatar"
                                        />
                                        <div class="linkedin-overlay" onclick={open_linkedin}>
                                            <button class="linkedin-button" aria-label="LinkedIn">
                                                <svg width="24" height="24" viewBox="0 0 24 24" fill="currentColor">
                                                    <path d="M19 0h-14c-2.761 0-5 2.239-5 5v14c0 2.761 2.239 5 5 5h14c2.762 0 5-2.239 5-5v-14c0-2.761-2.238-5-5-5zm-11 19h-3v-11h3v11zm-1.5-12.268c-.966 0-1.75-.79-1.75-1.764s.784-1.764 1.75-1.764 1.75.79 1.75 1.764-.783 1.764-1.75 1.764zm13.5 12.268h-3v-5.604c0-3.368-4-3.113-4 0v5.604h-3v-11h3v1.765c1.396-2.586 7-2.777 7 2.476v6.759z" />
                                                </svg>
                                            </button>
                                        </div>
                                    </div>
                                    <h3 class="member-name">{member.name}</h3>
                                    <p class="member-role">{member.role}</p>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>

                <p class="team-description">{content.description}</p>
            </div>
        </section>
    }
}
