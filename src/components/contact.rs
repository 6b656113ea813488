use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use gloo_net::http::Request;
use gloo_console::log;
use serde::{Deserialize, Serialize};
use wasm_bindgen_futures::spawn_local;

use crate::config;
use crate::context::{use_app, Language};

#[derive(Serialize)]
struct ContactRequest {
    name: String,
    email: String,
    message: String,
    language: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

struct ContactContent {
    title: &'static str,
    subtitle: &'static str,
    form_title: &'static str,
    form_description: &'static str,
    name_label: &'static str,
    email_label: &'static str,
    message_label: &'static str,
    send_button: &'static str,
    sending: &'static str,
    contact_title: &'static str,
    email: &'static str,
    phone: &'static str,
    phone_title: &'static str,
    hours: &'static str,
    hours_title: &'static str,
    location: &'static str,
    location_title: &'static str,
    success_title: &'static str,
    success_message: &'static str,
    error_title: &'static str,
    error_message: &'static str,
    name_too_short: &'static str,
    invalid_email: &'static str,
    message_too_short: &'static str,
}

fn contact_content(language: Language) -> ContactContent {
    match language {
        Language::Pt => ContactContent {
            title: "Contacte-nos",
            subtitle: "Pronto para implementar rega inteligente?",
            form_title: "Solicitar Demonstração",
            form_description: "Preencha o formulário abaixo e a nossa equipa entrará em \
                contacto para agendar uma demonstração personalizada.",
            name_label: "O Seu Nome",
            email_label: "O Seu Email",
            message_label: "Como podemos ajudar?",
            send_button: "Enviar Mensagem",
            sending: "A Enviar...",
            contact_title: "Informações de Contacto",
            email: "contacto@agroflow.pt",
            phone: "+351 900 000 000",
            phone_title: "Telefone",
            hours: "Segunda a Sexta: 8h às 18h",
            hours_title: "Horário",
            location: "Porto, Portugal",
            location_title: "Localização",
            success_title: "Sucesso!",
            success_message: "Mensagem enviada com sucesso! Em breve, a nossa equipa \
                entrará em contacto.",
            error_title: "Oops!",
            error_message: "Erro ao enviar a mensagem. Por favor, tente novamente.",
            name_too_short: "O nome deve ter pelo menos 2 caracteres",
            invalid_email: "Email inválido",
            message_too_short: "A mensagem deve ter pelo menos 10 caracteres",
        },
        Language::En => ContactContent {
            title: "Contact Us",
            subtitle: "Ready to implement smart irrigation?",
            form_title: "Request a Demo",
            form_description: "Fill out the form below and our team will contact you to \
                schedule a personalized demo.",
            name_label: "Your Name",
            email_label: "Your Email",
            message_label: "How can we assist you?",
            send_button: "Send Message",
            sending: "Sending...",
            contact_title: "Contact Information",
            email: "contact@agroflow.pt",
            phone: "+351 900 000 000",
            phone_title: "Phone",
            hours: "Monday to Friday: 8AM to 6PM",
            hours_title: "Hours",
            location: "Porto, Portugal",
            location_title: "Location",
            success_title: "Success!",
            success_message: "Message sent successfully! Our team will be in touch shortly.",
            error_title: "Oops!",
            error_message: "Error sending message. Please try again.",
            name_too_short: "Name must be at least 2 characters",
            invalid_email: "Invalid email address",
            message_too_short: "Message must be at least 10 characters",
        },
    }
}

// Accepts something@something.tld, no whitespace anywhere
fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && !local.contains(char::is_whitespace)
                && !domain.contains(char::is_whitespace)
                && domain.split('.').count() >= 2
                && domain.split('.').all(|part| !part.is_empty())
        }
        _ => false,
    }
}

#[derive(Clone, PartialEq)]
enum Status {
    Success(String),
    Error(String),
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let app = use_app();
    let content = contact_content(app.language);

    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let name_error = use_state(|| None::<String>);
    let email_error = use_state(|| None::<String>);
    let message_error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let status = use_state(|| None::<Status>);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let name_error = name_error.clone();
        let email_error = email_error.clone();
        let message_error = message_error.clone();
        let loading = loading.clone();
        let status = status.clone();
        let language = app.language;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let content = contact_content(language);

            let name_invalid = (*name).trim().chars().count() < 2;
            let email_invalid = !is_valid_email(&email);
            let message_invalid = (*message).trim().chars().count() < 10;

            name_error.set(name_invalid.then(|| content.name_too_short.to_string()));
            email_error.set(email_invalid.then(|| content.invalid_email.to_string()));
            message_error.set(message_invalid.then(|| content.message_too_short.to_string()));

            if name_invalid || email_invalid || message_invalid {
                return;
            }

            loading.set(true);
            status.set(None);

            let name = name.clone();
            let email = email.clone();
            let message = message.clone();
            let loading = loading.clone();
            let status = status.clone();

            spawn_local(async move {
                let request = ContactRequest {
                    name: (*name).clone(),
                    email: (*email).clone(),
                    message: (*message).clone(),
                    language: language.as_str().to_string(),
                };

                match Request::post(&format!("{}/api/contact", config::get_backend_url()))
                    .json(&request)
                    .expect("Failed to build request")
                    .send()
                    .await
                {
                    Ok(response) => {
                        if response.ok() {
                            status.set(Some(Status::Success(
                                content.success_message.to_string(),
                            )));
                            name.set(String::new());
                            email.set(String::new());
                            message.set(String::new());
                        } else {
                            log!("Contact request failed with status:", response.status());
                            match response.json::<ErrorResponse>().await {
                                Ok(error_response) => {
                                    status.set(Some(Status::Error(error_response.error)));
                                }
                                Err(_) => {
                                    status.set(Some(Status::Error(
                                        content.error_message.to_string(),
                                    )));
                                }
                            }
                        }
                    }
                    Err(e) => {
                        log!("Network request failed:", e.to_string());
                        status.set(Some(Status::Error(content.error_message.to_string())));
                    }
                }

                loading.set(false);
            });
        })
    };

    let close_status = {
        let status = status.clone();
        Callback::from(move |_e: MouseEvent| status.set(None))
    };

    let contact_info = [
        ("✉️", "Email", content.email),
        ("📞", content.phone_title, content.phone),
        ("🕒", content.hours_title, content.hours),
        ("📍", content.location_title, content.location),
    ];

    html! {
        <section id="contato" class="contact section">
            <div class="background-gradient"></div>
            <div class="background-pattern"></div>
            <div class="section-container">
                <div class="section-header">
                    <h1 class="section-title">{content.title}</h1>
                    <p class="section-subtitle">{content.subtitle}</p>
                </div>

                <div class="contact-grid">
                    <div class="contact-info">
                        <h3 class="contact-info-title">{content.contact_title}</h3>
                        <div class="contact-list">
                            {
                                contact_info.iter().map(|(icon, title, value)| {
                                    html! {
                                        <div key={*title} class="contact-card">
                                            <div class="contact-icon">{*icon}</div>
                                            <div class="contact-details">
                                                <h4 class="contact-item-title">{*title}</h4>
                                                <p class="contact-item-value">{*value}</p>
                                            </div>
                                        </div>
                                    }
                                }).collect::<Html>()
                            }
                        </div>
                    </div>

                    <div class="contact-form-section">
                        <h3 class="form-title">{content.form_title}</h3>
                        <p class="form-description">{content.form_description}</p>

                        {
                            match (*status).clone() {
                                Some(Status::Success(text)) => html! {
                                    <div class="alert success">
                                        <span class="alert-icon">{"✓"}</span>
                                        <div>
                                            <strong class="alert-title">{content.success_title}</strong>
                                            <p class="alert-message">{text}</p>
                                        </div>
                                        <button onclick={close_status.clone()} class="alert-close" type="button">
                                            {"×"}
                                        </button>
                                    </div>
                                },
                                Some(Status::Error(text)) => html! {
                                    <div class="alert error">
                                        <span class="alert-icon">{"⚠"}</span>
                                        <div>
                                            <strong class="alert-title">{content.error_title}</strong>
                                            <p class="alert-message">{text}</p>
                                        </div>
                                        <button onclick={close_status.clone()} class="alert-close" type="button">
                                            {"×"}
                                        </button>
                                    </div>
                                },
                                None => html! {},
                            }
                        }

                        <form onsubmit={onsubmit} class="contact-form">
                            <div class="form-group">
                                <label for="name" class="form-label">{content.name_label}</label>
                                <input
                                    type="text"
                                    id="name"
                                    value={(*name).clone()}
                                    onchange={
                                        let name = name.clone();
                                        let name_error = name_error.clone();
                                        move |e: Event| {
                                            let input: HtmlInputElement = e.target_unchecked_into();
                                            name.set(input.value());
                                            name_error.set(None);
                                        }
                                    }
                                    class={classes!("form-input", name_error.is_some().then(|| "invalid"))}
                                    disabled={*loading}
                                    required={true}
                                />
                                {
                                    if let Some(error) = (*name_error).as_ref() {
                                        html! { <span class="form-error">{error.as_str()}</span> }
                                    } else {
                                        html! {}
                                    }
                                }
                            </div>

                            <div class="form-group">
                                <label for="email" class="form-label">{content.email_label}</label>
                                <input
                                    type="email"
                                    id="email"
                                    value={(*email).clone()}
                                    onchange={
                                        let email = email.clone();
                                        let email_error = email_error.clone();
                                        move |e: Event| {
                                            let input: HtmlInputElement = e.target_unchecked_into();
                                            email.set(input.value());
                                            email_error.set(None);
                                        }
                                    }
                                    class={classes!("form-input", email_error.is_some().then(|| "invalid"))}
                                    disabled={*loading}
                                    required={true}
                                />
                                {
                                    if let Some(error) = (*email_error).as_ref() {
                                        html! { <span class="form-error">{error.as_str()}</span> }
                                    } else {
                                        html! {}
                                    }
                                }
                            </div>

                            <div class="form-group full">
                                <label for="message" class="form-label">{content.message_label}</label>
                                <textarea
                                    id="message"
                                    rows="4"
                                    value={(*message).clone()}
                                    onchange={
                                        let message = message.clone();
                                        let message_error = message_error.clone();
                                        move |e: Event| {
                                            let input: HtmlTextAreaElement = e.target_unchecked_into();
                                            message.set(input.value());
                                            message_error.set(None);
                                        }
                                    }
                                    class={classes!("form-textarea", message_error.is_some().then(|| "invalid"))}
                                    disabled={*loading}
                                    required={true}
                                />
                                {
                                    if let Some(error) = (*message_error).as_ref() {
                                        html! { <span class="form-error">{error.as_str()}</span> }
                                    } else {
                                        html! {}
                                    }
                                }
                            </div>

                            <button type="submit" class="submit-button" disabled={*loading}>
                                { if *loading { content.sending } else { content.send_button } }
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::is_valid_email;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("maria@quinta.pt"));
        assert!(is_valid_email("joao.silva@agroflow.example.com"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("maria"));
        assert!(!is_valid_email("maria@"));
        assert!(!is_valid_email("@quinta.pt"));
        assert!(!is_valid_email("maria@quinta"));
        assert!(!is_valid_email("maria@quinta."));
        assert!(!is_valid_email("maria silva@quinta.pt"));
        assert!(!is_valid_email("maria@quinta@pt.pt"));
    }
}
