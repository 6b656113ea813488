use yew::prelude::*;
use crate::context::Language;

#[derive(Properties, PartialEq)]
pub struct FlagIconProps {
    pub language: Language,
    #[prop_or(24)]
    pub size: u32,
}

#[function_component(FlagIcon)]
pub fn flag_icon(props: &FlagIconProps) -> Html {
    let img_error = use_state(|| false);

    let (src, alt, css_class) = match props.language {
        Language::Pt => (
            "/assets/flags/pt-flag.svg",
            "Bandeira de Portugal",
            "flag-portugal",
        ),
        Language::En => (
            "/assets/flags/gb-flag.svg",
            "Flag of United Kingdom",
            "flag-english",
        ),
    };

    // Flags render at a 4:3 box whatever size the caller asks for
    let container_style = format!(
        "width: {}px; height: {}px;",
        props.size,
        props.size * 3 / 4
    );

    // Plain CSS flag when the image cannot be loaded
    if *img_error {
        return html! {
            <div class={classes!("flag-container", css_class)} style={container_style}></div>
        };
    }

    let onerror = {
        let img_error = img_error.clone();
        Callback::from(move |_e: Event| img_error.set(true))
    };

    html! {
        <div class="flag-container" style={container_style}>
            <img src={src} alt={alt} class="flag-image" {onerror} />
        </div>
    }
}
