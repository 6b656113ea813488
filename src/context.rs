use std::rc::Rc;
use yew::prelude::*;
use web_sys::window;

pub const THEME_STORAGE_KEY: &str = "agroflow-theme";
pub const LANGUAGE_STORAGE_KEY: &str = "agroflow-language";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Language {
    Pt,
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Pt => "pt",
            Language::En => "en",
        }
    }

    pub fn from_str(value: &str) -> Option<Language> {
        match value {
            "pt" => Some(Language::Pt),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Language {
        match self {
            Language::Pt => Language::En,
            Language::En => Language::Pt,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// UI preferences shared by the whole page. `initialized` stays false until
/// the stored values have been read once; toggles dispatched before that are
/// inert so they cannot clobber a not-yet-loaded preference.
#[derive(Clone, PartialEq)]
pub struct AppState {
    pub language: Language,
    pub theme: Theme,
    pub initialized: bool,
}

impl Default for AppState {
    fn default() -> Self {
        AppState {
            language: Language::Pt,
            theme: Theme::Dark,
            initialized: false,
        }
    }
}

pub enum AppAction {
    /// One-time adoption of the values read from storage. Carries `None`
    /// per key when nothing was stored, in which case the default stands.
    Hydrate {
        theme: Option<Theme>,
        language: Option<Language>,
    },
    ToggleTheme,
    ToggleLanguage,
}

impl Reducible for AppState {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: AppAction) -> Rc<Self> {
        match action {
            AppAction::Hydrate { theme, language } => {
                // A second hydration must not revert toggles made since the first
                if self.initialized {
                    return self;
                }
                Rc::new(AppState {
                    theme: theme.unwrap_or(self.theme),
                    language: language.unwrap_or(self.language),
                    initialized: true,
                })
            }
            AppAction::ToggleTheme => {
                if !self.initialized {
                    return self;
                }
                Rc::new(AppState {
                    theme: self.theme.toggled(),
                    language: self.language,
                    initialized: self.initialized,
                })
            }
            AppAction::ToggleLanguage => {
                if !self.initialized {
                    return self;
                }
                Rc::new(AppState {
                    theme: self.theme,
                    language: self.language.toggled(),
                    initialized: self.initialized,
                })
            }
        }
    }
}

pub type AppContext = UseReducerHandle<AppState>;

// Storage can be disabled or blocked entirely; every access tolerates that
// and the page keeps working with in-memory state only.
fn read_stored(key: &str) -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item(key).ok())
        .flatten()
}

fn write_stored(key: &str, value: &str) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok()).flatten() {
        let _ = storage.set_item(key, value);
    }
}

fn set_root_attribute(name: &str, value: &str) {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute(name, value);
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AppProvider)]
pub fn app_provider(props: &AppProviderProps) -> Html {
    let state = use_reducer(AppState::default);

    // Hydrate once per page load with whatever was persisted
    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let theme = read_stored(THEME_STORAGE_KEY)
                    .and_then(|value| Theme::from_str(&value));
                let language = read_stored(LANGUAGE_STORAGE_KEY)
                    .and_then(|value| Language::from_str(&value));
                state.dispatch(AppAction::Hydrate { theme, language });
                || ()
            },
            (),
        );
    }

    // Reflect the theme onto the document and keep storage in sync. Runs
    // right after hydration too, which writes the defaults back when the
    // store held nothing.
    use_effect_with_deps(
        move |(theme, initialized): &(Theme, bool)| {
            if *initialized {
                set_root_attribute("data-theme", theme.as_str());
                write_stored(THEME_STORAGE_KEY, theme.as_str());
            }
            || ()
        },
        (state.theme, state.initialized),
    );

    // Same contract for the language, on its own key and attribute
    use_effect_with_deps(
        move |(language, initialized): &(Language, bool)| {
            if *initialized {
                set_root_attribute("lang", language.as_str());
                write_stored(LANGUAGE_STORAGE_KEY, language.as_str());
            }
            || ()
        },
        (state.language, state.initialized),
    );

    html! {
        <ContextProvider<AppContext> context={state}>
            { for props.children.iter() }
        </ContextProvider<AppContext>>
    }
}

#[hook]
pub fn use_app() -> AppContext {
    use_context::<AppContext>().expect("use_app must be used within an AppProvider")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: AppState, action: AppAction) -> AppState {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn hydrated() -> AppState {
        reduce(
            AppState::default(),
            AppAction::Hydrate {
                theme: None,
                language: None,
            },
        )
    }

    #[test]
    fn defaults_are_pt_and_dark() {
        let state = AppState::default();
        assert_eq!(state.language, Language::Pt);
        assert_eq!(state.theme, Theme::Dark);
        assert!(!state.initialized);
    }

    #[test]
    fn toggles_are_inert_before_hydration() {
        let state = reduce(AppState::default(), AppAction::ToggleTheme);
        assert_eq!(state.theme, Theme::Dark);
        assert!(!state.initialized);

        let state = reduce(state, AppAction::ToggleLanguage);
        assert_eq!(state.language, Language::Pt);
    }

    #[test]
    fn hydrate_adopts_stored_values() {
        let state = reduce(
            AppState::default(),
            AppAction::Hydrate {
                theme: Some(Theme::Light),
                language: Some(Language::En),
            },
        );
        assert_eq!(state.theme, Theme::Light);
        assert_eq!(state.language, Language::En);
        assert!(state.initialized);
    }

    #[test]
    fn hydrate_falls_back_per_key() {
        // A stored theme must not drag the language away from its default
        let state = reduce(
            AppState::default(),
            AppAction::Hydrate {
                theme: Some(Theme::Light),
                language: None,
            },
        );
        assert_eq!(state.theme, Theme::Light);
        assert_eq!(state.language, Language::Pt);
    }

    #[test]
    fn second_hydrate_does_not_revert_a_toggle() {
        let state = hydrated();
        let state = reduce(state, AppAction::ToggleTheme);
        assert_eq!(state.theme, Theme::Light);

        let state = reduce(
            state,
            AppAction::Hydrate {
                theme: Some(Theme::Dark),
                language: Some(Language::En),
            },
        );
        assert_eq!(state.theme, Theme::Light);
        assert_eq!(state.language, Language::Pt);
    }

    #[test]
    fn toggle_theme_flips_both_ways() {
        let state = reduce(hydrated(), AppAction::ToggleTheme);
        assert_eq!(state.theme, Theme::Light);
        let state = reduce(state, AppAction::ToggleTheme);
        assert_eq!(state.theme, Theme::Dark);
    }

    #[test]
    fn toggle_language_flips_both_ways() {
        let state = reduce(hydrated(), AppAction::ToggleLanguage);
        assert_eq!(state.language, Language::En);
        let state = reduce(state, AppAction::ToggleLanguage);
        assert_eq!(state.language, Language::Pt);
    }

    #[test]
    fn storage_values_round_trip() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_str(theme.as_str()), Some(theme));
        }
        for language in [Language::Pt, Language::En] {
            assert_eq!(Language::from_str(language.as_str()), Some(language));
        }
        assert_eq!(Theme::from_str("solarized"), None);
        assert_eq!(Language::from_str(""), None);
    }
}
