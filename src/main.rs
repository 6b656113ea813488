use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod context;
mod components {
    pub mod about;
    pub mod contact;
    pub mod flag_icon;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod problem;
    pub mod scroll_indicator;
    pub mod solution;
    pub mod team;
}
mod pages {
    pub mod home;
}

use context::AppProvider;
use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            // Single page site, every path lands on the same content
            html! { <Home /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <AppProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </AppProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
