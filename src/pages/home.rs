use yew::prelude::*;

use crate::components::about::About;
use crate::components::contact::Contact;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::problem::Problem;
use crate::components::scroll_indicator::ScrollIndicator;
use crate::components::solution::Solution;
use crate::components::team::Team;

// Page order doubles as the traversal order for the scroll indicator
const SECTIONS: [&str; 6] = ["hero", "problema", "sobre", "solucao", "time", "contato"];

#[function_component(Home)]
pub fn home() -> Html {
    let sections: Vec<String> = SECTIONS.iter().map(|s| s.to_string()).collect();

    html! {
        <>
            <Header />
            <main>
                <Hero />
                <div class="section-divider" aria-hidden="true"></div>

                <Problem />
                <div class="section-divider" aria-hidden="true"></div>

                <About />
                <div class="section-divider" aria-hidden="true"></div>

                <Solution />
                <div class="section-divider" aria-hidden="true"></div>

                <Team />
                <div class="section-divider" aria-hidden="true"></div>

                <Contact />

                <ScrollIndicator {sections} auto_hide_delay_ms={3500} />
            </main>
            <Footer />
        </>
    }
}
