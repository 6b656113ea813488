use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior,
    ScrollIntoViewOptions,
};
use gloo_timers::callback::Timeout;

pub const DEFAULT_AUTO_HIDE_MS: u32 = 2500;

// Finer-grained visibility callbacks, the selection rule itself only
// compares ratios
const INTERSECTION_THRESHOLDS: [f64; 3] = [0.35, 0.5, 0.75];

/// One entry of an observation batch, detached from the observer API so the
/// selection rule stays a plain function.
pub struct SectionVisibility {
    pub id: String,
    pub ratio: f64,
    pub intersecting: bool,
}

/// Picks the section with the strictly highest intersection ratio among the
/// entries currently in the viewport. Exact ties keep the earlier entry.
/// `None` when nothing intersects, so the caller keeps its previous pick.
fn most_visible(batch: &[SectionVisibility]) -> Option<&str> {
    let mut best = None;
    let mut max_ratio = 0.0_f64;

    for observation in batch {
        if observation.intersecting && observation.ratio > max_ratio {
            max_ratio = observation.ratio;
            best = Some(observation.id.as_str());
        }
    }

    best
}

/// The section that follows `current` in the given order. An unset `current`
/// counts as the first section; the last section and unknown ids have no
/// successor.
fn next_section(sections: &[String], current: Option<&str>) -> Option<String> {
    let current = current.or_else(|| sections.first().map(|s| s.as_str()))?;
    let index = sections.iter().position(|s| s == current)?;
    sections.get(index + 1).cloned()
}

fn scroll_to_section(id: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(element) = document.get_element_by_id(id) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrollIndicatorProps {
    /// Section ids in page order; the order defines what "next" means.
    pub sections: Vec<String>,
    #[prop_or(DEFAULT_AUTO_HIDE_MS)]
    pub auto_hide_delay_ms: u32,
}

#[function_component(ScrollIndicator)]
pub fn scroll_indicator(props: &ScrollIndicatorProps) -> Html {
    let current_section = use_state_eq(|| None::<String>);
    let next_section_id = use_state_eq(|| None::<String>);
    let visible = use_state_eq(|| false);

    // Watch which section is most visible
    {
        let current_section = current_section.clone();
        use_effect_with_deps(
            move |sections: &Vec<String>| {
                let mut observer_handle = None;

                if !sections.is_empty() {
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        let callback = Closure::wrap(Box::new(
                            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                                let batch: Vec<SectionVisibility> = entries
                                    .iter()
                                    .filter_map(|entry| {
                                        entry.dyn_into::<IntersectionObserverEntry>().ok()
                                    })
                                    .map(|entry| SectionVisibility {
                                        id: entry.target().id(),
                                        ratio: entry.intersection_ratio(),
                                        intersecting: entry.is_intersecting(),
                                    })
                                    .collect();

                                // The whole batch is ranked at once; a batch with
                                // nothing intersecting leaves the pick unchanged
                                if let Some(id) = most_visible(&batch) {
                                    current_section.set(Some(id.to_string()));
                                }
                            },
                        )
                            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

                        let options = IntersectionObserverInit::new();
                        let thresholds: js_sys::Array = INTERSECTION_THRESHOLDS
                            .iter()
                            .copied()
                            .map(JsValue::from_f64)
                            .collect();
                        options.set_threshold(&thresholds.into());

                        if let Ok(observer) = IntersectionObserver::new_with_options(
                            callback.as_ref().unchecked_ref(),
                            &options,
                        ) {
                            for id in sections {
                                // Ids without a matching element are skipped
                                if let Some(element) = document.get_element_by_id(id) {
                                    observer.observe(&element);
                                }
                            }
                            observer_handle = Some((observer, callback));
                        }
                    }
                }

                move || {
                    if let Some((observer, callback)) = observer_handle {
                        observer.disconnect();
                        drop(callback);
                    }
                }
            },
            props.sections.clone(),
        );
    }

    // Derive the next section from the current one
    {
        let next_section_id = next_section_id.clone();
        let sections = props.sections.clone();
        use_effect_with_deps(
            move |current: &Option<String>| {
                next_section_id.set(next_section(&sections, current.as_deref()));
                || ()
            },
            (*current_section).clone(),
        );
    }

    // Show the affordance on every change of the next section, hide it again
    // after the delay. Dropping the previous Timeout cancels it, so timers
    // never stack and the window restarts from zero on each change.
    {
        let visible = visible.clone();
        let auto_hide_delay_ms = props.auto_hide_delay_ms;
        use_effect_with_deps(
            move |next: &Option<String>| {
                let pending = if next.is_some() {
                    visible.set(true);
                    let visible = visible.clone();
                    Some(Timeout::new(auto_hide_delay_ms, move || {
                        visible.set(false);
                    }))
                } else {
                    visible.set(false);
                    None
                };

                move || drop(pending)
            },
            (*next_section_id).clone(),
        );
    }

    let onclick = {
        let next_section_id = next_section_id.clone();
        Callback::from(move |_e: MouseEvent| {
            if let Some(id) = (*next_section_id).as_deref() {
                scroll_to_section(id);
            }
        })
    };

    if props.sections.is_empty() {
        return html! {};
    }

    html! {
        {
            if *visible && (*next_section_id).is_some() {
                html! {
                    <div class="scroll-indicator">
                        <button
                            {onclick}
                            class="scroll-indicator-button"
                            aria-label="Scroll to next section"
                        >
                            <svg width="24" height="24" viewBox="0 0 24 24" fill="none">
                                <path
                                    d="M12 5V19M12 19L19 12M12 19L5 12"
                                    stroke="currentColor"
                                    stroke-width="2"
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                />
                            </svg>
                        </button>
                    </div>
                }
            } else {
                html! {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observation(id: &str, ratio: f64, intersecting: bool) -> SectionVisibility {
        SectionVisibility {
            id: id.to_string(),
            ratio,
            intersecting,
        }
    }

    fn sections() -> Vec<String> {
        ["hero", "problema", "sobre", "solucao", "time", "contato"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn picks_the_highest_ratio_among_intersecting_entries() {
        let batch = vec![
            observation("hero", 0.6, true),
            observation("problema", 0.4, true),
        ];
        assert_eq!(most_visible(&batch), Some("hero"));
    }

    #[test]
    fn entries_outside_the_viewport_never_win() {
        let batch = vec![
            observation("hero", 0.9, false),
            observation("problema", 0.4, true),
        ];
        assert_eq!(most_visible(&batch), Some("problema"));
    }

    #[test]
    fn empty_and_non_intersecting_batches_select_nothing() {
        assert_eq!(most_visible(&[]), None);

        let batch = vec![
            observation("hero", 0.0, false),
            observation("problema", 0.0, false),
        ];
        assert_eq!(most_visible(&batch), None);
    }

    #[test]
    fn exact_ties_keep_the_first_entry() {
        let batch = vec![
            observation("sobre", 0.5, true),
            observation("solucao", 0.5, true),
        ];
        assert_eq!(most_visible(&batch), Some("sobre"));
    }

    #[test]
    fn an_intersecting_entry_with_zero_ratio_is_ignored() {
        let batch = vec![observation("hero", 0.0, true)];
        assert_eq!(most_visible(&batch), None);
    }

    #[test]
    fn next_follows_the_registry_order() {
        assert_eq!(
            next_section(&sections(), Some("problema")),
            Some("sobre".to_string())
        );
    }

    #[test]
    fn unset_current_counts_as_the_first_section() {
        assert_eq!(
            next_section(&sections(), None),
            Some("problema".to_string())
        );
    }

    #[test]
    fn the_last_section_has_no_next() {
        assert_eq!(next_section(&sections(), Some("contato")), None);
    }

    #[test]
    fn unknown_ids_have_no_next() {
        assert_eq!(next_section(&sections(), Some("rodape")), None);
    }

    #[test]
    fn a_single_section_page_has_no_next() {
        let only = vec!["hero".to_string()];
        assert_eq!(next_section(&only, None), None);
        assert_eq!(next_section(&only, Some("hero")), None);
    }

    #[test]
    fn empty_registries_derive_nothing() {
        assert_eq!(next_section(&[], None), None);
    }
}
