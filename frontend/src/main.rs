mod components;
mod services;

use std::rc::Rc;

use signup_shared::SignupConfig;

use crate::components::calendar::{CalendarProps, CalendarRoot};
use crate::components::feedback_banner::FeedbackBanner;

fn main() {
    // Initialize tracing
    tracing_wasm::set_as_global_default();

    let document = gloo::utils::document();

    if let Some(banner_root) = document.get_element_by_id("feedback-banner") {
        yew::Renderer::<FeedbackBanner>::with_root(banner_root).render();
    }

    let Some(calendar_root) = document.get_element_by_id("calendar-root") else {
        tracing::warn!("#calendar-root not found, calendar not mounted");
        return;
    };

    let props = CalendarProps {
        config: Rc::new(SignupConfig::from_env()),
    };
    yew::Renderer::<CalendarRoot>::with_root_and_props(calendar_root, props).render();
}
