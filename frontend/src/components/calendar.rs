use std::rc::Rc;

use signup_shared::{messages, CalendarError, CalendarView, LoadGeneration, SignupConfig};
use web_sys::Element;
use yew::prelude::*;

use crate::components::month_table::MonthTable;
use crate::components::placeholder::Placeholder;
use crate::services::api::ApiService;
use crate::services::oauth_popup::start_booking;

/// Bumped to re-run the fetch after a login popup closes.
#[derive(Default, PartialEq)]
struct Reload(u32);

impl Reducible for Reload {
    type Action = ();

    fn reduce(self: Rc<Self>, _: ()) -> Rc<Self> {
        Rc::new(Reload(self.0.wrapping_add(1)))
    }
}

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
    pub config: Rc<SignupConfig>,
}

#[function_component(CalendarRoot)]
pub fn calendar_root(props: &CalendarProps) -> Html {
    let view = use_state(|| Rc::new(CalendarView::loading()));
    let reload = use_reducer(Reload::default);
    let generation = use_mut_ref(LoadGeneration::default);

    // Fetch + render; a load that resolves after a newer one started is dropped.
    {
        let view = view.clone();
        let generation = generation.clone();
        let config = props.config.clone();

        use_effect_with(reload.0, move |_| {
            let current = generation.borrow_mut().begin();
            view.set(Rc::new(CalendarView::loading()));

            wasm_bindgen_futures::spawn_local(async move {
                let result = ApiService::fetch_availability(&config.slots_endpoint).await;

                if !generation.borrow().is_current(current) {
                    tracing::debug!(generation = current, "Discarding stale availability load");
                    return;
                }

                view.set(Rc::new(CalendarView::from_load(result)));
            });
            || ()
        });
    }

    // One handler for the whole container; add buttons are found by walking
    // up from the click target.
    let onclick = {
        let config = props.config.clone();
        let reload = reload.dispatcher();

        Callback::from(move |event: MouseEvent| {
            let Some(iso_date) = event
                .target_dyn_into::<Element>()
                .and_then(|target| add_button_date(&target))
            else {
                return;
            };

            let reload = reload.clone();
            match start_booking(&config, &iso_date, move || reload.dispatch(())) {
                Ok(()) => {}
                Err(CalendarError::PopupBlocked) => {
                    tracing::warn!(date = %iso_date, "Login popup blocked");
                    gloo::dialogs::alert(messages::POPUP_BLOCKED);
                }
                Err(e) => tracing::error!("Could not start booking: {}", e),
            }
        })
    };

    let body = match &**view {
        CalendarView::Message(message) => html! { <Placeholder message={*message} /> },
        CalendarView::Months(months) => html! {
            { for months.iter().map(|grid| html! {
                <MonthTable key={grid.key.clone()} grid={grid.clone()} />
            })}
        },
    };

    html! {
        <div class="calendar" {onclick}>
            { body }
        </div>
    }
}

/// Date carried by the `.add-btn` at or above `target`, if any.
pub fn add_button_date(target: &Element) -> Option<String> {
    target
        .closest(".add-btn")
        .ok()
        .flatten()?
        .get_attribute("data-date")
}
