use signup_shared::Feedback;
use yew::prelude::*;

/// Outcome message left in the query string by the booking callback.
///
/// Read once on mount; renders nothing when neither `error` nor `message`
/// is present.
#[function_component(FeedbackBanner)]
pub fn feedback_banner() -> Html {
    let feedback = use_memo((), |_| {
        let search = gloo::utils::window().location().search().unwrap_or_default();
        Feedback::from_query(&search)
    });

    match &*feedback {
        Some(feedback) => html! {
            <div class={feedback.css_class()} role="status">
                { feedback.message.clone() }
            </div>
        },
        None => html! {},
    }
}
