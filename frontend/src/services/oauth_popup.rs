//! Login popup for booking a slot.
//!
//! The provider window gives no completion signal we can listen to, so the
//! popup is polled until it closes, either by the user or by the callback
//! page closing itself once the booking is stored.

use std::time::Duration;

use gloo::timers::future::sleep;
use signup_shared::{authorization_url, CalendarError, CalendarResult, SignupConfig};
use web_sys::Window;

/// Open the Google login popup for `iso_date` and call `on_closed` once it
/// is gone.
///
/// Fails with [`CalendarError::PopupBlocked`] when the browser refuses to
/// open the window; nothing is polled in that case.
pub fn start_booking<F>(
    config: &SignupConfig,
    iso_date: &str,
    on_closed: F,
) -> CalendarResult<()>
where
    F: FnOnce() + 'static,
{
    let url = authorization_url(config, iso_date);

    let popup = gloo::utils::window()
        .open_with_url_and_target_and_features(&url, &config.popup_name, &config.popup_features)
        .ok()
        .flatten();

    watch_popup(popup, config.poll_interval(), on_closed)?;
    tracing::info!(date = iso_date, "Opened Google login popup");
    Ok(())
}

/// Poll `popup` every `interval` until it closes, then call `on_closed`.
///
/// `None` is a blocked popup: returns the error without polling.
pub(crate) fn watch_popup<F>(
    popup: Option<Window>,
    interval: Duration,
    on_closed: F,
) -> CalendarResult<()>
where
    F: FnOnce() + 'static,
{
    let popup = popup.ok_or(CalendarError::PopupBlocked)?;

    wasm_bindgen_futures::spawn_local(async move {
        wait_until_closed(&popup, interval).await;
        tracing::info!("Login popup closed");
        on_closed();
    });

    Ok(())
}

/// No timeout: a popup left open keeps being polled.
async fn wait_until_closed(popup: &Window, interval: Duration) {
    loop {
        sleep(interval).await;
        if popup.closed().unwrap_or(true) {
            return;
        }
    }
}
