//! Blocking Browser Dialogs

/// Show a blocking `alert`
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if window.alert_with_message(message).is_err() {
            log::warn!("alert suppressed: {}", message);
        }
    }
}

/// Show a blocking `confirm`; `false` when dialogs are unavailable
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
