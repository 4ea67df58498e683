//! User Notifications
//!
//! Synchronous `window.alert` messages.

/// Show a blocking message to the visitor
pub fn notify(message: &str) {
    let Some(window) = web_sys::window() else {
        log::warn!("[DIALOG] No window, dropping message: {}", message);
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        log::warn!("[DIALOG] alert failed: {:?}", e);
    }
}
