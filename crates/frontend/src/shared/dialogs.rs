//! Blocking browser dialogs.
//!
//! Both helpers are no-ops outside a browser window; `confirm` then
//! answers "no", which is the safe default for destructive actions.

pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

pub fn confirm(message: &str) -> bool {
    if let Some(win) = web_sys::window() {
        win.confirm_with_message(message).unwrap_or(false)
    } else {
        false
    }
}
