// Thin wrappers over the browser. Everything here is a side effect.

use web_sys::Window;

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn current_fragment() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

pub fn alert(message: &str) {
    if let Some(w) = window() {
        if w.alert_with_message(message).is_err() {
            log::warn!("alert suppressed: {message}");
        }
    }
}

/// Points the window at `href`. For `mailto:` this opens the mail client.
pub fn navigate(href: &str) {
    let Some(w) = window() else { return };
    if let Err(e) = w.location().set_href(href) {
        log::warn!("navigation to {href} failed: {e:?}");
    }
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
