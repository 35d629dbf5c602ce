use yew::prelude::*;

use crate::config::{BUSINESS_NAME, LOGO_SRC};

/// Side of the square that stands in for the logo when the image fails.
pub const PLACEHOLDER_PX: u32 = 176;

fn placeholder_style() -> String {
    format!("width:{PLACEHOLDER_PX}px;height:{PLACEHOLDER_PX}px;")
}

#[function_component(Logo)]
pub fn logo() -> Html {
    let failed = use_state(|| false);

    let onerror = {
        let failed = failed.clone();
        Callback::from(move |_: Event| {
            log::warn!("logo {LOGO_SRC} failed to load, showing placeholder");
            failed.set(true);
        })
    };

    if *failed {
        html! {
            <div class="logo-placeholder" style={placeholder_style()} role="img" aria-label={format!("{BUSINESS_NAME} logo")}>
                { "Logo" }
            </div>
        }
    } else {
        html! {
            <img class="logo" src={LOGO_SRC} alt={format!("{BUSINESS_NAME} logo")} {onerror} />
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_reserves_a_fixed_box() {
        let style = placeholder_style();
        assert!(style.contains("width:176px"));
        assert!(style.contains("height:176px"));
    }
}
