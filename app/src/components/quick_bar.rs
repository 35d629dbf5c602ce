use yew::prelude::*;

use crate::config::PHONE_ENGLISH;

// Shown on narrow screens only (see styles.css).
#[function_component(QuickBar)]
pub fn quick_bar() -> Html {
    html! {
        <div class="quickbar">
            <div class="quickbar-inner">
                <a href={PHONE_ENGLISH.tel_href()}>{ "Call" }</a>
                <div class="quickbar-sep" />
                <a href="#contact">{ "Quote" }</a>
            </div>
        </div>
    }
}
