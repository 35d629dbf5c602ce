use yew::prelude::*;

use crate::config::{BUSINESS_NAME, LICENSE_NUMBER};
use crate::host;
use crate::route::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = use_memo((), |_| host::current_year());

    html! {
        <footer class="footer">
            <div class="wrap footer-inner">
                <div>{ format!("© {} {BUSINESS_NAME}. All rights reserved.", *year) }</div>
                <div class="row">
                    <span>{ "TX License #: " }<strong>{ LICENSE_NUMBER }</strong></span>
                    <a href={Route::Terms.href()}>{ "Terms" }</a>
                    <a href={Route::Privacy.href()}>{ "Privacy" }</a>
                </div>
            </div>
        </footer>
    }
}
