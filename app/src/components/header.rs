use yew::prelude::*;

use crate::config::BUSINESS_NAME;
use crate::route::Route;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="topbar">
            <div class="wrap topbar-inner">
                <a href={Route::Home.href()} class="brand">{ BUSINESS_NAME }</a>
                <nav class="nav">
                    <a href={Route::Home.href()}>{ "Home" }</a>
                    <a href="#about">{ "About Us" }</a>
                    <a href="#contact"><button class="btn">{ "Free Quote" }</button></a>
                </nav>
            </div>
        </header>
    }
}
