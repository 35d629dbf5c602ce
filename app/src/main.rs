mod components;
mod config;
mod error;
mod form;
mod host;
mod mailto;
mod route;
mod submit;

use yew::prelude::*;

use components::{About, Contact, Footer, Header, Hero, PrivacyPage, QuickBar, Services, TermsPage};
use config::Delivery;
use route::{use_hash_route, Route};

#[function_component(HomePage)]
fn home_page() -> Html {
    let delivery = Delivery::from_build_env();

    html! {
        <>
            <Hero />
            <QuickBar />
            <Services />
            <About />
            <Contact {delivery} />
        </>
    }
}

#[function_component(App)]
fn app() -> Html {
    let route = use_hash_route();

    let page = match route {
        Route::Home => html! { <HomePage /> },
        Route::Privacy => html! { <PrivacyPage /> },
        Route::Terms => html! { <TermsPage /> },
    };

    html! {
        <div class="page">
            <Header />
            { page }
            <Footer />
        </div>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("{} site starting ({:?} delivery)", config::BUSINESS_NAME, Delivery::from_build_env());

    yew::Renderer::<App>::new().render();
}
