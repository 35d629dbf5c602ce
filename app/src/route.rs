use gloo::events::EventListener;
use yew::prelude::*;

use crate::host;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Privacy,
    Terms,
}

impl Route {
    /// Fragment used when linking to this page.
    pub fn href(self) -> &'static str {
        match self {
            Route::Home => "#/",
            Route::Privacy => "#/privacy",
            Route::Terms => "#/terms",
        }
    }
}

/// Maps a URL fragment to a page. Matching is exact and case-sensitive;
/// anything unrecognised lands on `Home`.
pub fn resolve_route(fragment: &str) -> Route {
    let path = fragment.strip_prefix('#').unwrap_or(fragment);
    match path {
        "/privacy" => Route::Privacy,
        "/terms" => Route::Terms,
        _ => Route::Home,
    }
}

/// Current route, kept in sync with `hashchange` for the lifetime of the
/// calling component.
#[hook]
pub fn use_hash_route() -> Route {
    let route = use_state(|| resolve_route(&host::current_fragment()));

    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = host::window().map(|w| {
                EventListener::new(&w, "hashchange", move |_| {
                    let next = resolve_route(&host::current_fragment());
                    log::debug!("hashchange -> {next:?}");
                    route.set(next);
                })
            });
            move || drop(listener)
        });
    }

    *route
}
