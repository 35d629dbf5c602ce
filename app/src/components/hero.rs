use yew::prelude::*;

use super::icons::{CheckCircle, ShieldCheck};
use super::logo::Logo;
use crate::config::{LICENSE_BADGE, PHONE_ENGLISH, PHONE_SPANISH};

const SELLING_POINTS: [&str; 3] = ["Free same-day quotes", "Clean, on-time work", "Up-front pricing"];

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id="home" class="hero">
            <div class="wrap hero-grid">
                <div class="hero-copy">
                    <h1 class="h1">
                        { "Powering Homes for " }<span class="accent">{ "3 Generations" }</span>
                    </h1>
                    <p class="lead">
                        { "Trusted residential electricians in Austin, Manor, Bastrop & Elgin. From EV chargers to full panel upgrades — safe, reliable, and family-run service." }
                    </p>

                    <div class="row">
                        <a href={PHONE_ENGLISH.tel_href()}>
                            <button class="btn">{ format!("Call (English) {}", PHONE_ENGLISH.display) }</button>
                        </a>
                        <a href={PHONE_SPANISH.tel_href()}>
                            <button class="btn btn-outline">{ format!("Llamar (Español) {}", PHONE_SPANISH.display) }</button>
                        </a>
                    </div>

                    <ul class="points">
                        { for SELLING_POINTS.iter().map(|p| html! {
                            <li key={*p} class="chip"><CheckCircle class="icon" />{ *p }</li>
                        }) }
                        <li class="chip"><ShieldCheck class="icon" />{ LICENSE_BADGE }</li>
                    </ul>
                </div>

                <div class="hero-logo">
                    <Logo />
                </div>
            </div>
        </section>
    }
}
