use yew::prelude::*;

use super::icons::CheckCircle;

const SERVICES: [&str; 10] = [
    "Residential Wiring & Repairs",
    "Panel Upgrades",
    "Lighting Installation (indoor & outdoor)",
    "Ceiling Fans & Outlets",
    "EV Charger Installation",
    "Smart Home Wiring",
    "Landscape & Outdoor Lighting",
    "New Construction & Remodels",
    "Appliance & HVAC Wiring",
    "Emergency Electrical Service",
];

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="services">
            <div class="wrap section">
                <h2 class="h2">{ "Our Services" }</h2>
                <p class="sub">{ "Upgrades, installs, and repairs tailored to your home’s needs." }</p>
                <div class="services">
                    { for SERVICES.iter().map(|s| html! {
                        <div key={*s} class="chip"><CheckCircle class="icon" /><span>{ *s }</span></div>
                    }) }
                </div>
            </div>
        </section>
    }
}
