use yew::prelude::*;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about">
            <div class="wrap section">
                <h2 class="h2">{ "About Us" }</h2>
                <p class="lead">
                    { "Our company started as a small family venture over three generations ago, when our grandfather began wiring homes \
                       in the Austin area with a simple promise: do the job right, treat people fairly, and always stand by your work. \
                       That spirit continues today. Over the years, we’ve grown alongside the community, helping neighbors modernize \
                       their homes, install safer panels, and embrace new technologies like EV chargers and smart home systems. We believe \
                       in clear communication, honest pricing, and leaving every project cleaner than when we arrived." }
                </p>
            </div>
        </section>
    }
}
