use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::icons::{MailIcon, MapPinIcon, PhoneIcon};
use crate::config::{self, Delivery, PHONE_ENGLISH, PHONE_SPANISH, QUOTE_RECIPIENT, QUOTE_SUBJECT, SERVICE_AREA};
use crate::form::{Field, FormAction, QuoteForm, MISSING_FIELDS_ALERT};
use crate::host;
use crate::mailto::mailto_href;
use crate::route::Route;
use crate::submit::{deliver, FormEndpoint, SubmissionAction, SubmissionResult, SUBMIT_FAILED_ALERT};

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub delivery: Delivery,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let form = use_reducer(QuoteForm::default);
    let submission = use_reducer(SubmissionResult::default);
    let delivery = props.delivery;

    let on_input = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::Edit(field, input.value()));
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(FormAction::Edit(Field::Message, area.value()));
        })
    };

    let onsubmit = {
        let form = form.clone();
        let submission = submission.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let Err(err) = form.check_required() {
                log::info!("quote blocked: {err}");
                host::alert(MISSING_FIELDS_ALERT);
                return;
            }

            match delivery {
                Delivery::Mailto => {
                    log::info!("handing quote to mail client");
                    host::navigate(&mailto_href(QUOTE_RECIPIENT, QUOTE_SUBJECT, &form));
                }
                Delivery::Http => {
                    if !submission.can_submit() {
                        return;
                    }
                    submission.dispatch(SubmissionAction::Start);

                    let quote = (*form).clone();
                    let submission = submission.clone();
                    spawn_local(async move {
                        let endpoint = FormEndpoint::new(config::quote_endpoint());
                        match deliver(&endpoint, &quote).await {
                            Ok(()) => {
                                log::info!("quote delivered to {}", endpoint.url);
                                submission.dispatch(SubmissionAction::Succeeded);
                            }
                            Err(err) => {
                                log::warn!("quote submission failed: {err}");
                                host::alert(SUBMIT_FAILED_ALERT);
                                submission.dispatch(SubmissionAction::Failed);
                            }
                        }
                    });
                }
            }
        })
    };

    let submit_label = match (delivery, *submission) {
        (Delivery::Mailto, _) => "Email Quote",
        (Delivery::Http, SubmissionResult::Submitting) => "Sending…",
        (Delivery::Http, _) => "Send Quote Request",
    };

    let body = if *submission == SubmissionResult::Sent {
        html! {
            <div class="card thanks" role="status">
                <h3 class="h3">{ "Thank you!" }</h3>
                <p>{ "We received your request and will get back to you shortly." }</p>
            </div>
        }
    } else {
        html! {
            <form class="quote-form" aria-label="Quote form" {onsubmit}>
                <label class="field">
                    { "Your name " }<span class="req">{ "*" }</span>
                    <input required=true name={Field::Name.name()} placeholder="Your name"
                        value={form.name.clone()} oninput={on_input(Field::Name)} />
                </label>
                <label class="field">
                    { "Your email " }<span class="req">{ "*" }</span>
                    <input required=true name={Field::Email.name()} type="email" placeholder="Your email"
                        value={form.email.clone()} oninput={on_input(Field::Email)} />
                </label>
                <label class="field">
                    { "Your phone " }<span class="req">{ "*" }</span>
                    <input required=true name={Field::Phone.name()} type="tel" placeholder="Your phone number"
                        value={form.phone.clone()} oninput={on_input(Field::Phone)} />
                </label>
                <label class="field">
                    { "Your message " }<span class="req">{ "*" }</span>
                    <textarea required=true name={Field::Message.name()}
                        placeholder="Tell us what you need (e.g., panel upgrade, EV charger, lights)"
                        value={form.message.clone()} oninput={on_message} />
                </label>

                <div class="row">
                    <button type="submit" class="btn" disabled={submission.in_flight()}>{ submit_label }</button>
                    <a href={PHONE_ENGLISH.tel_href()}>
                        <button type="button" class="btn btn-ghost">{ "Call Now" }</button>
                    </a>
                </div>

                <p class="fine">
                    { "By contacting us, you agree to our " }
                    <a href={Route::Terms.href()}>{ "Terms" }</a>
                    { " & " }
                    <a href={Route::Privacy.href()}>{ "Privacy Policy" }</a>
                    { "." }
                </p>
            </form>
        }
    };

    html! {
        <section id="contact">
            <div class="wrap section contact-grid">
                <div>
                    <h2 class="h2">{ "Get a Fast Quote" }</h2>
                    <p class="sub">{ "Same-day responses in most cases." }</p>
                    <div class="contact-lines">
                        { for [PHONE_ENGLISH, PHONE_SPANISH].iter().map(|line| html! {
                            <div key={line.dial}>
                                <PhoneIcon class="icon" />
                                { format!(" ({}) ", line.label) }
                                <a href={line.tel_href()}>{ line.display }</a>
                            </div>
                        }) }
                        <div><MailIcon class="icon" />{ format!(" {QUOTE_RECIPIENT}") }</div>
                        <div><MapPinIcon class="icon" />{ format!(" {SERVICE_AREA}") }</div>
                    </div>
                </div>

                { body }
            </div>
        </section>
    }
}
