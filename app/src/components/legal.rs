use yew::prelude::*;

use crate::config::{BUSINESS_NAME, LEGAL_EFFECTIVE_DATE};

#[derive(Properties, PartialEq)]
struct LegalProps {
    title: AttrValue,
    #[prop_or_default]
    children: Html,
}

#[function_component(LegalPage)]
fn legal_page(props: &LegalProps) -> Html {
    html! {
        <div class="wrap legal">
            <h1 class="h1">{ props.title.clone() }</h1>
            <p>{ format!("Effective Date: {LEGAL_EFFECTIVE_DATE}") }</p>
            { props.children.clone() }
        </div>
    }
}

#[function_component(PrivacyPage)]
pub fn privacy_page() -> Html {
    html! {
        <LegalPage title="Privacy Policy">
            <p>
                { format!("{BUSINESS_NAME} (“Company,” “we,” “us,” or “our”) respects your privacy. \
                   This Privacy Policy explains how we collect, use, and protect your information.") }
            </p>
        </LegalPage>
    }
}

#[function_component(TermsPage)]
pub fn terms_page() -> Html {
    html! {
        <LegalPage title="Terms of Service" />
    }
}
