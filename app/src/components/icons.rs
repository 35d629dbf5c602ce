use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IconProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(CheckCircle)]
pub fn check_circle(props: &IconProps) -> Html {
    html! {
        <svg class={props.class.clone()} viewBox="0 0 24 24" fill="none" stroke="currentColor" aria-hidden="true">
            <path stroke-width="2" d="M9 12l2 2 4-4" />
            <circle cx="12" cy="12" r="9" stroke-width="2" />
        </svg>
    }
}

#[function_component(ShieldCheck)]
pub fn shield_check(props: &IconProps) -> Html {
    html! {
        <svg class={props.class.clone()} viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
            <path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z" />
            <path d="M9 12l2 2 4-4" />
        </svg>
    }
}

#[function_component(PhoneIcon)]
pub fn phone_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class.clone()} viewBox="0 0 24 24" fill="none" stroke="currentColor" aria-hidden="true">
            <path stroke-width="2" d="M22 16.92v3a2 2 0 01-2.18 2 19.86 19.86 0 01-8.63-3.07 19.5 19.5 0 01-6-6A19.86 19.86 0 013.08 4.18 2 2 0 015.06 2h3a2 2 0 012 1.72c.12.89.3 1.76.54 2.6a2 2 0 01-.45 2.11L9 9a16 16 0 006 6l.57-1.15a2 2 0 012.11-.45c.84.24 1.71.42 2.6.54A2 2 0 0122 16.92z" />
        </svg>
    }
}

#[function_component(MailIcon)]
pub fn mail_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class.clone()} viewBox="0 0 24 24" fill="none" stroke="currentColor" aria-hidden="true">
            <path stroke-width="2" d="M4 4h16v16H4z" />
            <path stroke-width="2" d="M22 6l-10 7L2 6" />
        </svg>
    }
}

#[function_component(MapPinIcon)]
pub fn map_pin_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class.clone()} viewBox="0 0 24 24" fill="none" stroke="currentColor" aria-hidden="true">
            <path stroke-width="2" d="M12 21s-7-4.35-7-10a7 7 0 1114 0c0 5.65-7 10-7 10z" />
            <circle cx="12" cy="11" r="3" stroke-width="2" />
        </svg>
    }
}
