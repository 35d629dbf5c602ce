mod about;
mod contact;
mod footer;
mod header;
mod hero;
mod icons;
mod legal;
mod logo;
mod quick_bar;
mod services;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use legal::{PrivacyPage, TermsPage};
pub use quick_bar::QuickBar;
pub use services::Services;
