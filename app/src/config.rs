// Site-wide constants. Delivery knobs are read at build time, e.g.
// QUOTE_DELIVERY=http QUOTE_ENDPOINT=https://formspree.io/f/abcd trunk build --release

pub const BUSINESS_NAME: &str = "3 Generations Electric";
pub const LICENSE_NUMBER: &str = "7953";
pub const LICENSE_BADGE: &str = "Licensed • Bonded • Insured — TX License #7953";
pub const SERVICE_AREA: &str = "Austin, Manor, Bastrop, Elgin";

pub const LOGO_SRC: &str = "/image000000-3.png";

pub const QUOTE_RECIPIENT: &str = "3generationselectric@gmail.com";
pub const QUOTE_SUBJECT: &str = "Quote Request - 3 Generations Electric";

pub const LEGAL_EFFECTIVE_DATE: &str = "September 26, 2025";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneLine {
    pub label: &'static str,
    pub display: &'static str,
    /// Digits only, used verbatim in `tel:` links.
    pub dial: &'static str,
}

impl PhoneLine {
    pub fn tel_href(&self) -> String {
        format!("tel:{}", self.dial)
    }
}

pub const PHONE_ENGLISH: PhoneLine = PhoneLine {
    label: "English",
    display: "737-233-7319",
    dial: "17372337319",
};

pub const PHONE_SPANISH: PhoneLine = PhoneLine {
    label: "Español",
    display: "737-233-7320",
    dial: "17372337320",
};

const DEFAULT_ENDPOINT: &str = "https://formspree.io/f/3gen-quote";

/// How a completed quote form leaves the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Hand off to the visitor's mail client.
    Mailto,
    /// POST to the third-party form collector.
    Http,
}

impl Delivery {
    fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("http") => Delivery::Http,
            _ => Delivery::Mailto,
        }
    }

    pub fn from_build_env() -> Self {
        Self::parse(option_env!("QUOTE_DELIVERY"))
    }
}

pub fn quote_endpoint() -> &'static str {
    option_env!("QUOTE_ENDPOINT").unwrap_or(DEFAULT_ENDPOINT)
}
