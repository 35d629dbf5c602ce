use urlencoding::encode;

use crate::form::QuoteForm;

pub fn quote_body(form: &QuoteForm) -> String {
    format!(
        "Name: {}\nEmail: {}\nPhone: {}\n\n{}",
        form.name, form.email, form.phone, form.message
    )
}

/// `mailto:` link that opens a pre-filled quote request in the visitor's
/// mail client. Subject and body are percent-encoded as URI components.
pub fn mailto_href(recipient: &str, subject: &str, form: &QuoteForm) -> String {
    format!(
        "mailto:{recipient}?subject={}&body={}",
        encode(subject),
        encode(&quote_body(form))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{QUOTE_RECIPIENT, QUOTE_SUBJECT};
    use urlencoding::decode;

    fn split(href: &str) -> (&str, String, String) {
        let rest = href.strip_prefix("mailto:").unwrap();
        let (recipient, query) = rest.split_once('?').unwrap();
        let (subject, body) = query.split_once('&').unwrap();
        let subject = subject.strip_prefix("subject=").unwrap();
        let body = body.strip_prefix("body=").unwrap();
        (
            recipient,
            decode(subject).unwrap().into_owned(),
            decode(body).unwrap().into_owned(),
        )
    }

    #[test]
    fn jane_doe_quote() {
        let form = QuoteForm {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: "5125550100".into(),
            message: "Need a panel upgrade".into(),
        };
        let href = mailto_href(QUOTE_RECIPIENT, QUOTE_SUBJECT, &form);
        let (recipient, subject, body) = split(&href);

        assert_eq!(recipient, "3generationselectric@gmail.com");
        assert_eq!(subject, "Quote Request - 3 Generations Electric");

        let lines: Vec<_> = body.split('\n').collect();
        assert_eq!(
            lines,
            [
                "Name: Jane Doe",
                "Email: jane@example.com",
                "Phone: 5125550100",
                "",
                "Need a panel upgrade",
            ]
        );
    }

    #[test]
    fn special_characters_cannot_break_the_query() {
        let form = QuoteForm {
            name: "Ana & José".into(),
            email: "a@b.co?cc=evil@x".into(),
            phone: "+1 (512) 555-0100".into(),
            message: "Line one\nLine two & more?\r\n100% ñandú #panel=1".into(),
        };
        let href = mailto_href(QUOTE_RECIPIENT, QUOTE_SUBJECT, &form);

        let query = href.split_once('?').unwrap().1;
        assert_eq!(query.matches('&').count(), 1);
        assert!(!query.contains('\n'));
        assert!(!query.contains('#'));
        assert!(query.is_ascii());

        let (_, _, body) = split(&href);
        assert_eq!(body, quote_body(&form));
        assert!(body.ends_with("100% ñandú #panel=1"));
    }

    #[test]
    fn message_is_verbatim_after_blank_line() {
        let form = QuoteForm {
            message: "  indented\n\nand spaced  ".into(),
            ..Default::default()
        };
        let body = quote_body(&form);
        let (_, message) = body.split_once("\n\n").unwrap();
        assert_eq!(message, "  indented\n\nand spaced  ");
    }
}
