use std::rc::Rc;

use gloo_net::http::Request;
use serde::Deserialize;
use web_sys::FormData;
use yew::prelude::*;

use crate::error::SubmitError;
use crate::form::QuoteForm;

pub const SUBMIT_FAILED_ALERT: &str =
    "Sorry, something went wrong sending your request. Please try again or call us.";

/// Where the quote request is in its trip to the form collector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionResult {
    #[default]
    NotSubmitted,
    Submitting,
    Sent,
    /// Last attempt failed. Behaves like `NotSubmitted`: the form stays
    /// filled in and the button is live again.
    Failed,
}

impl SubmissionResult {
    pub fn in_flight(self) -> bool {
        self == SubmissionResult::Submitting
    }

    pub fn can_submit(self) -> bool {
        matches!(self, SubmissionResult::NotSubmitted | SubmissionResult::Failed)
    }
}

pub enum SubmissionAction {
    Start,
    Succeeded,
    Failed,
}

impl Reducible for SubmissionResult {
    type Action = SubmissionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match (*self, action) {
            (current, SubmissionAction::Start) if current.can_submit() => SubmissionResult::Submitting,
            (SubmissionResult::Submitting, SubmissionAction::Succeeded) => SubmissionResult::Sent,
            (SubmissionResult::Submitting, SubmissionAction::Failed) => SubmissionResult::Failed,
            _ => return self,
        };
        Rc::new(next)
    }
}

/// Something that can carry a quote to the collector and report the HTTP
/// status it answered with.
#[allow(async_fn_in_trait)]
pub trait QuoteTransport {
    async fn post(&self, form: &QuoteForm) -> Result<u16, SubmitError>;
}

/// Hosted form collector (Formspree-style): multipart body, JSON reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormEndpoint {
    pub url: String,
}

impl FormEndpoint {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[derive(Debug, Deserialize)]
struct CollectorReply {
    #[serde(default)]
    errors: Vec<CollectorError>,
}

#[derive(Debug, Deserialize)]
struct CollectorError {
    message: String,
}

fn collector_messages(raw: &str) -> Vec<String> {
    serde_json::from_str::<CollectorReply>(raw)
        .map(|r| r.errors.into_iter().map(|e| e.message).collect())
        .unwrap_or_default()
}

fn form_data(form: &QuoteForm) -> Result<FormData, SubmitError> {
    let data = FormData::new().map_err(|e| SubmitError::Network(format!("{e:?}")))?;
    for (key, value) in form.pairs() {
        data.append_with_str(key, value)
            .map_err(|e| SubmitError::Network(format!("{e:?}")))?;
    }
    Ok(data)
}

impl QuoteTransport for FormEndpoint {
    async fn post(&self, form: &QuoteForm) -> Result<u16, SubmitError> {
        let resp = Request::post(&self.url)
            .header("Accept", "application/json")
            .body(form_data(form)?)?
            .send()
            .await?;

        let status = resp.status();
        if !resp.ok() {
            if let Ok(text) = resp.text().await {
                for msg in collector_messages(&text) {
                    log::warn!("collector: {msg}");
                }
            }
        }
        Ok(status)
    }
}

/// Sends one quote. Only a 2xx answer counts as delivered.
pub async fn deliver<T: QuoteTransport>(transport: &T, form: &QuoteForm) -> Result<(), SubmitError> {
    let status = transport.post(form).await?;
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SubmitError::Rejected { status })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    struct MockCollector {
        answer: Result<u16, SubmitError>,
        calls: Cell<usize>,
        seen: RefCell<Vec<QuoteForm>>,
    }

    impl MockCollector {
        fn answering(answer: Result<u16, SubmitError>) -> Self {
            Self {
                answer,
                calls: Cell::new(0),
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl QuoteTransport for MockCollector {
        async fn post(&self, form: &QuoteForm) -> Result<u16, SubmitError> {
            self.calls.set(self.calls.get() + 1);
            self.seen.borrow_mut().push(form.clone());
            self.answer.clone()
        }
    }

    fn jane() -> QuoteForm {
        QuoteForm {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: "5125550100".into(),
            message: "Need a panel upgrade".into(),
        }
    }

    // Mirrors what the contact section does around `deliver`.
    fn run_submission(collector: &MockCollector, form: &QuoteForm) -> Rc<SubmissionResult> {
        let state = Rc::new(SubmissionResult::default()).reduce(SubmissionAction::Start);
        assert!(state.in_flight());
        let outcome = match block_on(deliver(collector, form)) {
            Ok(()) => SubmissionAction::Succeeded,
            Err(_) => SubmissionAction::Failed,
        };
        state.reduce(outcome)
    }

    #[test]
    fn any_2xx_is_sent() {
        for status in [200, 201, 204, 299] {
            let collector = MockCollector::answering(Ok(status));
            assert_eq!(*run_submission(&collector, &jane()), SubmissionResult::Sent);
        }
    }

    #[test]
    fn success_leaves_fields_alone() {
        let form = jane();
        let collector = MockCollector::answering(Ok(200));
        run_submission(&collector, &form);
        assert_eq!(form, jane());
        assert_eq!(collector.seen.borrow().as_slice(), [jane()]);
    }

    #[test]
    fn non_2xx_is_rejected() {
        for status in [199, 300, 302, 400, 422, 500, 503] {
            let collector = MockCollector::answering(Ok(status));
            assert_eq!(
                block_on(deliver(&collector, &jane())),
                Err(SubmitError::Rejected { status })
            );
        }
    }

    #[test]
    fn server_error_keeps_form_and_reenables_submit() {
        let form = jane();
        let collector = MockCollector::answering(Ok(500));
        let state = run_submission(&collector, &form);
        assert_eq!(*state, SubmissionResult::Failed);
        assert!(state.can_submit());
        assert_eq!(form, jane());
    }

    #[test]
    fn network_error_keeps_form_and_reenables_submit() {
        let form = jane();
        let collector = MockCollector::answering(Err(SubmitError::Network("offline".into())));
        let state = run_submission(&collector, &form);
        assert_eq!(*state, SubmissionResult::Failed);
        assert!(state.can_submit());
        assert_eq!(form, jane());
    }

    #[test]
    fn retry_after_failure_is_allowed() {
        let failed = Rc::new(SubmissionResult::Failed);
        assert_eq!(*failed.reduce(SubmissionAction::Start), SubmissionResult::Submitting);
    }

    #[test]
    fn start_while_in_flight_is_ignored() {
        let busy = Rc::new(SubmissionResult::Submitting);
        let again = busy.clone().reduce(SubmissionAction::Start);
        assert!(Rc::ptr_eq(&busy, &again));
        assert!(!again.can_submit());
    }

    #[test]
    fn sent_is_final() {
        for action in [SubmissionAction::Start, SubmissionAction::Failed, SubmissionAction::Succeeded] {
            let sent = Rc::new(SubmissionResult::Sent);
            assert_eq!(*sent.reduce(action), SubmissionResult::Sent);
        }
    }

    #[test]
    fn stray_outcomes_without_start_do_nothing() {
        let idle = Rc::new(SubmissionResult::NotSubmitted);
        assert_eq!(*idle.clone().reduce(SubmissionAction::Succeeded), SubmissionResult::NotSubmitted);
        assert_eq!(*idle.reduce(SubmissionAction::Failed), SubmissionResult::NotSubmitted);
    }

    #[test]
    fn collector_error_messages_are_extracted() {
        let raw = r#"{"errors":[{"field":"email","message":"should be an email"},{"message":"spam"}]}"#;
        assert_eq!(collector_messages(raw), ["should be an email", "spam"]);
        assert!(collector_messages("<html>oops</html>").is_empty());
        assert!(collector_messages(r#"{"ok":true}"#).is_empty());
    }
}
