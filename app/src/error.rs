use thiserror::Error;

use crate::form::Field;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("required field `{}` is empty", .0.name())]
    MissingField(Field),
}

/// Any way a posted quote can fail. The visitor sees one generic alert for
/// all of them; the variants only matter for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("form collector answered HTTP {status}")]
    Rejected { status: u16 },
    #[error("network error: {0}")]
    Network(String),
}

impl From<gloo_net::Error> for SubmitError {
    fn from(e: gloo_net::Error) -> Self {
        SubmitError::Network(e.to_string())
    }
}
