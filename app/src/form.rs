use std::rc::Rc;

use yew::prelude::*;

use crate::error::ValidationError;

pub const MISSING_FIELDS_ALERT: &str = "Please fill in all required fields including phone number.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Message];

    /// Form-data key, also the `name` attribute of the input.
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Message => "message",
        }
    }
}

/// What the visitor has typed into the quote form so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl QuoteForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Every field must be non-empty. Whitespace counts as filled in.
    pub fn check_required(&self) -> Result<(), ValidationError> {
        match Field::ALL.into_iter().find(|f| self.get(*f).is_empty()) {
            Some(f) => Err(ValidationError::MissingField(f)),
            None => Ok(()),
        }
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        Field::ALL.into_iter().map(move |f| (f.name(), self.get(f)))
    }
}

pub enum FormAction {
    Edit(Field, String),
}

impl Reducible for QuoteForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            FormAction::Edit(field, value) => {
                if self.get(field) == value {
                    return self;
                }
                let mut next = (*self).clone();
                next.set(field, value);
                Rc::new(next)
            }
        }
    }
}
