//! Contact form validation state.
//!
//! Each field starts `untouched` and becomes touched on its first edit or
//! blur; from then on its rule is re-run after every edit. A submission
//! attempt touches everything, re-validates from scratch and only then hands
//! out the payload. The state is plain data: the caller owns it and performs
//! the network call and the success-reset timer (see [`super::contact`]).

use std::collections::BTreeMap;

use serde::Serialize;

use crate::entities::contact_me::{ContactField, ContactRule, ContactSubmission};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "error", rename_all = "lowercase")]
pub enum FieldStatus {
    Untouched,
    Valid,
    Invalid(ContactRule),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(String),
}

/// Why a submission attempt did not produce a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRefusal {
    /// Every failing field, in form order.
    Invalid(Vec<(ContactField, ContactRule)>),
    /// A previous submission has not settled yet.
    InFlight,
}

/// Identifies one success so that only its own timer may clear it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuccessTicket(u64);

#[derive(Debug, Clone, Default)]
pub struct ContactFormState {
    values: ContactSubmission,
    touched: [bool; 4],
    errors: BTreeMap<ContactField, ContactRule>,
    status: SubmissionStatus,
    successes: u64,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &ContactSubmission {
        &self.values
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn is_success(&self) -> bool {
        self.status == SubmissionStatus::Success
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            SubmissionStatus::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_touched(&self, field: ContactField) -> bool {
        self.touched[field.index()]
    }

    pub fn field_status(&self, field: ContactField) -> FieldStatus {
        if !self.is_touched(field) {
            return FieldStatus::Untouched;
        }
        match self.errors.get(&field) {
            Some(rule) => FieldStatus::Invalid(*rule),
            None => FieldStatus::Valid,
        }
    }

    /// Current failures of touched fields, in form order.
    pub fn errors(&self) -> &BTreeMap<ContactField, ContactRule> {
        &self.errors
    }

    /// Records an edit: stores the value, touches the field, re-validates.
    pub fn edit(&mut self, field: ContactField, value: impl Into<String>) {
        self.values.set_value(field, value.into());
        self.touched[field.index()] = true;
        self.revalidate();
    }

    pub fn blur(&mut self, field: ContactField) {
        if !self.is_touched(field) {
            self.touched[field.index()] = true;
            self.revalidate();
        }
    }

    fn revalidate(&mut self) {
        self.errors = ContactField::ALL
            .into_iter()
            .filter(|field| self.touched[field.index()])
            .filter_map(|field| {
                field
                    .check(self.values.value(field))
                    .err()
                    .map(|rule| (field, rule))
            })
            .collect();
    }

    /// Starts a submission. On success the status is `Submitting`, any previous
    /// error is cleared and the payload to send is returned.
    pub fn begin_submit(&mut self) -> Result<ContactSubmission, SubmitRefusal> {
        if self.is_submitting() {
            return Err(SubmitRefusal::InFlight);
        }

        self.touched = [true; 4];
        self.revalidate();

        if !self.errors.is_empty() {
            let failing = self.errors.iter().map(|(f, r)| (*f, *r)).collect();
            return Err(SubmitRefusal::Invalid(failing));
        }

        self.status = SubmissionStatus::Submitting;
        Ok(self.values.clone())
    }

    /// Resets the form after a delivered submission and returns the ticket the
    /// reset timer must present to [`Self::clear_success`].
    pub fn submit_succeeded(&mut self) -> SuccessTicket {
        self.values = ContactSubmission::default();
        self.touched = [false; 4];
        self.errors.clear();
        self.status = SubmissionStatus::Success;
        self.successes += 1;
        SuccessTicket(self.successes)
    }

    /// Abandons an in-flight submission without an outcome. Values stay put.
    pub fn submit_cancelled(&mut self) -> bool {
        if self.is_submitting() {
            self.status = SubmissionStatus::Idle;
            true
        } else {
            false
        }
    }

    pub fn submit_failed(&mut self, message: impl Into<String>) {
        self.status = SubmissionStatus::Error(message.into());
    }

    /// Returns to idle if `ticket` belongs to the success still on display.
    pub fn clear_success(&mut self, ticket: SuccessTicket) -> bool {
        if self.is_success() && ticket.0 == self.successes {
            self.status = SubmissionStatus::Idle;
            true
        } else {
            false
        }
    }
}
