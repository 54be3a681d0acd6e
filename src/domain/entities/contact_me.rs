use std::borrow::Cow;

use derive_more::Display;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::constants::MIN_MESSAGE_LENGTH;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// The JSON body posted to the contact endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ContactSubmission {
    #[validate(custom(function = "validate_contact_name"), length(max = 100))]
    pub name: String,

    #[validate(custom(function = "validate_contact_email"), length(max = 254))]
    pub email: String,

    #[serde(default)]
    #[validate(length(max = 150))]
    pub subject: String,

    #[validate(custom(function = "validate_contact_message"), length(max = 5000))]
    pub message: String,
}

/// The contact endpoint's reply. Failures carry `error`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    #[display("name")]
    Name,
    #[display("email")]
    Email,
    #[display("subject")]
    Subject,
    #[display("message")]
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Runs this field's rule against `value`. Subject has no rule.
    pub fn check(self, value: &str) -> Result<(), ContactRule> {
        match self {
            ContactField::Name => check_name(value),
            ContactField::Email => check_email(value),
            ContactField::Subject => Ok(()),
            ContactField::Message => check_message(value),
        }
    }
}

impl ContactSubmission {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set_value(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }
}

/// A failed contact-form rule. The display string is the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ContactRule {
    #[display("Name is required")]
    NameRequired,

    #[display("Email is required")]
    EmailRequired,

    #[display("Please enter a valid email address")]
    EmailInvalid,

    #[display("Message is required")]
    MessageRequired,

    #[display("Message should be at least {} characters", MIN_MESSAGE_LENGTH)]
    MessageTooShort,
}

impl ContactRule {
    pub fn code(&self) -> &'static str {
        match self {
            ContactRule::NameRequired => "name_required",
            ContactRule::EmailRequired => "email_required",
            ContactRule::EmailInvalid => "email_invalid",
            ContactRule::MessageRequired => "message_required",
            ContactRule::MessageTooShort => "message_too_short",
        }
    }
}

impl Serialize for ContactRule {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl From<ContactRule> for ValidationError {
    fn from(rule: ContactRule) -> Self {
        let mut err = ValidationError::new(rule.code());
        err.message = Some(Cow::Owned(rule.to_string()));
        err
    }
}

// ───── Rules ────────────────────────────────────────────────────────

pub fn check_name(name: &str) -> Result<(), ContactRule> {
    if name.trim().is_empty() {
        return Err(ContactRule::NameRequired);
    }
    Ok(())
}

pub fn check_email(email: &str) -> Result<(), ContactRule> {
    if email.is_empty() {
        return Err(ContactRule::EmailRequired);
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(ContactRule::EmailInvalid);
    }
    Ok(())
}

pub fn check_message(message: &str) -> Result<(), ContactRule> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        return Err(ContactRule::MessageRequired);
    }
    if trimmed.chars().count() < MIN_MESSAGE_LENGTH {
        return Err(ContactRule::MessageTooShort);
    }
    Ok(())
}

fn validate_contact_name(name: &str) -> Result<(), ValidationError> {
    check_name(name).map_err(ValidationError::from)
}

fn validate_contact_email(email: &str) -> Result<(), ValidationError> {
    check_email(email).map_err(ValidationError::from)
}

fn validate_contact_message(message: &str) -> Result<(), ValidationError> {
    check_message(message).map_err(ValidationError::from)
}
