//! Contact form validation and mail-compose hand-off.
//!
//! Nothing is sent from the page: a valid submission becomes a `mailto:`
//! navigation and the user's mail handler takes it from there.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::util::text::encode_uri_component;

pub const MISSING_FIELDS_ALERT: &str = "Please fill all fields";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("contact field left empty: {}", .0.as_str())]
    MissingField(ContactField),
}

impl ContactError {
    /// Text shown in the blocking alert.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MissingField(_) => MISSING_FIELDS_ALERT,
        }
    }
}

/// Trimmed form contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self { name: name.trim().to_owned(), email: email.trim().to_owned(), message: message.trim().to_owned() }
    }

    /// # Errors
    ///
    /// Returns [`ContactError::MissingField`] for the first empty field.
    pub fn validate(&self) -> Result<(), ContactError> {
        for (field, value) in [
            (ContactField::Name, &self.name),
            (ContactField::Email, &self.email),
            (ContactField::Message, &self.message),
        ] {
            if value.is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn subject(&self) -> String {
        format!("Website message from {}", self.name)
    }

    #[must_use]
    pub fn body(&self) -> String {
        format!("Name: {}\nEmail: {}\n\n{}", self.name, self.email, self.message)
    }

    /// `mailto:` URI addressed to `recipient` with encoded subject and body.
    #[must_use]
    pub fn mailto_uri(&self, recipient: &str) -> String {
        format!(
            "mailto:{recipient}?subject={}&body={}",
            encode_uri_component(&self.subject()),
            encode_uri_component(&self.body()),
        )
    }
}

/// Browser side effects of a submission.
pub trait ContactHost {
    fn alert(&self, message: &str);
    fn navigate(&self, uri: &str);
}

/// Validate and hand off one submission.
///
/// # Errors
///
/// Returns the validation error after alerting the user; no navigation
/// happens in that case.
pub fn dispatch<H: ContactHost>(host: &H, recipient: &str, submission: &ContactSubmission) -> Result<(), ContactError> {
    if let Err(e) = submission.validate() {
        host.alert(e.user_message());
        return Err(e);
    }
    host.navigate(&submission.mailto_uri(recipient));
    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another handler already took this submit event.
    AlreadyHandled,
    Rejected(ContactError),
    Sent,
}

/// Handle one submit event at most once across every wired handler.
///
/// `already_handled` is the event's `defaultPrevented` flag as seen before
/// this handler suppressed it.
pub fn submit_once<H: ContactHost>(
    host: &H,
    recipient: &str,
    already_handled: bool,
    submission: &ContactSubmission,
) -> SubmitOutcome {
    if already_handled {
        return SubmitOutcome::AlreadyHandled;
    }
    match dispatch(host, recipient, submission) {
        Ok(()) => SubmitOutcome::Sent,
        Err(e) => SubmitOutcome::Rejected(e),
    }
}
