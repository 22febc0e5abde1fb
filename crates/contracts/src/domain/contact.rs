//! Contact form state and the boundary to the external form relay.
//!
//! A submission goes through two steps: [`ContactForm::begin_submit`] validates
//! and marks the form as in flight, then the caller hands the message to a
//! [`ContactTransport`] and reports the outcome via [`ContactForm::complete`].
//! A second `begin_submit` while the first is pending is refused.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub fn all() -> [ContactField; 4] {
        [
            ContactField::Name,
            ContactField::Email,
            ContactField::Subject,
            ContactField::Message,
        ]
    }

    /// Name of the field in the JSON body and the `name` attribute.
    pub fn name(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            ContactField::Name => "contact.form.name",
            ContactField::Email => "contact.form.email",
            ContactField::Subject => "contact.form.subject",
            ContactField::Message => "contact.form.message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// JSON body posted to the relay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("field `{0}` is required")]
    MissingField(ContactField),
    #[error("email address is not valid")]
    InvalidEmail,
    #[error("a submission is already in flight")]
    InFlight,
    #[error("form relay rejected the message with status {0}")]
    Rejected(u16),
    #[error("form relay unreachable: {0}")]
    Transport(String),
}

impl ContactError {
    /// Failures of the relay call itself, as opposed to local validation.
    pub fn is_delivery_failure(&self) -> bool {
        matches!(self, ContactError::Rejected(_) | ContactError::Transport(_))
    }
}

/// Any 2xx status counts as delivered.
pub fn check_status(status: u16) -> Result<(), ContactError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ContactError::Rejected(status))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(ContactError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    message: ContactMessage,
    status: SubmitStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: ContactField) -> &str {
        self.message.get(field)
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        *self.message.get_mut(field) = value.into();
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn is_sending(&self) -> bool {
        self.status == SubmitStatus::Sending
    }

    pub fn is_empty(&self) -> bool {
        ContactField::all()
            .iter()
            .all(|f| self.message.get(*f).is_empty())
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        for field in ContactField::all() {
            if self.message.get(field).trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        if !is_plausible_email(self.message.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }

    /// Validate and mark the form in flight. Returns the body to send.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, ContactError> {
        if self.is_sending() {
            return Err(ContactError::InFlight);
        }
        if let Err(err) = self.validate() {
            self.status = SubmitStatus::Failed(err.clone());
            return Err(err);
        }
        self.status = SubmitStatus::Sending;
        Ok(self.message.clone())
    }

    /// Record the relay outcome. Success clears the fields; failure keeps them.
    pub fn complete(&mut self, outcome: Result<(), ContactError>) {
        match outcome {
            Ok(()) => {
                self.message = ContactMessage::default();
                self.status = SubmitStatus::Sent;
            }
            Err(err) => {
                self.status = SubmitStatus::Failed(err);
            }
        }
    }

    /// Translation key of the banner to show, if any.
    pub fn status_key(&self) -> Option<&'static str> {
        match &self.status {
            SubmitStatus::Idle | SubmitStatus::Sending => None,
            SubmitStatus::Sent => Some("contact.success"),
            SubmitStatus::Failed(err) if err.is_delivery_failure() => Some("contact.error"),
            SubmitStatus::Failed(_) => Some("contact.error.invalid"),
        }
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

/// Outbound channel to the form relay.
#[async_trait(?Send)]
pub trait ContactTransport {
    async fn send(&self, message: &ContactMessage) -> Result<(), ContactError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct StatusTransport {
        status: u16,
        sent: RefCell<Vec<ContactMessage>>,
    }

    impl StatusTransport {
        fn new(status: u16) -> Self {
            Self {
                status,
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl ContactTransport for StatusTransport {
        async fn send(&self, message: &ContactMessage) -> Result<(), ContactError> {
            self.sent.borrow_mut().push(message.clone());
            check_status(self.status)
        }
    }

    struct OfflineTransport;

    #[async_trait(?Send)]
    impl ContactTransport for OfflineTransport {
        async fn send(&self, _message: &ContactMessage) -> Result<(), ContactError> {
            Err(ContactError::Transport("network unreachable".to_string()))
        }
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(ContactField::Name, "Ada");
        form.set_field(ContactField::Email, "ada@example.com");
        form.set_field(ContactField::Subject, "Hello");
        form.set_field(ContactField::Message, "Let's build a game.");
        form
    }

    async fn submit<T: ContactTransport>(form: &mut ContactForm, transport: &T) {
        let message = form.begin_submit().unwrap();
        let outcome = transport.send(&message).await;
        form.complete(outcome);
    }

    #[tokio::test]
    async fn test_success_clears_form() {
        let transport = StatusTransport::new(200);
        let mut form = filled_form();

        submit(&mut form, &transport).await;

        assert!(form.is_empty());
        assert_eq!(form.status(), &SubmitStatus::Sent);
        assert_eq!(form.status_key(), Some("contact.success"));

        let sent = transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_server_error_keeps_fields() {
        let transport = StatusTransport::new(500);
        let mut form = filled_form();

        submit(&mut form, &transport).await;

        assert_eq!(form.field(ContactField::Name), "Ada");
        assert_eq!(form.field(ContactField::Message), "Let's build a game.");
        assert_eq!(
            form.status(),
            &SubmitStatus::Failed(ContactError::Rejected(500))
        );
        assert_eq!(form.status_key(), Some("contact.error"));
    }

    #[tokio::test]
    async fn test_transport_failure_same_message() {
        let mut form = filled_form();

        submit(&mut form, &OfflineTransport).await;

        assert!(!form.is_empty());
        assert_eq!(form.status_key(), Some("contact.error"));
    }

    #[test]
    fn test_single_flight_guard() {
        let mut form = filled_form();
        assert!(form.begin_submit().is_ok());
        assert!(form.is_sending());
        assert_eq!(form.begin_submit(), Err(ContactError::InFlight));

        form.complete(Err(ContactError::Rejected(503)));
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn test_validation() {
        let mut form = filled_form();
        form.set_field(ContactField::Subject, "   ");
        assert_eq!(
            form.begin_submit(),
            Err(ContactError::MissingField(ContactField::Subject))
        );
        assert_eq!(form.status_key(), Some("contact.error.invalid"));
        assert!(!form.is_sending());

        form.set_field(ContactField::Subject, "Hi");
        form.set_field(ContactField::Email, "not-an-email");
        assert_eq!(form.validate(), Err(ContactError::InvalidEmail));

        form.set_field(ContactField::Email, "a@b");
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_check_status() {
        assert_eq!(check_status(200), Ok(()));
        assert_eq!(check_status(204), Ok(()));
        assert_eq!(check_status(302), Err(ContactError::Rejected(302)));
        assert_eq!(check_status(422), Err(ContactError::Rejected(422)));
    }

    #[test]
    fn test_message_json_shape() {
        let body = serde_json::to_value(filled_form().begin_submit().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "subject": "Hello",
                "message": "Let's build a game.",
            })
        );
    }
}
