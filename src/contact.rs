use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::relay::EmailRelay;

/// What gets handed to the relay. Field names double as the template params.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown contact field: {0}")]
pub struct ContactFieldError(pub String);

impl FromStr for ContactField {
    type Err = ContactFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "message" => Ok(Self::Message),
            other => Err(ContactFieldError(other.to_string())),
        }
    }
}

impl ContactField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormState {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    pub fn to_payload(&self) -> ContactPayload {
        ContactPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        }
    }
}

/// Contact modal state: visibility plus the form it holds.
///
/// The modal closes and the form resets as soon as the user submits or
/// cancels. Delivery happens afterwards and never feeds back into this state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    visible: bool,
    form: FormState,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.visible
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn open_modal(&mut self) {
        self.visible = true;
    }

    /// Merges a single field update keyed by the input's `name` attribute.
    pub fn update_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), ContactFieldError> {
        let field = name.parse::<ContactField>()?;
        self.form.set(field, value);
        Ok(())
    }

    pub fn cancel(&mut self) {
        self.close();
    }

    /// Snapshots the form for sending, then closes and resets.
    pub fn submit(&mut self) -> ContactPayload {
        let payload = self.form.to_payload();
        self.close();
        payload
    }

    /// Submits with a relay resolved by the caller beforehand, since closing
    /// the modal tears down whatever owned it. Without a relay the modal
    /// still closes and resets, and nothing is sent.
    pub fn submit_to<R>(&mut self, relay: Option<R>) -> Option<(R, ContactPayload)> {
        let payload = self.submit();
        relay.map(|relay| (relay, payload))
    }

    fn close(&mut self) {
        self.visible = false;
        self.form.clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Sent,
    Failed,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::Sent => "Message sent successfully!",
            Notice::Failed => "Failed to send message. Please try again.",
        }
    }
}

/// Sends once and reports which notice to show. No retries.
pub async fn deliver<R: EmailRelay>(relay: &R, payload: ContactPayload) -> Notice {
    match relay.send(&payload).await {
        Ok(receipt) => {
            log::info!("Email sent successfully: {}", receipt.text);
            Notice::Sent
        }
        Err(err) => {
            log::error!("Email sending failed: {err}");
            Notice::Failed
        }
    }
}
