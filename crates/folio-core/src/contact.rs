//! Contact form submission.
//!
//! The form never delivers mail itself. It hands the message to an
//! [`EmailRelay`] (the third-party widget in the page) and reports the
//! outcome in a status banner that hides itself after a fixed delay.
//!
//! A submission has two halves so the UI can release its state borrow
//! while the relay call is in flight:
//!
//! ```ignore
//! let message = form.begin()?;                      // disables the button
//! let outcome = deliver(relay.as_ref(), &config.relay, &message).await;
//! form.settle(outcome, clock.now());                // status + re-enable
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::RelayConfig;
use crate::error::{FolioError, FolioResult};
use crate::timer::{Clock, Deadline};

pub const SUBMIT_LABEL: &str = "Send Message";
pub const PENDING_LABEL: &str = "Sending...";

const SENT_MESSAGE: &str = "✅ Message sent successfully!";
const FAILED_MESSAGE: &str = "❌ Failed to send message. Please try again later.";
const NOT_LOADED_MESSAGE: &str = "❌ EmailJS not loaded.";

/// Fields of the contact form
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
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

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }
}

/// Why the relay did not deliver a message
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    /// The widget script is missing or never initialised
    #[error("Email relay not loaded")]
    NotLoaded,

    /// The widget reported a failure
    #[error("Email relay delivery failed: {0}")]
    Delivery(String),
}

/// Client-side email delivery service
#[allow(async_fn_in_trait)]
pub trait EmailRelay {
    async fn send_form(&self, config: &RelayConfig, form: &ContactMessage) -> Result<(), RelayError>;
}

/// Send through `relay`; an absent relay fails immediately
pub async fn deliver<R: EmailRelay>(
    relay: Option<&R>,
    config: &RelayConfig,
    form: &ContactMessage,
) -> Result<(), RelayError> {
    match relay {
        Some(relay) => relay.send_form(config, form).await,
        None => Err(RelayError::NotLoaded),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormStatus {
    pub message: String,
    pub kind: StatusKind,
}

/// A status message with its own hide deadline.
///
/// Showing a new status replaces the old one and its deadline, so a timer
/// armed for the old status can no longer hide the new one.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusBanner {
    hide_after: Duration,
    shown: Option<(FormStatus, Deadline)>,
}

impl StatusBanner {
    pub fn new(hide_after: Duration) -> Self {
        Self {
            hide_after,
            shown: None,
        }
    }

    pub fn show(&mut self, status: FormStatus, now: Duration) {
        self.shown = Some((status, Deadline::after(self.hide_after, now)));
    }

    pub fn current(&self) -> Option<&FormStatus> {
        self.shown.as_ref().map(|(status, _)| status)
    }

    pub fn hide_at(&self) -> Option<Duration> {
        self.shown.as_ref().map(|(_, deadline)| deadline.at())
    }

    /// Hide the status if its deadline has passed; returns true if hidden now
    pub fn tick(&mut self, now: Duration) -> bool {
        match &self.shown {
            Some((_, deadline)) if deadline.is_due(now) => {
                self.shown = None;
                true
            }
            _ => false,
        }
    }
}

/// State of the submit control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitButton {
    pub disabled: bool,
    pub label: &'static str,
}

/// Contact form controller
#[derive(Debug, Clone, PartialEq)]
pub struct ContactForm {
    fields: ContactMessage,
    pending: bool,
    banner: StatusBanner,
}

impl ContactForm {
    pub fn new(status_hide: Duration) -> Self {
        Self {
            fields: ContactMessage::default(),
            pending: false,
            banner: StatusBanner::new(status_hide),
        }
    }

    pub fn fields(&self) -> &ContactMessage {
        &self.fields
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn submit_button(&self) -> SubmitButton {
        if self.pending {
            SubmitButton {
                disabled: true,
                label: PENDING_LABEL,
            }
        } else {
            SubmitButton {
                disabled: false,
                label: SUBMIT_LABEL,
            }
        }
    }

    pub fn status(&self) -> Option<&FormStatus> {
        self.banner.current()
    }

    pub fn status_hide_at(&self) -> Option<Duration> {
        self.banner.hide_at()
    }

    /// Start a submission: disable the control and snapshot the fields
    pub fn begin(&mut self) -> FolioResult<ContactMessage> {
        if self.pending {
            return Err(FolioError::SubmissionPending);
        }
        self.pending = true;
        Ok(self.fields.clone())
    }

    /// Finish a submission with the relay's outcome.
    ///
    /// Success clears the fields; failure keeps them for a retry. The
    /// control is re-enabled either way.
    pub fn settle(&mut self, outcome: Result<(), RelayError>, now: Duration) -> StatusKind {
        self.pending = false;
        let status = match outcome {
            Ok(()) => {
                tracing::info!("Contact message sent");
                self.fields = ContactMessage::default();
                FormStatus {
                    message: SENT_MESSAGE.to_string(),
                    kind: StatusKind::Success,
                }
            }
            Err(RelayError::NotLoaded) => {
                tracing::warn!("Contact form submitted but the email relay is not loaded");
                FormStatus {
                    message: NOT_LOADED_MESSAGE.to_string(),
                    kind: StatusKind::Error,
                }
            }
            Err(e) => {
                tracing::error!("Contact message delivery failed: {}", e);
                FormStatus {
                    message: FAILED_MESSAGE.to_string(),
                    kind: StatusKind::Error,
                }
            }
        };
        let kind = status.kind;
        self.banner.show(status, now);
        kind
    }

    /// Hide an expired status; returns true if it was hidden now
    pub fn tick(&mut self, now: Duration) -> bool {
        self.banner.tick(now)
    }

    /// Full submission in one call, for callers that can hold the form
    /// across the relay await
    pub async fn submit<R, C>(
        &mut self,
        relay: Option<&R>,
        config: &RelayConfig,
        clock: &C,
    ) -> FolioResult<StatusKind>
    where
        R: EmailRelay,
        C: Clock,
    {
        let message = self.begin()?;
        let outcome = deliver(relay, config, &message).await;
        Ok(self.settle(outcome, clock.now()))
    }
}
