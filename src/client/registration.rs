use crate::client::api::DonorGateway;
use crate::client::dialog::Dialog;
use crate::client::form::DonorForm;
use crate::domain::donors::timestamp_id;
use std::time::{Duration, Instant};

/// How long the registration confirmation stays on screen.
pub const CONFIRMATION_VISIBLE_FOR: Duration = Duration::from_secs(3);

pub const REGISTRATION_CONFIRMED: &str = "Registration successful. Thank you for signing up as a donor!";
pub const REGISTRATION_FAILED: &str = "Donor registration failed. Please try again.";

/// A message that hides itself after a fixed time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    shown_at: Instant,
    visible_for: Duration,
}

impl Notice {
    pub fn new(message: impl Into<String>, shown_at: Instant, visible_for: Duration) -> Self {
        Self {
            message: message.into(),
            shown_at,
            visible_for,
        }
    }

    pub fn is_visible_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) < self.visible_for
    }
}

/// Public registration page.
#[derive(Debug, Default)]
pub struct RegistrationPage {
    pub form: DonorForm,
    notice: Option<Notice>,
}

impl RegistrationPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit the form as a new, unverified donor with a provisional
    /// timestamp id. The server may replace the id.
    ///
    /// On success the form is cleared and a confirmation shown; on failure
    /// the user gets an alert and the form keeps its contents.
    pub async fn submit(&mut self, gateway: &dyn DonorGateway, dialog: &mut dyn Dialog) -> bool {
        let mut payload = self.form.to_payload(Some(timestamp_id()));
        payload.is_verified = false;

        match gateway.create(&payload).await {
            Some(donor) => {
                tracing::debug!("Registered donor {}", donor.id);
                self.form.clear();
                self.notice = Some(Notice::new(
                    REGISTRATION_CONFIRMED,
                    Instant::now(),
                    CONFIRMATION_VISIBLE_FOR,
                ));
                true
            }
            None => {
                dialog.alert(REGISTRATION_FAILED);
                false
            }
        }
    }

    /// The confirmation, if it is still within its display window.
    pub fn notice_at(&self, now: Instant) -> Option<&Notice> {
        self.notice.as_ref().filter(|n| n.is_visible_at(now))
    }
}
