use std::time::Duration;

use tokio::time::sleep;
use tracing::debug;

use crate::core::FolioError;

pub const SUBMIT_DELAY: Duration = Duration::from_secs(1);
pub const ACKNOWLEDGEMENT: &str = "Thank you for your message! I will get back to you soon.";
pub const SEND_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Input names, in form order.
    pub const FIELDS: [&'static str; 3] = ["name", "email", "message"];

    pub fn validate(&self) -> Result<(), FolioError> {
        for (field, value) in Self::FIELDS.into_iter().zip([&self.name, &self.email, &self.message]) {
            if value.trim().is_empty() {
                return Err(FolioError::MissingField(field));
            }
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// The contact form. Submissions go nowhere: after a fixed delay the fields
/// are cleared and the visitor is thanked.
#[derive(Debug, Default)]
pub struct ContactFormState {
    pub form: ContactForm,
    sending: bool,
}

impl ContactFormState {
    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub fn button_label(&self) -> &'static str {
        if self.sending {
            SENDING_LABEL
        } else {
            SEND_LABEL
        }
    }

    pub async fn submit(&mut self) -> Result<&'static str, FolioError> {
        self.form.validate()?;

        self.sending = true;
        debug!("Contact form submitted, discarding after {:?}", SUBMIT_DELAY);
        sleep(SUBMIT_DELAY).await;

        self.form = ContactForm::default();
        self.sending = false;
        Ok(ACKNOWLEDGEMENT)
    }
}

#[cfg(test)]
mod tests {
    use tokio::time::Instant;

    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn submit_waits_then_clears() {
        let mut state = ContactFormState { form: filled(), ..Default::default() };
        let started = Instant::now();

        let ack = state.submit().await.unwrap();

        assert_eq!(ack, ACKNOWLEDGEMENT);
        assert!(started.elapsed() >= SUBMIT_DELAY);
        assert!(state.form.is_empty());
        assert!(!state.is_sending());
        assert_eq!(state.button_label(), "Send Message");
    }

    #[tokio::test(start_paused = true)]
    async fn blank_fields_are_rejected_before_waiting() {
        let mut state = ContactFormState {
            form: ContactForm { email: "  ".to_string(), ..filled() },
            ..Default::default()
        };
        let started = Instant::now();

        let err = state.submit().await.unwrap_err();

        assert!(matches!(err, FolioError::MissingField("email")));
        assert!(started.elapsed() < SUBMIT_DELAY);
        assert_eq!(state.form.name, "Ada");
    }
}
