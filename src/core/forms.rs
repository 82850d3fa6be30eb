//! Newsletter and contact form validation
//!
//! Both checks are deliberately shallow: the newsletter only requires an `@`, the contact
//! form only requires non-empty fields. Nothing is sent anywhere.

/// Rejection reasons. `Display` is the text shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Please fill in all fields before submitting.")]
    MissingFields,
}

pub const NEWSLETTER_THANKS: &str = "Thank you for subscribing to our newsletter!";

/// Values submitted through the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Confirmation text addressed to the sender.
    pub fn thanks(&self) -> String {
        format!(
            "Thank you for your message, {}! We'll get back to you soon.",
            self.name
        )
    }
}

pub fn validate_newsletter(email: &str) -> Result<(), FormError> {
    if !email.is_empty() && email.contains('@') {
        Ok(())
    } else {
        Err(FormError::InvalidEmail)
    }
}

pub fn validate_contact(submission: &ContactSubmission) -> Result<(), FormError> {
    let ContactSubmission {
        name,
        email,
        message,
    } = submission;

    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Err(FormError::MissingFields);
    }
    Ok(())
}
