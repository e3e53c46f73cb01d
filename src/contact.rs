use log::{debug, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Object;
use web_sys::{Document, FormData, HtmlFormElement, Window};

use crate::dom;

const CONTACT_FORM: &str = "#contact-form";

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! We will get back to you soon.";

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Fields read from the contact form at submit time. Anything else the
/// form posts is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactSubmission {
    pub first_name: String,
    pub email: String,
    pub message: String,
}

/// Why a submission was refused. The display text is shown to the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Please fill in all required fields.")]
    MissingRequiredFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

impl ContactSubmission {
    /// Stops at the first failing rule.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.first_name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return Err(ContactError::MissingRequiredFields);
        }
        if !is_valid_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}

fn read_submission(form: &HtmlFormElement) -> Result<ContactSubmission, JsValue> {
    let data = FormData::new_with_form(form)?;
    let entries = Object::from_entries(&data)?;
    Ok(serde_wasm_bindgen::from_value(entries.into())?)
}

fn handle_submit(window: &Window, form: &HtmlFormElement) {
    let submission = match read_submission(form) {
        Ok(submission) => submission,
        Err(err) => {
            warn!("Could not read contact form: {:?}", err);
            return;
        }
    };

    match submission.validate() {
        Ok(()) => {
            info!("Contact form accepted");
            let _ = window.alert_with_message(SUCCESS_MESSAGE);
            form.reset();
        }
        Err(err) => {
            info!("Contact form rejected: {:?}", err);
            let _ = window.alert_with_message(&err.to_string());
        }
    }
}

/// Validates the contact form locally on submit. Nothing is sent anywhere;
/// the visitor gets an alert and, on success, a cleared form.
pub fn setup(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(form) = document
        .query_selector(CONTACT_FORM)?
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        debug!("No contact form on this page");
        return Ok(());
    };

    let win = window.clone();
    let form_el = form.clone();
    dom::listen(&form, "submit", move |event| {
        event.prevent_default();
        handle_submit(&win, &form_el);
    })?;

    info!("Contact form wired");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(first_name: &str, email: &str, message: &str) -> ContactSubmission {
        ContactSubmission {
            first_name: first_name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.co"));
        assert!(!is_valid_email("ab.co"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("a@b .co"));
    }

    #[test]
    fn complete_submission_passes() {
        assert_eq!(submission("Ada", "ada@example.com", "Hello").validate(), Ok(()));
    }

    #[test]
    fn any_empty_required_field_blocks() {
        let cases = [
            submission("", "ada@example.com", "Hello"),
            submission("Ada", "", "Hello"),
            submission("Ada", "ada@example.com", ""),
        ];
        for case in cases {
            assert_eq!(case.validate(), Err(ContactError::MissingRequiredFields));
        }
    }

    #[test]
    fn missing_fields_checked_before_email_format() {
        assert_eq!(
            submission("", "not-an-email", "Hello").validate(),
            Err(ContactError::MissingRequiredFields)
        );
        assert_eq!(
            submission("Ada", "not-an-email", "Hello").validate(),
            Err(ContactError::InvalidEmail)
        );
    }

    #[test]
    fn whitespace_counts_as_filled() {
        assert_eq!(submission(" ", "a@b.co", " ").validate(), Ok(()));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ContactError::MissingRequiredFields.to_string(),
            "Please fill in all required fields."
        );
        assert_eq!(
            ContactError::InvalidEmail.to_string(),
            "Please enter a valid email address."
        );
    }

    #[test]
    fn deserializes_form_entries() {
        let parsed: ContactSubmission = serde_json::from_value(serde_json::json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "message": "Hello",
        }))
        .unwrap();
        assert_eq!(parsed, submission("Ada", "ada@example.com", "Hello"));
    }

    #[test]
    fn absent_fields_default_to_empty() {
        let parsed: ContactSubmission =
            serde_json::from_value(serde_json::json!({ "email": "ada@example.com" })).unwrap();
        assert_eq!(parsed.validate(), Err(ContactError::MissingRequiredFields));
    }
}
