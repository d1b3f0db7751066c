use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use thiserror::Error;

use super::form::{ContactForm, FieldError};
use crate::config;

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("{} field(s) need attention", .0.len())]
    Validation(Vec<FieldError>),
    #[error("request failed: {0}")]
    Request(String),
    #[error("endpoint answered with status {0}")]
    Status(u16),
}

impl From<gloo_net::Error> for ContactError {
    fn from(e: gloo_net::Error) -> Self {
        ContactError::Request(e.to_string())
    }
}

/// Validates and posts the form. Without a configured endpoint the
/// submission is simulated with a short delay.
pub async fn submit(form: &ContactForm) -> Result<(), ContactError> {
    form.validate().map_err(ContactError::Validation)?;
    let payload = form.trimmed();

    let endpoint = config::get_contact_endpoint();
    if endpoint.is_empty() {
        log::info!("No contact endpoint configured, simulating submission");
        TimeoutFuture::new(config::SIMULATED_SUBMIT_MS).await;
        return Ok(());
    }

    let response = Request::post(endpoint)
        .header("Accept", "application/json")
        .json(&payload)?
        .send()
        .await?;

    if response.ok() {
        Ok(())
    } else {
        Err(ContactError::Status(response.status()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::form::Field;

    #[test]
    fn validation_error_counts_fields() {
        let err = ContactError::Validation(vec![
            FieldError {
                field: Field::Name,
                message_key: "contact.validation.name",
            },
            FieldError {
                field: Field::Email,
                message_key: "contact.validation.email",
            },
        ]);
        assert_eq!(err.to_string(), "2 field(s) need attention");
        assert_eq!(ContactError::Status(502).to_string(), "endpoint answered with status 502");
    }

    #[test]
    fn payload_serializes_field_names() {
        let form = ContactForm {
            name: " Dana ".into(),
            email: "dana@example.com".into(),
            ..ContactForm::default()
        };
        let json = serde_json::to_value(form.trimmed()).unwrap();
        assert_eq!(json["name"], "Dana");
        assert_eq!(json["phone"], "");
        assert!(json.get("message").is_some());
    }
}
