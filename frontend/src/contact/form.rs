use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Project,
    Message,
}

impl Field {
    pub fn from_name(name: &str) -> Option<Field> {
        match name {
            "name" => Some(Field::Name),
            "email" => Some(Field::Email),
            "phone" => Some(Field::Phone),
            "project" => Some(Field::Project),
            "message" => Some(Field::Message),
            _ => None,
        }
    }
}

/// A rejected field together with the translation key of its message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message_key: &'static str,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub project: String,
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Project => self.project = value,
            Field::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError {
                field: Field::Name,
                message_key: "contact.validation.name",
            });
        }
        if !is_plausible_email(self.email.trim()) {
            errors.push(FieldError {
                field: Field::Email,
                message_key: "contact.validation.email",
            });
        }
        if !self.phone.trim().is_empty() && !is_plausible_phone(self.phone.trim()) {
            errors.push(FieldError {
                field: Field::Phone,
                message_key: "contact.validation.phone",
            });
        }
        if self.message.trim().is_empty() {
            errors.push(FieldError {
                field: Field::Message,
                message_key: "contact.validation.message",
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Copy with surrounding whitespace removed, as sent to the endpoint.
    pub fn trimmed(&self) -> ContactForm {
        ContactForm {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            project: self.project.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    /// `mailto:` link carrying the form contents, for when posting fails.
    pub fn mailto_link(&self, to: &str) -> String {
        let subject = if self.project.is_empty() {
            format!("Contact from {}", self.name.trim())
        } else {
            format!("Contact from {} ({})", self.name.trim(), self.project)
        };
        let mut body = self.message.trim().to_string();
        if !self.phone.trim().is_empty() {
            body.push_str(&format!("\n\nPhone: {}", self.phone.trim()));
        }
        format!(
            "mailto:{}?subject={}&body={}",
            to,
            urlencoding::encode(&subject),
            urlencoding::encode(&body)
        )
    }
}

fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain.contains('.')
        && !email.chars().any(char::is_whitespace)
}

fn is_plausible_phone(phone: &str) -> bool {
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    (7..=15).contains(&digits)
        && phone
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Dana Levi".into(),
            email: "dana@example.com".into(),
            phone: "".into(),
            project: "estimates".into(),
            message: "Tender for a school".into(),
        }
    }

    #[test]
    fn complete_form_passes() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn required_fields_are_reported_together() {
        let errors = ContactForm::default().validate().unwrap_err();
        let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![Field::Name, Field::Email, Field::Message]);
    }

    #[test]
    fn rejects_malformed_email_and_phone() {
        let mut form = filled();
        form.email = "dana@localhost".into();
        form.phone = "call me".into();
        let fields: Vec<Field> = form.validate().unwrap_err().iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![Field::Email, Field::Phone]);
    }

    #[test]
    fn accepts_international_phone() {
        let mut form = filled();
        form.phone = "+972 (50) 123-4567".into();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn mailto_encodes_subject_and_body() {
        let mut form = filled();
        form.phone = "050-1234567".into();
        let link = form.mailto_link("office@example.com");
        assert_eq!(
            link,
            "mailto:office@example.com?subject=Contact%20from%20Dana%20Levi%20%28estimates%29&body=Tender%20for%20a%20school%0A%0APhone%3A%20050-1234567"
        );
    }

    #[test]
    fn set_routes_by_field_name() {
        let mut form = ContactForm::default();
        form.set(Field::from_name("project").unwrap(), "other".into());
        assert_eq!(form.project, "other");
        assert_eq!(Field::from_name("company"), None);
    }
}
