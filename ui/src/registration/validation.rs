use super::types::{RegistrationForm, RegistrationInput};
use crate::services::errors::{
    ClientResult, RegistrationError, INVALID_EMAIL_MESSAGE, REQUIRED_FIELDS_MESSAGE,
};

#[derive(Clone, PartialEq, Debug)]
pub enum EmailValidation {
    None,
    Valid,
    Invalid,
}

/// Trims a value and maps blank strings to `None`
fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl RegistrationForm {
    /// Builds the request body, rejecting blank required fields
    pub fn normalize(&self) -> ClientResult<RegistrationInput> {
        let first_name = self.first_name.trim();
        let last_name = self.last_name.trim();
        let email = self.email.trim();

        for (field, value) in [
            ("first_name", first_name),
            ("last_name", last_name),
            ("email", email),
        ] {
            if value.is_empty() {
                return Err(RegistrationError::validation(field, REQUIRED_FIELDS_MESSAGE));
            }
        }

        if self.validate_email() == EmailValidation::Invalid {
            return Err(RegistrationError::validation("email", INVALID_EMAIL_MESSAGE));
        }

        Ok(RegistrationInput {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            phone_number: optional(&self.phone),
            birth_date: optional(&self.birth_date),
        })
    }

    pub fn validate_email(&self) -> EmailValidation {
        let email = self.email.trim();
        if email.is_empty() {
            return EmailValidation::None;
        }

        // Same shape the browser enforces for type=email: one @, both sides non-empty
        match email.split_once('@') {
            Some((local, domain))
                if !local.is_empty()
                    && !domain.is_empty()
                    && !domain.contains('@')
                    && !email.contains(char::is_whitespace) =>
            {
                EmailValidation::Valid
            }
            _ => EmailValidation::Invalid,
        }
    }
}

pub fn email_validation_class(validation: &EmailValidation) -> &'static str {
    match validation {
        EmailValidation::Valid => "input-field input-valid",
        EmailValidation::Invalid => "input-field input-invalid",
        _ => "input-field",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RegistrationForm {
        RegistrationForm {
            first_name: "  Hana ".to_string(),
            last_name: "Sato".to_string(),
            email: " hana.sato@example.com ".to_string(),
            phone: "   ".to_string(),
            birth_date: "".to_string(),
        }
    }

    #[test]
    fn test_normalize_trims_and_drops_blank_optionals() {
        let input = filled().normalize().unwrap();
        assert_eq!(input.first_name, "Hana");
        assert_eq!(input.email, "hana.sato@example.com");
        assert_eq!(input.phone_number, None);
        assert_eq!(input.birth_date, None);

        let mut form = filled();
        form.phone = " 06 12 34 56 78 ".to_string();
        form.birth_date = "2001-04-02".to_string();
        let input = form.normalize().unwrap();
        assert_eq!(input.phone_number.as_deref(), Some("06 12 34 56 78"));
        assert_eq!(input.birth_date.as_deref(), Some("2001-04-02"));
    }

    #[test]
    fn test_blank_required_field_is_rejected() {
        let mut form = filled();
        form.last_name = "   ".to_string();

        let err = form.normalize().unwrap_err();
        assert_eq!(
            err,
            RegistrationError::validation("last_name", REQUIRED_FIELDS_MESSAGE)
        );
        assert_eq!(err.user_message(), REQUIRED_FIELDS_MESSAGE);
    }

    #[test]
    fn test_validate_email() {
        let mut form = RegistrationForm::default();
        assert_eq!(form.validate_email(), EmailValidation::None);

        for good in ["student@school.jp", "aiko@localhost"] {
            form.email = good.to_string();
            assert_eq!(form.validate_email(), EmailValidation::Valid, "{}", good);
        }

        for bad in ["student", "a@b@c.fr", "@school.jp", "student@", "stu dent@school.jp"] {
            form.email = bad.to_string();
            assert_eq!(form.validate_email(), EmailValidation::Invalid, "{}", bad);
        }
    }

    #[test]
    fn test_dotless_domain_is_accepted() {
        let mut form = filled();
        form.email = "aiko@localhost".to_string();
        assert_eq!(form.normalize().unwrap().email, "aiko@localhost");
    }

    #[test]
    fn test_malformed_email_blocks_submission() {
        let mut form = filled();
        form.email = "hana.sato".to_string();
        assert_eq!(
            form.normalize().unwrap_err().user_message(),
            INVALID_EMAIL_MESSAGE
        );
    }
}
