use thiserror::Error;

/// Message shown when the request could not be sent or its reply not understood
pub const GENERIC_FAILURE_MESSAGE: &str = "Une erreur s'est produite. Veuillez réessayer.";

/// Message shown when a required field is left blank
pub const REQUIRED_FIELDS_MESSAGE: &str = "Les champs Prénom, Nom et Email sont obligatoires";

/// Message shown when the email field does not look like an address
pub const INVALID_EMAIL_MESSAGE: &str = "Veuillez saisir une adresse email valide";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum RegistrationError {
    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Failed to decode registration response: {message}")]
    Decode { message: String },

    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },

    #[error("Navigation to {target} failed: {message}")]
    Navigation { target: String, message: String },
}

pub type ClientResult<T> = Result<T, RegistrationError>;

impl RegistrationError {
    pub fn network(message: impl Into<String>) -> Self {
        RegistrationError::Network {
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        RegistrationError::Decode {
            message: message.into(),
        }
    }

    pub fn validation(field: &str, message: &str) -> Self {
        RegistrationError::Validation {
            field: field.to_string(),
            message: message.to_string(),
        }
    }

    /// Text displayed in the error panel for this failure
    pub fn user_message(&self) -> String {
        match self {
            RegistrationError::Validation { message, .. } => message.clone(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl From<serde_json::Error> for RegistrationError {
    fn from(error: serde_json::Error) -> Self {
        RegistrationError::decode(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_errors_use_generic_message() {
        let network = RegistrationError::network("connection refused");
        assert_eq!(network.user_message(), GENERIC_FAILURE_MESSAGE);

        let decode = RegistrationError::decode("expected value at line 1");
        assert_eq!(decode.user_message(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn test_validation_error_keeps_its_message() {
        let err = RegistrationError::validation("email", REQUIRED_FIELDS_MESSAGE);
        assert_eq!(err.user_message(), REQUIRED_FIELDS_MESSAGE);
        assert_eq!(
            err.to_string(),
            format!("Validation error: email - {}", REQUIRED_FIELDS_MESSAGE)
        );
    }

    #[test]
    fn test_serde_error_maps_to_decode() {
        let err: RegistrationError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, RegistrationError::Decode { .. }));
    }
}
