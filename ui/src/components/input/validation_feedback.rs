use crate::registration::EmailValidation;
use crate::services::errors::INVALID_EMAIL_MESSAGE;
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct EmailValidationFeedbackProps {
    pub validation: EmailValidation,
}

#[component]
pub fn EmailValidationFeedback(props: EmailValidationFeedbackProps) -> Element {
    match props.validation {
        EmailValidation::Invalid => rsx! {
            div {
                class: "validation-feedback invalid",
                "⚠ {INVALID_EMAIL_MESSAGE}"
            }
        },
        _ => rsx! {},
    }
}
