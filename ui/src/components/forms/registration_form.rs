//! Student registration form

use dioxus::prelude::*;

use crate::components::input::{EmailValidationFeedback, FormInput, InputType};
use crate::registration::{
    email_validation_class, FormField, RegistrationAction, RegistrationForm, RegistrationState,
};

#[derive(Props, PartialEq, Clone)]
pub struct RegistrationFormComponentProps {
    pub state: Signal<RegistrationState>,
    pub dispatch: EventHandler<RegistrationAction>,
    /// Called with the current field values when the form is submitted
    pub on_submit: EventHandler<RegistrationForm>,
    /// Called whenever any input gains focus
    pub on_focus: EventHandler<()>,
}

#[component]
pub fn RegistrationFormComponent(props: RegistrationFormComponentProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let on_focus = props.on_focus;
    let on_submit = props.on_submit;

    let fields = state().form;
    let email_validation = fields.validate_email();

    rsx! {
        form {
            id: "registrationForm",
            class: "registration-form",
            onsubmit: move |event: FormEvent| {
                event.prevent_default();
                on_submit.call(state.read().form.clone());
            },

            div {
                class: "form-row",
                FormInput {
                    id: "firstName".to_string(),
                    label: "Prénom".to_string(),
                    value: fields.first_name.clone(),
                    placeholder: "Votre prénom".to_string(),
                    input_type: InputType::Text,
                    required: true,
                    on_change: move |value: String| {
                        dispatch.call(RegistrationAction::SetField(FormField::FirstName, value));
                    },
                    on_focus: move |_| on_focus.call(())
                }
                FormInput {
                    id: "lastName".to_string(),
                    label: "Nom".to_string(),
                    value: fields.last_name.clone(),
                    placeholder: "Votre nom".to_string(),
                    input_type: InputType::Text,
                    required: true,
                    on_change: move |value: String| {
                        dispatch.call(RegistrationAction::SetField(FormField::LastName, value));
                    },
                    on_focus: move |_| on_focus.call(())
                }
            }

            FormInput {
                id: "email".to_string(),
                label: "Email".to_string(),
                value: fields.email.clone(),
                placeholder: "prenom.nom@exemple.com".to_string(),
                input_type: InputType::Email,
                input_class: email_validation_class(&email_validation).to_string(),
                required: true,
                on_change: move |value: String| {
                    dispatch.call(RegistrationAction::SetField(FormField::Email, value));
                },
                on_focus: move |_| on_focus.call(())
            }
            EmailValidationFeedback { validation: email_validation }

            div {
                class: "form-row",
                FormInput {
                    id: "phone".to_string(),
                    label: "Téléphone".to_string(),
                    value: fields.phone.clone(),
                    placeholder: "Optionnel".to_string(),
                    input_type: InputType::Tel,
                    on_change: move |value: String| {
                        dispatch.call(RegistrationAction::SetField(FormField::Phone, value));
                    },
                    on_focus: move |_| on_focus.call(())
                }
                FormInput {
                    id: "birthDate".to_string(),
                    label: "Date de naissance".to_string(),
                    value: fields.birth_date.clone(),
                    input_type: InputType::Date,
                    on_change: move |value: String| {
                        dispatch.call(RegistrationAction::SetField(FormField::BirthDate, value));
                    },
                    on_focus: move |_| on_focus.call(())
                }
            }

            button {
                r#type: "submit",
                class: "submit-button",
                disabled: state().submit_disabled,
                "{state().submit_label()}"
            }
        }
    }
}
