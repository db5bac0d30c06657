// Core types for the registration flow - no dioxus imports needed here
use serde::{Deserialize, Serialize};

use super::confetti::ConfettiParticle;
use super::countdown::CountdownState;

/// Label of the submit button when a submission can be made
pub const SUBMIT_LABEL: &str = "S'inscrire";

/// Label of the submit button while a submission is in flight
pub const SUBMITTING_LABEL: &str = "Inscription en cours...";

/// Student code used when the server omits one
pub const UNKNOWN_STUDENT_CODE: &str = "N/A";

/// Raw values of the registration form, exactly as typed
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: String,
}

impl RegistrationForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Body of `POST /api/register`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RegistrationInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub birth_date: Option<String>,
}

/// JSON reply of the registration endpoint
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RegisterResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub student_code: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl RegisterResponse {
    /// Converts the wire reply into the outcome the page reacts to
    pub fn into_result(self, fallback_error: &str) -> RegistrationResult {
        if self.success {
            RegistrationResult::Success {
                message: self.message.unwrap_or_default(),
                student_code: self
                    .student_code
                    .unwrap_or_else(|| UNKNOWN_STUDENT_CODE.to_string()),
            }
        } else {
            RegistrationResult::Failure {
                error: self
                    .error
                    .filter(|e| !e.trim().is_empty())
                    .unwrap_or_else(|| fallback_error.to_string()),
            }
        }
    }
}

/// Outcome of one submission
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RegistrationResult {
    Success { message: String, student_code: String },
    Failure { error: String },
}

impl RegistrationResult {
    pub fn failure(error: impl Into<String>) -> Self {
        RegistrationResult::Failure {
            error: error.into(),
        }
    }
}

/// Where a submission cycle currently stands
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FlowPhase {
    #[default]
    Idle,
    Submitting,
    Counting,
    Redirected,
}

/// What the message container shows
#[derive(Clone, PartialEq, Debug, Default)]
pub enum FeedbackPanel {
    #[default]
    Hidden,
    Error {
        message: String,
        generation: u64,
    },
    Success {
        message: String,
        student_code: String,
    },
}

impl FeedbackPanel {
    pub fn is_visible(&self) -> bool {
        !matches!(self, FeedbackPanel::Hidden)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, FeedbackPanel::Error { .. })
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Phone,
    BirthDate,
}

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum RegistrationAction {
    SetField(FormField, String),
    ResetForm,

    SubmitStarted,
    SubmitFailed,

    ShowError(String),
    /// Hides the error panel if it still shows the error with this generation
    DismissError(u64),
    InputFocused,
    ShowSuccess {
        message: String,
        student_code: String,
    },

    UpdateCountdown(CountdownState),
    Redirected,

    AddParticles(Vec<ConfettiParticle>),
    RemoveParticle(u64),

    SetLogoFailed(bool),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistrationState {
    pub form: RegistrationForm,
    pub phase: FlowPhase,
    pub submit_disabled: bool,
    pub feedback: FeedbackPanel,
    pub countdown: Option<CountdownState>,
    pub particles: Vec<ConfettiParticle>,
    pub logo_failed: bool,
    /// Bumped every time an error panel is shown
    pub error_generation: u64,
    pub next_particle_id: u64,
}

impl RegistrationState {
    pub fn reduce(mut self, action: RegistrationAction) -> Self {
        self.reduce_in_place(action);
        self
    }

    pub fn reduce_in_place(&mut self, action: RegistrationAction) {
        match action {
            RegistrationAction::SetField(field, value) => match field {
                FormField::FirstName => self.form.first_name = value,
                FormField::LastName => self.form.last_name = value,
                FormField::Email => self.form.email = value,
                FormField::Phone => self.form.phone = value,
                FormField::BirthDate => self.form.birth_date = value,
            },
            RegistrationAction::ResetForm => {
                self.form.reset();
            }

            RegistrationAction::SubmitStarted => {
                self.phase = FlowPhase::Submitting;
                self.submit_disabled = true;
            }
            RegistrationAction::SubmitFailed => {
                self.phase = FlowPhase::Idle;
                self.submit_disabled = false;
            }

            RegistrationAction::ShowError(message) => {
                self.error_generation += 1;
                self.feedback = FeedbackPanel::Error {
                    message,
                    generation: self.error_generation,
                };
            }
            RegistrationAction::DismissError(generation) => {
                if matches!(&self.feedback, FeedbackPanel::Error { generation: g, .. } if *g == generation)
                {
                    self.feedback = FeedbackPanel::Hidden;
                }
            }
            RegistrationAction::InputFocused => {
                if self.feedback.is_error() {
                    self.feedback = FeedbackPanel::Hidden;
                }
            }
            RegistrationAction::ShowSuccess {
                message,
                student_code,
            } => {
                self.feedback = FeedbackPanel::Success {
                    message,
                    student_code,
                };
            }

            RegistrationAction::UpdateCountdown(countdown) => {
                self.phase = FlowPhase::Counting;
                self.countdown = Some(countdown);
            }
            RegistrationAction::Redirected => {
                self.phase = FlowPhase::Redirected;
            }

            RegistrationAction::AddParticles(particles) => {
                if let Some(max_id) = particles.iter().map(|p| p.id).max() {
                    self.next_particle_id = self.next_particle_id.max(max_id + 1);
                }
                self.particles.extend(particles);
            }
            RegistrationAction::RemoveParticle(id) => {
                self.particles.retain(|p| p.id != id);
            }

            RegistrationAction::SetLogoFailed(failed) => {
                self.logo_failed = failed;
            }
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submit_disabled {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn countdown_remaining(&self) -> Option<u32> {
        self.countdown.map(|c| c.remaining())
    }
}
