//! Registration flow controller
//!
//! One `RegistrationFlow` is built per page load. It owns the collaborators
//! the flow needs (API client, timer, browser) and drives the state machine
//!
//! ```text
//! Idle -> Submitting -> Success -> Counting(5..0) -> Redirected
//!                    \-> Failure -> Idle (after timeout or refocus)
//! ```
//!
//! All state changes go through a `FlowStore` as `RegistrationAction`s, so the
//! page only has to render `RegistrationState`.

use std::rc::Rc;

use tracing::{debug, error, info, warn};

use super::confetti::ConfettiParticle;
use super::countdown::CountdownState;
use super::types::{
    RegistrationAction, RegistrationForm, RegistrationInput, RegistrationResult, RegistrationState,
};
use crate::services::browser::Browser;
use crate::services::client::RegistrationApi;
use crate::services::config::RegistrationConfig;
use crate::services::errors::GENERIC_FAILURE_MESSAGE;
use crate::services::timer::Timer;

/// Where the flow reads and writes page state
pub trait FlowStore {
    fn dispatch(&self, action: RegistrationAction);

    fn snapshot(&self) -> RegistrationState;
}

#[derive(Clone)]
pub struct RegistrationFlow {
    store: Rc<dyn FlowStore>,
    api: Rc<dyn RegistrationApi>,
    timer: Rc<dyn Timer>,
    browser: Rc<dyn Browser>,
    config: RegistrationConfig,
}

impl RegistrationFlow {
    pub fn new(
        store: Rc<dyn FlowStore>,
        api: Rc<dyn RegistrationApi>,
        timer: Rc<dyn Timer>,
        browser: Rc<dyn Browser>,
        config: RegistrationConfig,
    ) -> Self {
        Self {
            store,
            api,
            timer,
            browser,
            config,
        }
    }

    pub fn config(&self) -> &RegistrationConfig {
        &self.config
    }

    /// Handles a form submission from start to redirect or error dismissal.
    ///
    /// Returns `None` when a submission is already in flight.
    pub async fn submit_form(&self, form: RegistrationForm) -> Option<RegistrationResult> {
        if self.store.snapshot().submit_disabled {
            debug!("Ignoring submit while a registration is in flight");
            return None;
        }

        let input = match form.normalize() {
            Ok(input) => input,
            Err(e) => {
                warn!("Registration form rejected: {}", e);
                let message = e.user_message();
                self.render_error(message.clone()).await;
                return Some(RegistrationResult::failure(message));
            }
        };

        let result = self.submit(input).await;
        match &result {
            RegistrationResult::Success {
                message,
                student_code,
            } => {
                self.store.dispatch(RegistrationAction::ResetForm);
                futures::join!(
                    self.render_success(message.clone(), student_code.clone()),
                    self.celebrate()
                );
            }
            RegistrationResult::Failure { error } => {
                self.render_error(error.clone()).await;
            }
        }
        Some(result)
    }

    /// Sends one registration request with the submit control disabled.
    ///
    /// The control is re-enabled on failure only; a success is followed by
    /// navigation away from the page.
    pub async fn submit(&self, input: RegistrationInput) -> RegistrationResult {
        self.store.dispatch(RegistrationAction::SubmitStarted);

        let result = match self.api.register(&input).await {
            Ok(response) => response.into_result(GENERIC_FAILURE_MESSAGE),
            Err(e) => {
                error!("Registration request failed: {}", e);
                RegistrationResult::failure(e.user_message())
            }
        };

        match &result {
            RegistrationResult::Success { student_code, .. } => {
                info!("Registration succeeded with student code {}", student_code);
            }
            RegistrationResult::Failure { error } => {
                warn!("Registration refused: {}", error);
                self.store.dispatch(RegistrationAction::SubmitFailed);
            }
        }
        result
    }

    /// Shows the success panel, counts down and navigates to the redirect path.
    ///
    /// The countdown cannot be cancelled once started.
    pub async fn render_success(&self, message: String, student_code: String) {
        self.store.dispatch(RegistrationAction::ShowSuccess {
            message,
            student_code,
        });

        let mut countdown = CountdownState::new(self.config.timing.countdown_seconds);
        self.store
            .dispatch(RegistrationAction::UpdateCountdown(countdown));

        while !countdown.is_elapsed() {
            self.timer.sleep(self.config.timing.countdown_tick_ms).await;
            countdown.tick();
            self.store
                .dispatch(RegistrationAction::UpdateCountdown(countdown));
        }

        let target = &self.config.endpoints.redirect_path;
        info!("Countdown finished, redirecting to {}", target);
        if let Err(e) = self.browser.navigate(target) {
            error!("Redirect failed: {}", e);
        }
        self.store.dispatch(RegistrationAction::Redirected);
    }

    /// Shows an error panel and hides it after the dismiss delay unless it was
    /// already cleared or replaced.
    pub async fn render_error(&self, message: impl Into<String>) {
        self.store
            .dispatch(RegistrationAction::ShowError(message.into()));
        let generation = self.store.snapshot().error_generation;

        self.timer.sleep(self.config.timing.error_dismiss_ms).await;
        self.store
            .dispatch(RegistrationAction::DismissError(generation));
    }

    /// Throws the confetti and removes each particle once its fall is over
    pub async fn celebrate(&self) {
        let viewport = self.browser.viewport();
        let first_id = self.store.snapshot().next_particle_id;
        let browser = self.browser.clone();
        let mut random = move || browser.random();

        let mut particles = ConfettiParticle::batch(
            first_id,
            self.config.celebration.particle_count,
            viewport,
            &self.config.celebration.colors,
            &mut random,
        );
        debug!("Throwing {} confetti particles", particles.len());
        self.store
            .dispatch(RegistrationAction::AddParticles(particles.clone()));

        particles.sort_by_key(|p| p.lifetime_ms());
        let mut elapsed_ms = 0;
        for particle in particles {
            let due_ms = particle.lifetime_ms();
            if due_ms > elapsed_ms {
                self.timer.sleep(due_ms - elapsed_ms).await;
                elapsed_ms = due_ms;
            }
            self.store
                .dispatch(RegistrationAction::RemoveParticle(particle.id));
        }
    }

    /// Any input gaining focus clears a visible error
    pub fn input_focused(&self) {
        self.store.dispatch(RegistrationAction::InputFocused);
    }

    /// The page swaps the image for its placeholder
    pub fn logo_failed(&self) {
        warn!("Logo not found - showing placeholder");
        self.store.dispatch(RegistrationAction::SetLogoFailed(true));
    }
}
