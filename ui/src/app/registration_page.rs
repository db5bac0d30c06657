use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::display::{ConfettiLayer, LogoImage, MessagePanel};
use crate::components::forms::RegistrationFormComponent;
use crate::registration::{
    FlowStore, RegistrationAction, RegistrationFlow, RegistrationForm, RegistrationState,
};
use crate::services::browser::WebBrowser;
use crate::services::client::RegistrationClient;
use crate::services::config::RegistrationConfig;
use crate::services::timer::BrowserTimer;
use crate::utils::page_origin;
use crate::{console_info, console_warn};

const REGISTRATION_CSS: Asset = asset!("/assets/styling/registration.css");

// Signals are cheap handles, so the flow can keep one and write from spawned tasks
impl FlowStore for Signal<RegistrationState> {
    fn dispatch(&self, action: RegistrationAction) {
        let mut signal = *self;
        signal.with_mut(|s| s.reduce_in_place(action));
    }

    fn snapshot(&self) -> RegistrationState {
        self.with_peek(|s| s.clone())
    }
}

/// Wire the flow controller to the page state and browser services
fn build_flow(state: Signal<RegistrationState>) -> RegistrationFlow {
    let config = RegistrationConfig::default();

    let origin = page_origin().unwrap_or_default();
    if origin.is_empty() {
        console_warn!("Page origin unavailable - registration requests will fail");
    }
    let client = RegistrationClient::new(config.endpoint_url(&origin));
    console_info!("Registration endpoint: {}", client.endpoint());

    RegistrationFlow::new(
        Rc::new(state),
        Rc::new(client),
        Rc::new(BrowserTimer),
        Rc::new(WebBrowser),
        config,
    )
}

#[component]
pub fn RegistrationPage() -> Element {
    let mut state = use_signal(RegistrationState::default);

    // Built once per page load
    let flow = use_hook(move || build_flow(state));

    let dispatch = EventHandler::new(move |action: RegistrationAction| {
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    let submit_flow = flow.clone();
    let focus_flow = flow.clone();
    let logo_flow = flow.clone();
    let logo_url = flow.config().endpoints.logo_url.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: REGISTRATION_CSS }

        div {
            class: "registration-container",

            div {
                class: "page-header",
                LogoImage {
                    src: logo_url,
                    failed: state().logo_failed,
                    on_error: move |_| logo_flow.logo_failed()
                }
                h1 {
                    class: "registration-title",
                    "Inscription des étudiants"
                }
                p {
                    class: "registration-subtitle",
                    "Remplissez le formulaire ci-dessous pour obtenir votre code étudiant."
                }
            }

            MessagePanel {
                feedback: state().feedback,
                countdown: state().countdown_remaining()
            }

            RegistrationFormComponent {
                state: state,
                dispatch: dispatch,
                on_submit: move |form: RegistrationForm| {
                    let flow = submit_flow.clone();
                    spawn(async move {
                        flow.submit_form(form).await;
                    });
                },
                on_focus: move |_| focus_flow.input_focused()
            }
        }

        ConfettiLayer {
            particles: state().particles
        }
    }
}
