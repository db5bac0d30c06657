use crate::components::display::CountdownDisplay;
use crate::registration::FeedbackPanel;
use dioxus::html::ScrollBehavior;
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct MessagePanelProps {
    pub feedback: FeedbackPanel,
    /// Seconds left before the redirect, once the countdown started
    pub countdown: Option<u32>,
}

#[component]
pub fn MessagePanel(props: MessagePanelProps) -> Element {
    let visible = props.feedback.is_visible();
    let content = match props.feedback {
        FeedbackPanel::Hidden => rsx! {},
        FeedbackPanel::Error { message, .. } => rsx! {
            div {
                class: "message error",
                "{message}"
            }
        },
        FeedbackPanel::Success { message, .. } => {
            let remaining = props.countdown.unwrap_or(0);
            rsx! {
                div {
                    class: "message success success-expanded pulse",
                    onmounted: move |event| async move {
                        // Bring the panel into view even when the form was scrolled
                        let _ = event.scroll_to(ScrollBehavior::Smooth).await;
                    },
                    div {
                        class: "success-content",
                        div { class: "success-icon", "✓" }
                        div {
                            class: "success-text",
                            strong { "{message}" }
                            p { "Redirection en cours..." }
                        }
                    }
                    CountdownDisplay { remaining: remaining }
                }
            }
        }
    };

    rsx! {
        div {
            id: "messageContainer",
            style: if visible { "display: block;" } else { "display: none;" },
            {content}
        }
    }
}
