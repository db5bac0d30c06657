use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct CountdownDisplayProps {
    pub remaining: u32,
}

#[component]
pub fn CountdownDisplay(props: CountdownDisplayProps) -> Element {
    rsx! {
        div {
            class: "countdown-container",
            span { class: "countdown-text", "Redirection dans " }
            span {
                class: "countdown-number",
                id: "countdown",
                "{props.remaining}"
            }
            span { class: "countdown-text", " secondes" }
        }
    }
}
