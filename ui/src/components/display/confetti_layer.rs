use crate::registration::ConfettiParticle;
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct ConfettiLayerProps {
    pub particles: Vec<ConfettiParticle>,
}

/// Live confetti particles, each falling on its own inline animation
#[component]
pub fn ConfettiLayer(props: ConfettiLayerProps) -> Element {
    rsx! {
        for particle in props.particles.iter() {
            div {
                key: "{particle.id}",
                class: "confetti",
                style: "{particle.style()}"
            }
        }
    }
}
