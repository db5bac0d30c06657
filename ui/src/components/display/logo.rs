use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct LogoImageProps {
    pub src: String,
    /// Set once the image failed to load
    pub failed: bool,
    pub on_error: EventHandler<()>,
}

#[component]
pub fn LogoImage(props: LogoImageProps) -> Element {
    rsx! {
        div {
            class: "logo-container",
            if !props.failed {
                img {
                    id: "logoImg",
                    class: "logo",
                    src: "{props.src}",
                    alt: "Logo",
                    onerror: move |_| props.on_error.call(())
                }
            }
            div {
                id: "logoPlaceholder",
                class: if props.failed { "logo-placeholder show" } else { "logo-placeholder" },
                "LOGO"
            }
        }
    }
}
