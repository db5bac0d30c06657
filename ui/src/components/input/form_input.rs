use dioxus::prelude::*;

#[derive(PartialEq, Clone, Debug)]
pub enum InputType {
    Text,
    Email,
    Tel,
    Date,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
            InputType::Tel => "tel",
            InputType::Date => "date",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct FormInputProps {
    /// DOM id, also used by the label
    pub id: String,
    pub label: String,
    pub value: String,
    #[props(default)]
    pub placeholder: String,
    pub input_type: InputType,
    #[props(default = "input-field".to_string())]
    pub input_class: String,
    #[props(default)]
    pub required: bool,
    #[props(default)]
    pub disabled: bool,
    pub on_change: EventHandler<String>,
    pub on_focus: EventHandler<()>,
}

#[component]
pub fn FormInput(props: FormInputProps) -> Element {
    rsx! {
        div {
            class: "form-group",
            label {
                class: "input-label",
                r#for: "{props.id}",
                "{props.label}"
                if props.required {
                    span { class: "required-marker", " *" }
                }
            }
            input {
                id: "{props.id}",
                name: "{props.id}",
                class: "{props.input_class}",
                r#type: "{props.input_type.as_str()}",
                value: "{props.value}",
                placeholder: "{props.placeholder}",
                required: props.required,
                disabled: props.disabled,
                oninput: move |event| props.on_change.call(event.value()),
                onfocus: move |_| props.on_focus.call(())
            }
        }
    }
}
