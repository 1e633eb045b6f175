use dioxus::prelude::*;

const FIELD_CLASS: &str = "w-full rounded border border-gray-300 px-3 py-2 text-sm text-gray-700 leading-tight shadow-sm focus:outline-none focus:ring-2 focus:ring-blue-400 focus:border-blue-400";

fn field_class(extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{FIELD_CLASS} {extra}"),
        _ => FIELD_CLASS.to_string(),
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    #[props(optional)]
    pub class: Option<String>,
    /// Used for both `id` and `name`, so a `label { r#for }` can point at it.
    pub name: String,
    pub value: String,
    pub oninput: EventHandler<FormEvent>,
    #[props(optional)]
    pub placeholder: Option<String>,
    #[props(optional)]
    pub required: Option<bool>,
}

#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    rsx! {
        input {
            class: field_class(props.class.as_deref()),
            r#type: "text",
            id: "{props.name}",
            name: "{props.name}",
            value: "{props.value}",
            placeholder: props.placeholder.clone().unwrap_or_default(),
            required: props.required.unwrap_or(false),
            oninput: move |e| props.oninput.call(e),
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct TextAreaProps {
    #[props(optional)]
    pub class: Option<String>,
    pub name: String,
    pub value: String,
    pub oninput: EventHandler<FormEvent>,
    #[props(optional)]
    pub placeholder: Option<String>,
}

#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    rsx! {
        textarea {
            class: field_class(Some(props.class.as_deref().unwrap_or("min-h-[80px] resize-y"))),
            id: "{props.name}",
            name: "{props.name}",
            value: "{props.value}",
            placeholder: props.placeholder.clone().unwrap_or_default(),
            oninput: move |e| props.oninput.call(e),
        }
    }
}
