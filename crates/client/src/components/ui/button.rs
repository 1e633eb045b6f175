use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            Self::Primary => "bg-blue-500 text-white hover:bg-blue-600 focus:ring-blue-400",
            Self::Secondary => "bg-gray-100 text-gray-700 hover:bg-gray-200 focus:ring-gray-300",
            Self::Ghost => "bg-transparent text-gray-600 hover:text-gray-800 focus:ring-gray-300",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(optional)]
    pub class: Option<String>,
    #[props(optional)]
    pub variant: Option<ButtonVariant>,
    /// `"button"` unless given; pass `"submit"` inside forms.
    #[props(optional)]
    pub r#type: Option<String>,
    #[props(optional)]
    pub disabled: Option<bool>,
    #[props(optional)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let disabled = props.disabled.unwrap_or(false);
    let base = "inline-flex items-center justify-center rounded px-4 py-2 text-sm font-medium transition-colors focus:outline-none focus:ring-2 disabled:opacity-50 disabled:cursor-not-allowed";
    let variant = props.variant.unwrap_or_default().class();

    let class = match props.class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("{base} {variant} {extra}"),
        _ => format!("{base} {variant}"),
    };

    rsx! {
        button {
            class,
            r#type: props.r#type.clone().unwrap_or_else(|| "button".to_string()),
            disabled,
            onclick: move |evt| {
                if disabled {
                    return;
                }
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}
