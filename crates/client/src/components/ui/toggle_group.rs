//! Multi-select rendered as a row of checkbox pills.

use dioxus::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOption {
    pub value: String,
    pub label: String,
}

impl ToggleOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Flip `value` in `values`: drop it if present, otherwise append it.
///
/// Values that have no matching option are carried through untouched.
pub fn toggle_value(values: &[String], value: &str) -> Vec<String> {
    if values.iter().any(|v| v == value) {
        values.iter().filter(|v| *v != value).cloned().collect()
    } else {
        let mut next = values.to_vec();
        next.push(value.to_string());
        next
    }
}

#[component]
pub fn ToggleGroup(
    label: String,
    no_options_text: String,
    values: Vec<String>,
    options: Vec<ToggleOption>,
    onchange: EventHandler<Vec<String>>,
    #[props(optional)] class: Option<String>,
) -> Element {
    rsx! {
        div { class: format!("space-y-2 {}", class.unwrap_or_default()),
            label { class: "block text-gray-700 text-sm font-bold", "{label}" }
            if options.is_empty() {
                p { class: "text-sm text-gray-500 italic", "{no_options_text}" }
            } else {
                div { class: "flex flex-wrap gap-2",
                    for option in options {
                        {
                            let is_checked = values.contains(&option.value);
                            let values = values.clone();
                            let value = option.value.clone();
                            rsx! {
                                label {
                                    key: "{option.value}",
                                    class: format!(
                                        "flex items-center gap-2 px-3 py-1.5 rounded-full border text-sm cursor-pointer transition-colors {}",
                                        if is_checked {
                                            "bg-blue-50 border-blue-500 text-blue-700"
                                        } else {
                                            "bg-white border-gray-300 text-gray-700 hover:bg-gray-50"
                                        },
                                    ),
                                    input {
                                        r#type: "checkbox",
                                        class: "w-4 h-4 rounded text-blue-500 focus:ring-0 cursor-pointer",
                                        checked: is_checked,
                                        onchange: move |_| onchange.call(toggle_value(&values, &value)),
                                    }
                                    span { "{option.label}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
