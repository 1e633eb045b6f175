use dioxus::prelude::*;

#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div { class: "mb-4 p-3 bg-red-100 text-red-700 rounded text-sm", role: "alert", "{message}" }
    }
}
