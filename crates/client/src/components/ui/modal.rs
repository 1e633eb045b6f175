use dioxus::prelude::*;

/// Full-screen overlay that blocks the page behind a centered panel.
#[component]
pub fn Modal(title: String, children: Element) -> Element {
    rsx! {
        div { class: "fixed inset-0 bg-black/50 z-50 flex items-center justify-center p-4",
            div {
                class: "bg-white rounded-lg shadow-lg max-w-md w-full",
                role: "dialog",
                aria_modal: "true",
                div { class: "p-6",
                    h2 { class: "text-xl font-semibold text-gray-800 mb-4", "{title}" }
                    {children}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[component]
    fn Host() -> Element {
        rsx! {
            Modal { title: "Edit Group".to_string(), p { "body" } }
        }
    }

    #[test]
    fn overlay_covers_the_whole_page() {
        let mut dom = VirtualDom::new(Host);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        // Outermost element, so nothing on the page (the locale switch included)
        // stays clickable while a form is open.
        assert!(html.starts_with("<div class=\"fixed inset-0 "));
        assert!(html.contains(" z-50 "));
        assert!(html.contains("role=\"dialog\""));
        assert!(html.contains("Edit Group"));
        assert!(html.contains("<p>body</p>"));
    }
}
