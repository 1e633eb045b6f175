//! API context: the active client configuration, shared with every hook.

use dioxus::prelude::*;

use crate::api_client::ApiClient;
use crate::config::ClientConfig;
use crate::i18n::{apply_locale, resolve_locale};
use crate::log_warn;

/// API context provided to the app
#[derive(Clone, Copy, Debug)]
pub struct ApiContext {
    pub config: Signal<ClientConfig>,
}

/// Provider component that sets up the API context.
///
/// Children are re-mounted when the locale changes so every label is
/// rendered again from the new catalog. Component state below the provider
/// does not survive that: an open `EditGroupForm` would lose its draft. The
/// only locale switch lives in the page header, which the modal overlay
/// covers while a form is open.
#[component]
pub fn ApiProvider(initial: ClientConfig, children: Element) -> Element {
    let config = use_signal(move || {
        apply_locale(&initial.locale);
        initial
    });

    use_context_provider(|| ApiContext { config });

    let locale = config.read().locale.clone();
    rsx! {
        div { key: "{locale}", class: "contents", {children} }
    }
}

impl ApiContext {
    /// Create an API client for the configured backend
    pub fn client(&self) -> ApiClient {
        ApiClient::new().with_base_url(self.config.read().base_url())
    }

    pub fn locale(&self) -> String {
        self.config.read().locale.clone()
    }

    /// Switch the UI language and remember the choice.
    pub fn set_locale(&mut self, tag: &str) {
        let locale = resolve_locale(tag);
        apply_locale(locale);

        let mut config = self.config.write();
        config.locale = locale.to_string();
        if let Err(err) = config.save() {
            log_warn!("could not persist locale {locale}: {err:#}");
        }
    }
}
