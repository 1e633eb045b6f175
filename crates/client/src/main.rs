//! Serverdeck Client - Main entry point
//!
//! Supports both web (WASM) and desktop platforms.

#![allow(non_snake_case)]

use dioxus::prelude::*;
use serverdeck_client::{log_error, logging, ApiProvider, ClientConfig, Route};

fn main() {
    logging::init();
    dioxus::launch(App);
}

fn load_config() -> ClientConfig {
    ClientConfig::load().unwrap_or_else(|err| {
        log_error!("falling back to default config: {err:#}");
        ClientConfig::default()
    })
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        script { src: "https://cdn.tailwindcss.com" }

        ApiProvider { initial: config,
            Router::<Route> {}
        }
    }
}
