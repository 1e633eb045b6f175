//! Serverdeck Client - Dioxus admin console
//!
//! Web/desktop client for managing server groups: the group list, the edit
//! modal, and the hooks that talk to the console API.

rust_i18n::i18n!("locales", fallback = "en");

pub mod logging;

pub mod api_client;
pub mod api_context;
pub mod config;
pub mod group_form;
pub mod i18n;

pub mod components;
pub mod hooks;
pub mod routes;
pub mod views;

pub use api_client::ApiClient;
pub use api_context::{ApiContext, ApiProvider};
pub use config::ClientConfig;
pub use routes::Route;
