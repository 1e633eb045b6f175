//! Group list page; hosts the edit modal.

use dioxus::prelude::*;
use serverdeck_shared::{ApiError, Group};

use crate::api_context::ApiContext;
use crate::components::groups::EditGroupForm;
use crate::components::ui::{Button, ButtonVariant, ErrorBanner};
use crate::hooks::{use_group_data, use_refresh_resource, use_refreshable_resource};
use crate::i18n::{tr, tr_count, SUPPORTED_LOCALES};

type GroupsResult = Result<Vec<Group>, ApiError>;

#[component]
pub fn GroupsView() -> Element {
    let group_data = use_group_data();
    let mut groups =
        use_refreshable_resource(move || async move { group_data.list_groups().await });

    let body = match &*groups.read() {
        None => rsx! {
            p { class: "text-gray-500", {tr("groups.loading")} }
        },
        Some(Err(err)) => rsx! {
            ErrorBanner { message: format!("{}: {}", tr("groups.loadError"), err.user_message()) }
            Button {
                variant: ButtonVariant::Secondary,
                onclick: move |_| groups.restart(),
                {tr("common.retry")}
            }
        },
        Some(Ok(list)) if list.is_empty() => rsx! {
            p { class: "text-gray-500", {tr("groups.empty")} }
        },
        Some(Ok(list)) => rsx! {
            GroupList { groups: list.clone() }
        },
    };

    rsx! {
        div { class: "min-h-screen bg-gray-50",
            header { class: "bg-white border-b border-gray-200",
                div { class: "max-w-4xl mx-auto px-6 py-4 flex items-center justify-between",
                    h1 { class: "text-2xl font-semibold text-gray-800", {tr("groups.title")} }
                    LocaleSelect {}
                }
            }
            main { class: "max-w-4xl mx-auto px-6 py-8", {body} }
        }
    }
}

/// Group rows with an Edit button each. Saving refreshes the enclosing
/// [`GroupsView`] resource.
#[component]
pub fn GroupList(groups: Vec<Group>) -> Element {
    let mut editing = use_signal(|| None::<Group>);
    let mut refresh = use_refresh_resource::<GroupsResult>();

    rsx! {
        ul { class: "divide-y divide-gray-200 bg-white rounded-lg shadow",
            for group in groups {
                {
                    let server_count = group.servers.as_ref().map_or(0, Vec::len);
                    let description = group
                        .description
                        .clone()
                        .filter(|d| !d.trim().is_empty())
                        .unwrap_or_else(|| tr("groups.noDescription"));
                    let target = group.clone();
                    rsx! {
                        li { key: "{group.id}", class: "flex items-center justify-between px-6 py-4",
                            div { class: "min-w-0",
                                div { class: "font-medium text-gray-800 truncate", "{group.name}" }
                                div { class: "text-sm text-gray-500 truncate", "{description}" }
                                div { class: "text-xs text-gray-400 mt-1",
                                    {tr_count("groups.serverCount", server_count)}
                                }
                            }
                            Button {
                                variant: ButtonVariant::Secondary,
                                onclick: move |_| editing.set(Some(target.clone())),
                                {tr("common.edit")}
                            }
                        }
                    }
                }
            }
        }

        if let Some(group) = editing() {
            EditGroupForm {
                key: "{group.id}",
                group,
                on_edit: move |_| {
                    editing.set(None);
                    refresh.refresh();
                },
                on_cancel: move |_| editing.set(None),
            }
        }
    }
}

#[component]
fn LocaleSelect() -> Element {
    let mut api = use_context::<ApiContext>();
    let current = api.locale();

    rsx! {
        label { class: "flex items-center gap-2 text-sm text-gray-600",
            {tr("common.language")}
            select {
                class: "rounded border border-gray-300 px-2 py-1 text-sm",
                onchange: move |e: FormEvent| api.set_locale(&e.value()),
                for (code, name) in SUPPORTED_LOCALES.iter() {
                    option { key: "{code}", value: *code, selected: *code == current, "{name}" }
                }
            }
        }
    }
}
