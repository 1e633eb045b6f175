//! Modal form for editing a group's name, description and servers.

use dioxus::prelude::*;
use serverdeck_shared::{ApiError, Group, Server};

use crate::components::ui::{
    Button, ButtonVariant, ErrorBanner, Modal, TextArea, TextInput, ToggleGroup,
};
use crate::group_form::{server_options, DraftField, EditGroupSession, FormError, SubmitOutcome};
use crate::hooks::{use_group_data, use_server_data};
use crate::i18n::tr;
use crate::{log_debug, log_info, log_warn};

/// EditGroupForm - edits one group and reports back to its parent.
///
/// `on_edit` fires once after a successful update; the parent is expected to
/// unmount the form and refresh whatever lists the group. `on_cancel` fires
/// from the Cancel button and leaves the draft alone.
///
/// ```text
/// +--------------------------------------+
/// |  Edit Group                          |
/// |  [ error banner ]                    |
/// |  Group Name *   [______________]     |
/// |  Description    [______________]     |
/// |  Servers        (a) (c) ...          |
/// |                     [Cancel] [Save]  |
/// +--------------------------------------+
/// ```
#[component]
pub fn EditGroupForm(group: Group, on_edit: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    let group_data = use_group_data();
    let mut server_data = use_server_data();
    let mut session = use_signal(|| EditGroupSession::new(&group));

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();
        let Some((group_id, payload)) = session.write().begin_submit() else {
            return;
        };

        log_debug!("submitting group {group_id}");
        spawn(async move {
            let result = group_data.update_group(&group_id, &payload).await;
            if let Err(err) = &result {
                log_warn!("update of group {group_id} failed: {err}");
            }
            let outcome = session.write().finish_submit(result);
            if outcome == SubmitOutcome::Saved {
                log_info!("group {group_id} updated");
                on_edit.call(());
            }
        });
    };

    rsx! {
        EditGroupFormView {
            session: session.cloned(),
            servers: server_data.servers(),
            server_error: server_data.error(),
            on_field: move |(field, value): (DraftField, String)| session.write().set_field(field, value),
            on_servers: move |servers: Vec<String>| session.write().set_servers(servers),
            on_submit: handle_submit,
            on_cancel,
            on_retry: move |_| server_data.refresh(),
        }
    }
}

/// Renders one snapshot of an edit session. Holds no state of its own.
#[component]
pub fn EditGroupFormView(
    session: EditGroupSession,
    servers: Vec<Server>,
    server_error: Option<ApiError>,
    on_field: EventHandler<(DraftField, String)>,
    on_servers: EventHandler<Vec<String>>,
    on_submit: EventHandler<FormEvent>,
    on_cancel: EventHandler<()>,
    on_retry: EventHandler<()>,
) -> Element {
    // Derived on every render so a changed server list is picked up immediately.
    let options = server_options(&servers);
    let submitting = session.is_submitting();
    let draft = session.draft().clone();
    let error = session.error().map(FormError::message);
    let name_label = format!("{} *", tr("groups.name"));

    rsx! {
        Modal { title: tr("groups.edit"),
            if let Some(message) = error {
                ErrorBanner { message }
            }

            form { onsubmit: move |e| on_submit.call(e),
                div { class: "mb-4",
                    label {
                        class: "block text-gray-700 text-sm font-bold mb-2",
                        r#for: DraftField::Name.input_name(),
                        "{name_label}"
                    }
                    TextInput {
                        name: DraftField::Name.input_name().to_string(),
                        value: draft.name.clone(),
                        placeholder: tr("groups.namePlaceholder"),
                        required: true,
                        oninput: move |e: FormEvent| on_field.call((DraftField::Name, e.value())),
                    }
                }

                div { class: "mb-4",
                    label {
                        class: "block text-gray-700 text-sm font-bold mb-2",
                        r#for: DraftField::Description.input_name(),
                        {tr("groups.description")}
                    }
                    TextArea {
                        name: DraftField::Description.input_name().to_string(),
                        value: draft.description.clone(),
                        placeholder: tr("groups.descriptionPlaceholder"),
                        oninput: move |e: FormEvent| on_field.call((DraftField::Description, e.value())),
                    }
                }

                ToggleGroup {
                    class: "mb-6".to_string(),
                    label: tr("groups.servers"),
                    no_options_text: tr("groups.noServerOptions"),
                    values: draft.servers.clone(),
                    options,
                    onchange: move |servers: Vec<String>| on_servers.call(servers),
                }

                if let Some(err) = server_error {
                    div { class: "-mt-4 mb-6 flex items-center gap-2 text-xs text-red-600",
                        span { "{err.user_message()}" }
                        button {
                            r#type: "button",
                            class: "underline hover:text-red-800",
                            onclick: move |_| on_retry.call(()),
                            {tr("common.retry")}
                        }
                    }
                }

                div { class: "flex justify-end space-x-3",
                    Button {
                        variant: ButtonVariant::Ghost,
                        disabled: submitting,
                        onclick: move |_| on_cancel.call(()),
                        {tr("common.cancel")}
                    }
                    Button {
                        r#type: "submit".to_string(),
                        variant: ButtonVariant::Primary,
                        disabled: submitting,
                        if submitting {
                            {tr("common.submitting")}
                        } else {
                            {tr("common.save")}
                        }
                    }
                }
            }
        }
    }
}
