//! Edit-session state behind [`EditGroupForm`](crate::components::groups::EditGroupForm).
//!
//! The component keeps one [`EditGroupSession`] in a signal. Submission is split
//! around the network call: [`EditGroupSession::begin_submit`] validates and
//! hands back the payload, and [`EditGroupSession::finish_submit`] records how
//! the update went.

use serverdeck_shared::{ApiError, Group, GroupFormData, Server};

use crate::components::ui::ToggleOption;
use crate::i18n::tr;

/// Locally held copy of a group's editable fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupDraft {
    pub name: String,
    pub description: String,
    pub servers: Vec<String>,
}

impl GroupDraft {
    pub fn from_group(group: &Group) -> Self {
        Self {
            name: group.name.clone(),
            description: group.description.clone().unwrap_or_default(),
            servers: group.servers.clone().unwrap_or_default(),
        }
    }

    pub fn to_form_data(&self) -> GroupFormData {
        GroupFormData {
            name: self.name.clone(),
            description: self.description.clone(),
            servers: self.servers.clone(),
        }
    }
}

/// Text fields of the draft, addressed by the `name` attribute of their input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Description,
}

impl DraftField {
    pub fn from_input_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "description" => Some(Self::Description),
            _ => None,
        }
    }

    pub fn input_name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    NameRequired,
    UpdateFailed,
    /// The update call itself failed; carries the message to show verbatim.
    Remote(String),
}

impl FormError {
    pub fn message(&self) -> String {
        match self {
            FormError::NameRequired => tr("groups.nameRequired"),
            FormError::UpdateFailed => tr("groups.updateError"),
            FormError::Remote(message) => message.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The parent should tear the modal down.
    Saved,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditGroupSession {
    group_id: String,
    draft: GroupDraft,
    error: Option<FormError>,
    submitting: bool,
}

impl EditGroupSession {
    pub fn new(group: &Group) -> Self {
        Self {
            group_id: group.id.clone(),
            draft: GroupDraft::from_group(group),
            error: None,
            submitting: false,
        }
    }

    pub fn draft(&self) -> &GroupDraft {
        &self.draft
    }

    pub fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set_field(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Name => self.draft.name = value,
            DraftField::Description => self.draft.description = value,
        }
    }

    pub fn set_servers(&mut self, servers: Vec<String>) {
        self.draft.servers = servers;
    }

    /// Validate the draft and enter the submitting state.
    ///
    /// Returns the group id and payload to send, or `None` when validation
    /// failed or a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<(String, GroupFormData)> {
        if self.submitting {
            return None;
        }
        self.error = None;

        if self.draft.name.trim().is_empty() {
            self.error = Some(FormError::NameRequired);
            return None;
        }

        self.submitting = true;
        Some((self.group_id.clone(), self.draft.to_form_data()))
    }

    /// Record the result of the update call started by [`Self::begin_submit`].
    ///
    /// `submitting` stays set after a save, since the parent closes the modal.
    pub fn finish_submit(&mut self, result: Result<bool, ApiError>) -> SubmitOutcome {
        match result {
            Ok(true) => SubmitOutcome::Saved,
            Ok(false) => {
                self.error = Some(FormError::UpdateFailed);
                self.submitting = false;
                SubmitOutcome::Failed
            }
            Err(err) => {
                self.error = Some(FormError::Remote(err.user_message()));
                self.submitting = false;
                SubmitOutcome::Failed
            }
        }
    }
}

/// Servers that may be offered for selection, in their original order.
pub fn available_servers(servers: &[Server]) -> Vec<&Server> {
    servers.iter().filter(|server| server.is_enabled()).collect()
}

pub fn server_options(servers: &[Server]) -> Vec<ToggleOption> {
    available_servers(servers)
        .into_iter()
        .map(|server| ToggleOption::new(server.name.clone(), server.name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(name: &str) -> Group {
        Group {
            id: "g1".to_string(),
            name: name.to_string(),
            description: Some("frontends".to_string()),
            servers: Some(vec!["a".to_string()]),
        }
    }

    fn server(name: &str, enabled: Option<bool>) -> Server {
        Server {
            name: name.to_string(),
            enabled,
        }
    }

    fn conflict() -> ApiError {
        ApiError::Http {
            status: 409,
            body: r#"{"title":"Conflict","status":409,"detail":"conflict"}"#.to_string(),
        }
    }

    #[test]
    fn draft_copies_group_fields() {
        let draft = GroupDraft::from_group(&group("X"));
        assert_eq!(draft.name, "X");
        assert_eq!(draft.description, "frontends");
        assert_eq!(draft.servers, vec!["a".to_string()]);
    }

    #[test]
    fn draft_applies_defaults_for_missing_fields() {
        let bare = Group {
            id: "g2".to_string(),
            name: "X".to_string(),
            description: None,
            servers: None,
        };
        let draft = GroupDraft::from_group(&bare);
        assert_eq!(draft.name, "X");
        assert_eq!(draft.description, "");
        assert!(draft.servers.is_empty());
    }

    #[test]
    fn field_change_touches_only_that_field() {
        let mut session = EditGroupSession::new(&group("X"));
        session.set_field(DraftField::Description, "edge nodes".to_string());
        assert_eq!(session.draft().name, "X");
        assert_eq!(session.draft().description, "edge nodes");
        assert_eq!(session.draft().servers, vec!["a".to_string()]);

        let field = DraftField::from_input_name("name").unwrap();
        session.set_field(field, "Y".to_string());
        assert_eq!(session.draft().name, "Y");
        assert_eq!(session.draft().description, "edge nodes");
    }

    #[test]
    fn input_names_map_to_fields() {
        for field in [DraftField::Name, DraftField::Description] {
            assert_eq!(DraftField::from_input_name(field.input_name()), Some(field));
        }
        assert_eq!(DraftField::from_input_name("servers"), None);
    }

    #[test]
    fn selection_change_replaces_the_whole_list() {
        let mut session = EditGroupSession::new(&group("X"));
        session.set_servers(vec!["c".to_string(), "b".to_string()]);
        assert_eq!(session.draft().servers, vec!["c".to_string(), "b".to_string()]);
    }

    #[test]
    fn whitespace_name_is_rejected_without_submitting() {
        let mut session = EditGroupSession::new(&group("X"));
        session.set_field(DraftField::Name, "   \t".to_string());

        assert_eq!(session.begin_submit(), None);
        assert_eq!(session.error(), Some(&FormError::NameRequired));
        assert!(!session.is_submitting());
        assert_eq!(session.error().unwrap().message(), "Group name is required");
    }

    #[test]
    fn begin_submit_returns_payload_and_disables_the_form() {
        let mut session = EditGroupSession::new(&group(" X "));
        let (id, payload) = session.begin_submit().unwrap();
        assert_eq!(id, "g1");
        assert_eq!(
            payload,
            GroupFormData {
                name: " X ".to_string(),
                description: "frontends".to_string(),
                servers: vec!["a".to_string()],
            }
        );
        assert!(session.is_submitting());
        assert_eq!(session.error(), None);
    }

    #[test]
    fn begin_submit_clears_a_previous_error() {
        let mut session = EditGroupSession::new(&group(""));
        assert!(session.begin_submit().is_none());
        assert!(session.error().is_some());

        session.set_field(DraftField::Name, "X".to_string());
        assert!(session.begin_submit().is_some());
        assert_eq!(session.error(), None);
    }

    #[test]
    fn no_second_submission_while_in_flight() {
        let mut session = EditGroupSession::new(&group("X"));
        assert!(session.begin_submit().is_some());
        assert!(session.begin_submit().is_none());
        assert!(session.is_submitting());
    }

    #[test]
    fn successful_update_keeps_the_form_disabled() {
        let mut session = EditGroupSession::new(&group("X"));
        session.begin_submit().unwrap();
        assert_eq!(session.finish_submit(Ok(true)), SubmitOutcome::Saved);
        assert_eq!(session.error(), None);
        assert!(session.is_submitting());
    }

    #[test]
    fn unsuccessful_update_shows_generic_error_and_reenables() {
        let mut session = EditGroupSession::new(&group("X"));
        session.begin_submit().unwrap();
        assert_eq!(session.finish_submit(Ok(false)), SubmitOutcome::Failed);
        assert_eq!(session.error(), Some(&FormError::UpdateFailed));
        assert_eq!(session.error().unwrap().message(), "Failed to update group");
        assert!(!session.is_submitting());
    }

    #[test]
    fn failed_update_shows_the_error_message() {
        let mut session = EditGroupSession::new(&group("X"));
        session.begin_submit().unwrap();
        assert_eq!(session.finish_submit(Err(conflict())), SubmitOutcome::Failed);
        assert_eq!(session.error().unwrap().message(), "conflict");
        assert!(!session.is_submitting());

        // The form accepts another attempt afterwards.
        assert!(session.begin_submit().is_some());
    }

    #[test]
    fn network_errors_use_their_display_form() {
        let mut session = EditGroupSession::new(&group("X"));
        session.begin_submit().unwrap();
        session.finish_submit(Err(ApiError::Network("timed out".to_string())));
        assert_eq!(
            session.error(),
            Some(&FormError::Remote("Network error: timed out".to_string()))
        );
    }

    #[test]
    fn only_enabled_servers_are_offered() {
        let servers = vec![
            server("a", Some(true)),
            server("b", Some(false)),
            server("c", None),
        ];
        let options = server_options(&servers);
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["a", "c"]);
        assert!(options.iter().all(|o| o.value == o.label));
    }

    #[test]
    fn disabled_selection_is_still_submitted() {
        let mut session = EditGroupSession::new(&group("X"));
        session.set_servers(vec!["a".to_string(), "b".to_string()]);

        let servers = vec![server("a", Some(true)), server("b", Some(false))];
        assert!(server_options(&servers).iter().all(|o| o.value != "b"));

        let (_, payload) = session.begin_submit().unwrap();
        assert_eq!(payload.servers, vec!["a".to_string(), "b".to_string()]);
    }
}
