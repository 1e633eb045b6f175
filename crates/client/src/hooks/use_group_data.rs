use dioxus::prelude::*;
use serverdeck_shared::{ApiError, Group, GroupFormData};

use crate::api_context::ApiContext;
use crate::log_debug;

/// Group operations against the console API.
#[derive(Clone, Copy)]
pub struct GroupData {
    api: ApiContext,
}

pub fn use_group_data() -> GroupData {
    GroupData {
        api: use_context::<ApiContext>(),
    }
}

impl GroupData {
    pub async fn list_groups(&self) -> Result<Vec<Group>, ApiError> {
        self.api.client().list_groups().await
    }

    /// Update a group. `Ok(false)` means the backend no longer knows the group.
    pub async fn update_group(&self, id: &str, data: &GroupFormData) -> Result<bool, ApiError> {
        log_debug!("PUT group {id} with {} servers", data.servers.len());
        let client = self.api.client();
        update_outcome(client.update_group(id, data).await)
    }
}

fn update_outcome(result: Result<Option<Group>, ApiError>) -> Result<bool, ApiError> {
    match result {
        Ok(_) => Ok(true),
        Err(err) if err.status() == Some(404) => Ok(false),
        Err(err) => Err(err),
    }
}
