use dioxus::prelude::*;
use serverdeck_shared::{ApiError, Server};

use crate::api_context::ApiContext;

/// Server list supplied by an ancestor instead of fetched from the API.
#[derive(Clone, Copy)]
pub struct ServerList(pub Signal<Vec<Server>>);

/// Reactive view of the server list.
#[derive(Clone, Copy)]
pub struct ServerData {
    resource: Resource<Result<Vec<Server>, ApiError>>,
    provided: Option<ServerList>,
}

pub fn use_server_data() -> ServerData {
    let api = use_context::<ApiContext>();
    let provided = use_hook(try_consume_context::<ServerList>);
    let resource = use_resource(move || async move {
        match provided {
            Some(list) => Ok(list.0.cloned()),
            None => api.client().list_servers().await,
        }
    });
    ServerData { resource, provided }
}

impl ServerData {
    /// The current servers; empty while loading or after a failed load.
    pub fn servers(&self) -> Vec<Server> {
        if let Some(list) = self.provided {
            return list.0.cloned();
        }
        match &*self.resource.read() {
            Some(Ok(servers)) => servers.clone(),
            _ => Vec::new(),
        }
    }

    pub fn error(&self) -> Option<ApiError> {
        if self.provided.is_some() {
            return None;
        }
        match &*self.resource.read() {
            Some(Err(err)) => Some(err.clone()),
            _ => None,
        }
    }

    pub fn refresh(&mut self) {
        self.resource.restart();
    }
}
