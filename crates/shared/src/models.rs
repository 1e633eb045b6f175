//! Shared data models for the serverdeck admin console.

use serde::{Deserialize, Serialize};

// --- Servers ---

/// A managed server as reported by `GET /api/servers`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Server {
    pub name: String,
    /// Absent means enabled; only an explicit `false` disables a server.
    #[serde(default)]
    pub enabled: Option<bool>,
}

impl Server {
    pub fn is_enabled(&self) -> bool {
        self.enabled != Some(false)
    }
}

// --- Groups ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Names of the servers that belong to this group.
    #[serde(default)]
    pub servers: Option<Vec<String>>,
}

// --- Group Request/Response Types ---

/// Payload for `PUT /api/groups/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GroupFormData {
    pub name: String,
    pub description: String,
    pub servers: Vec<String>,
}
