//! Triplet (standing access grant) models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A standing access grant binding a technician group, a rights group and an
/// agent group: members of the technician group receive the rights defined
/// by the rights group against members of the agent group.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Triplet {
    pub id: u64,

    /// Optional name/description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub technician_group_id: u64,
    pub rights_group_id: u64,
    pub agent_group_id: u64,

    /// Expiration timestamp; absent means the grant never expires
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Payload for creating a triplet. An omitted `expires_at` creates a grant
/// with no expiration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateTripletRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub technician_group_id: u64,
    pub rights_group_id: u64,
    pub agent_group_id: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Payload for updating a triplet. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateTripletRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}
