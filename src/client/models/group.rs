//! Group models (technician groups, agent groups, rights groups)

use serde::{Deserialize, Serialize};

/// Which kind of entity group an operation addresses.
///
/// Technician groups and agent groups share one endpoint shape but live
/// under different collections with different membership-edge segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    Technician,
    Agent,
}

impl GroupKind {
    /// Collection segment of the group endpoints
    pub(crate) fn collection(self) -> &'static str {
        match self {
            GroupKind::Technician => "techgroups",
            GroupKind::Agent => "agentgroups",
        }
    }

    /// Membership-edge segment: `{groupId}/tech/{techId}` vs
    /// `{groupId}/agent/{agentId}`
    pub(crate) fn edge(self) -> &'static str {
        match self {
            GroupKind::Technician => "tech",
            GroupKind::Agent => "agent",
        }
    }

    /// Human-readable label for error messages
    pub fn label(self) -> &'static str {
        match self {
            GroupKind::Technician => "technician group",
            GroupKind::Agent => "agent group",
        }
    }
}

/// Group summary as returned by the collection listing.
///
/// Cheap to fetch: name and member count only. The member list requires the
/// separate, more expensive detail fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GroupSummary {
    pub id: u64,
    pub name: String,

    /// Number of members; a zero here makes the detail fetch pointless
    #[serde(default)]
    pub member_count: u32,
}

/// Group detail view, including the member list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GroupDetail {
    pub id: u64,
    pub name: String,

    /// Members at fetch time. Authoritative only at fetch time: membership
    /// mutations re-fetch rather than patching this locally.
    #[serde(default)]
    pub members: Vec<GroupMember>,
}

/// A member entry inside a group detail view
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GroupMember {
    /// Member entity id (technician id or agent id, depending on the group kind)
    pub id: u64,

    /// Member entity name
    pub name: String,

    /// Agent GUID, present for agent-group members only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
}

/// Payload for creating a group
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateGroupRequest {
    pub name: String,
}

/// A rights group: the set of rights a triplet grants. Read-only from this
/// client's perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RightsGroup {
    pub id: u64,
    pub name: String,

    /// Member rights entries
    #[serde(default)]
    pub rights: Vec<String>,
}
