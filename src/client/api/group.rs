//! Group API traits (technician groups, agent groups, rights groups)

use crate::client::filter::NameFilter;
use crate::client::models::{CreateGroupRequest, GroupDetail, GroupKind, GroupSummary, RightsGroup};
use crate::error::{Error, Result};

/// Entity group operations, shared between technician and agent groups.
///
/// Every method takes the [`GroupKind`] discriminant; the two kinds share
/// one endpoint shape under different collections.
pub trait GroupApi {
    /// List group summaries (name + member count), optionally filtered
    /// client-side by name pattern.
    ///
    /// Summary and detail fetches both use the legacy GET-with-body
    /// convention.
    fn list_groups(&self, kind: GroupKind, filter: Option<&NameFilter>)
    -> Result<Vec<GroupSummary>>;

    /// Fetch the detail view (including members) of a group by id.
    ///
    /// A distinct, more expensive call than the summary listing.
    fn get_group(&self, kind: GroupKind, id: u64) -> Result<GroupDetail>;

    /// Fetch a group's detail view by name.
    ///
    /// Requires an extra round trip: the summary collection resolves
    /// name to id first. Zero matches fails with `NotFound`, multiple with
    /// `Ambiguous`; the detail fetch is never attempted without a resolved id.
    fn get_group_by_name(&self, kind: GroupKind, name: &str) -> Result<GroupDetail> {
        let summaries = self.list_groups(kind, None)?;
        let mut matches = summaries.iter().filter(|g| g.name == name);

        let first = matches.next().ok_or_else(|| Error::NotFound {
            kind: kind.label(),
            name: name.to_string(),
        })?;
        if matches.next().is_some() {
            let count = summaries.iter().filter(|g| g.name == name).count();
            return Err(Error::Ambiguous {
                kind: kind.label(),
                name: name.to_string(),
                count,
            });
        }

        self.get_group(kind, first.id)
    }

    /// Create an empty group
    fn create_group(&self, kind: GroupKind, request: CreateGroupRequest) -> Result<GroupSummary>;

    /// Delete a group record by id.
    ///
    /// The service rejects deleting a non-empty group;
    /// [`crate::ops::delete_group`] evacuates members first.
    fn delete_group_record(&self, kind: GroupKind, id: u64) -> Result<()>;

    /// Add a membership edge (`{groupId}/tech/{techId}` or
    /// `{groupId}/agent/{agentId}`)
    fn add_group_member(&self, kind: GroupKind, group_id: u64, member_id: u64) -> Result<()>;

    /// Remove a membership edge
    fn remove_group_member(&self, kind: GroupKind, group_id: u64, member_id: u64) -> Result<()>;
}

/// Rights group operations. Read-only: the service exposes no create,
/// update, or delete calls for rights groups to API clients.
pub trait RightsGroupApi {
    /// List rights groups, optionally filtered client-side by name pattern
    fn list_rights_groups(&self, filter: Option<&NameFilter>) -> Result<Vec<RightsGroup>>;
}
