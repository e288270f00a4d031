//! Triplet creation from group names

use chrono::{DateTime, Utc};
use log::info;

use crate::client::models::{CreateTripletRequest, GroupKind, GroupRef, RightsGroup, Triplet};
use crate::client::{GroupApi, RightsGroupApi, TripletApi};
use crate::error::{Error, Result};

use super::resolve::resolve_group;

fn resolve_rights_group<C: RightsGroupApi + ?Sized>(client: &C, name: &str) -> Result<RightsGroup> {
    let groups = client.list_rights_groups(None)?;
    let mut matches: Vec<RightsGroup> = groups.into_iter().filter(|g| g.name == name).collect();
    match matches.len() {
        1 => Ok(matches.remove(0)),
        0 => Err(Error::NotFound {
            kind: "rights group",
            name: name.to_string(),
        }),
        count => Err(Error::Ambiguous {
            kind: "rights group",
            name: name.to_string(),
            count,
        }),
    }
}

/// Create a triplet binding a technician group, a rights group and an agent
/// group.
///
/// All three groups are resolved up front; any lookup failure aborts before
/// the create call. An absent `expires_at` means the binding never expires.
pub fn create_triplet<C: GroupApi + RightsGroupApi + TripletApi + ?Sized>(
    client: &C,
    name: Option<&str>,
    technician_group: &GroupRef,
    rights_group: &str,
    agent_group: &GroupRef,
    expires_at: Option<DateTime<Utc>>,
) -> Result<Triplet> {
    let technicians = resolve_group(client, GroupKind::Technician, technician_group)?;
    let rights = resolve_rights_group(client, rights_group)?;
    let agents = resolve_group(client, GroupKind::Agent, agent_group)?;

    let triplet = client.create_triplet(CreateTripletRequest {
        name: name.map(str::to_string),
        technician_group_id: technicians.id,
        rights_group_id: rights.id,
        agent_group_id: agents.id,
        expires_at,
    })?;
    info!(
        "created triplet {} ({} / {} / {})",
        triplet.id, technicians.name, rights.name, agents.name
    );
    Ok(triplet)
}
