//! Group membership changes and group deletion

use log::{debug, info};

use crate::client::models::{AgentRef, GroupKind, GroupRef, TechnicianRef};
use crate::client::{AgentApi, GroupApi, TechnicianApi};
use crate::error::{Error, PartialCompletion, Result};

use super::resolve::{resolve_agent, resolve_group, resolve_technician};

/// What a membership change actually did.
///
/// Requests that find the membership already in the desired state succeed
/// without issuing a mutating call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberOutcome {
    /// A mutating call was issued and applied
    Applied,
    /// The membership was already in the requested state
    AlreadySatisfied,
}

fn apply_membership<C: GroupApi + ?Sized>(
    client: &C,
    kind: GroupKind,
    group: &GroupRef,
    member_id: u64,
    add: bool,
) -> Result<MemberOutcome> {
    let group = resolve_group(client, kind, group)?;
    // Fresh detail fetch: the idempotence check must see current membership,
    // not a cached view.
    let detail = client.get_group(kind, group.id)?;
    let present = detail.members.iter().any(|m| m.id == member_id);
    if present == add {
        debug!(
            "{} '{}' membership for {} already in desired state",
            kind.label(),
            group.name,
            member_id
        );
        return Ok(MemberOutcome::AlreadySatisfied);
    }
    if add {
        client.add_group_member(kind, group.id, member_id)?;
    } else {
        client.remove_group_member(kind, group.id, member_id)?;
    }
    Ok(MemberOutcome::Applied)
}

/// Add a technician to a technician group
pub fn add_technician_to_group<C: TechnicianApi + GroupApi + ?Sized>(
    client: &C,
    group: &GroupRef,
    technician: &TechnicianRef,
) -> Result<MemberOutcome> {
    let technician = resolve_technician(client, technician)?;
    apply_membership(client, GroupKind::Technician, group, technician.id, true)
}

/// Remove a technician from a technician group
pub fn remove_technician_from_group<C: TechnicianApi + GroupApi + ?Sized>(
    client: &C,
    group: &GroupRef,
    technician: &TechnicianRef,
) -> Result<MemberOutcome> {
    let technician = resolve_technician(client, technician)?;
    apply_membership(client, GroupKind::Technician, group, technician.id, false)
}

/// Add an agent to an agent group
pub fn add_agent_to_group<C: AgentApi + GroupApi + ?Sized>(
    client: &C,
    group: &GroupRef,
    agent: &AgentRef,
) -> Result<MemberOutcome> {
    let agent = resolve_agent(client, agent)?;
    apply_membership(client, GroupKind::Agent, group, agent.id, true)
}

/// Remove an agent from an agent group
pub fn remove_agent_from_group<C: AgentApi + GroupApi + ?Sized>(
    client: &C,
    group: &GroupRef,
    agent: &AgentRef,
) -> Result<MemberOutcome> {
    let agent = resolve_agent(client, agent)?;
    apply_membership(client, GroupKind::Agent, group, agent.id, false)
}

/// Delete a group, evacuating its members first.
///
/// The service rejects deletion of a non-empty group, so every member is
/// removed one at a time in the order the detail record lists them, then the
/// group record itself is deleted. A failure partway through leaves the
/// already-removed members removed; the error reports how far the operation
/// got so the caller can rerun it (reruns skip nothing but are safe, removal
/// of the remaining members simply continues).
pub fn delete_group<C: GroupApi + ?Sized>(
    client: &C,
    kind: GroupKind,
    group: &GroupRef,
) -> Result<()> {
    let summary = resolve_group(client, kind, group)?;
    let detail = client.get_group(kind, summary.id)?;
    let operation = format!("delete {} '{}'", kind.label(), summary.name);
    let total = detail.members.len() + 1;

    for (done, member) in detail.members.iter().enumerate() {
        debug!(
            "evacuating '{}' from {} '{}'",
            member.name,
            kind.label(),
            summary.name
        );
        if let Err(source) = client.remove_group_member(kind, summary.id, member.id) {
            return Err(PartialCompletion {
                operation: operation.clone(),
                failed_step: format!("remove member '{}'", member.name),
                completed: done,
                total,
                source: Box::new(source),
            }
            .into());
        }
    }

    if let Err(source) = client.delete_group_record(kind, summary.id) {
        return Err(PartialCompletion {
            operation,
            failed_step: "delete group record".to_string(),
            completed: detail.members.len(),
            total,
            source: Box::new(source),
        }
        .into());
    }
    info!("deleted {} '{}'", kind.label(), summary.name);
    Ok(())
}
