//! Reference resolution with the exactly-one gate

use crate::client::models::{Agent, AgentRef, GroupKind, GroupRef, GroupSummary, Technician, TechnicianRef};
use crate::client::{AgentApi, GroupApi, TechnicianApi};
use crate::error::{Error, Result};

/// Reduce name-lookup matches to exactly one record.
///
/// Zero or multiple matches is a failure, never a best-effort pick.
fn exactly_one<T>(mut matches: Vec<T>, kind: &'static str, name: &str) -> Result<T> {
    match matches.len() {
        1 => Ok(matches.remove(0)),
        0 => Err(Error::NotFound {
            kind,
            name: name.to_string(),
        }),
        count => Err(Error::Ambiguous {
            kind,
            name: name.to_string(),
            count,
        }),
    }
}

/// Resolve a technician reference to exactly one record
pub fn resolve_technician<C: TechnicianApi + ?Sized>(
    client: &C,
    target: &TechnicianRef,
) -> Result<Technician> {
    match target {
        TechnicianRef::Resolved(technician) => Ok(technician.clone()),
        TechnicianRef::ById(id) => {
            let technicians = client.list_technicians(None)?;
            technicians
                .into_iter()
                .find(|t| t.id == *id)
                .ok_or(Error::NotFound {
                    kind: "technician",
                    name: id.to_string(),
                })
        }
        TechnicianRef::ByName(name) => {
            let technicians = client.list_technicians(None)?;
            let matches: Vec<Technician> = technicians
                .into_iter()
                .filter(|t| t.name == *name)
                .collect();
            exactly_one(matches, "technician", name)
        }
    }
}

/// Resolve an agent reference to exactly one record.
///
/// Id and GUID address the same record and resolve equivalently; names are
/// not guaranteed unique and pass through the exactly-one gate.
pub fn resolve_agent<C: AgentApi + ?Sized>(client: &C, target: &AgentRef) -> Result<Agent> {
    match target {
        AgentRef::Resolved(agent) => Ok(agent.clone()),
        AgentRef::ById(id) => client.get_agent_info(*id),
        AgentRef::ByGuid(guid) => {
            let agents = client.list_agents(None)?;
            let matches: Vec<Agent> = agents.into_iter().filter(|a| a.guid == *guid).collect();
            exactly_one(matches, "agent", guid)
        }
        AgentRef::ByName(name) => {
            let agents = client.list_agents(None)?;
            let matches: Vec<Agent> = agents.into_iter().filter(|a| a.name == *name).collect();
            exactly_one(matches, "agent", name)
        }
    }
}

/// Resolve a group reference to exactly one summary record
pub fn resolve_group<C: GroupApi + ?Sized>(
    client: &C,
    kind: GroupKind,
    target: &GroupRef,
) -> Result<GroupSummary> {
    let groups = client.list_groups(kind, None)?;
    match target {
        GroupRef::ById(id) => groups
            .into_iter()
            .find(|g| g.id == *id)
            .ok_or(Error::NotFound {
                kind: kind.label(),
                name: id.to_string(),
            }),
        GroupRef::ByName(name) => {
            let matches: Vec<GroupSummary> =
                groups.into_iter().filter(|g| g.name == *name).collect();
            exactly_one(matches, kind.label(), name)
        }
    }
}
