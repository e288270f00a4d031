//! Reference sum types for addressing records
//!
//! Callers name a target one of several explicit ways; accessors and
//! orchestrators pattern match these instead of sniffing the shape of a
//! passed value at runtime. Resolution of a reference to exactly one record
//! lives in [`crate::ops`].

use super::{Agent, Technician};

/// How a technician is addressed
#[derive(Debug, Clone)]
pub enum TechnicianRef {
    /// By unique account name; zero or multiple matches is an error
    ByName(String),
    /// By service-assigned id
    ById(u64),
    /// An already-resolved record; no lookup is performed
    Resolved(Technician),
}

impl TechnicianRef {
    pub fn by_name(name: impl Into<String>) -> Self {
        TechnicianRef::ByName(name.into())
    }
}

/// How an agent is addressed.
///
/// `ById` and `ByGuid` are equivalent: both identifiers refer to the same
/// underlying record for its lifetime. `ByName` must resolve to exactly one
/// record; agent names are not guaranteed unique.
#[derive(Debug, Clone)]
pub enum AgentRef {
    ByName(String),
    ById(u64),
    ByGuid(String),
    /// An already-resolved record; no lookup is performed
    Resolved(Agent),
}

impl AgentRef {
    pub fn by_name(name: impl Into<String>) -> Self {
        AgentRef::ByName(name.into())
    }

    pub fn by_guid(guid: impl Into<String>) -> Self {
        AgentRef::ByGuid(guid.into())
    }
}

/// How a group is addressed
#[derive(Debug, Clone)]
pub enum GroupRef {
    ByName(String),
    ById(u64),
}

impl GroupRef {
    pub fn by_name(name: impl Into<String>) -> Self {
        GroupRef::ByName(name.into())
    }
}
