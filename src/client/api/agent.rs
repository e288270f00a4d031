//! Agent API trait

use crate::client::filter::NameFilter;
use crate::client::models::{Agent, AgentOption};
use crate::error::Result;

/// Managed domain account operations
pub trait AgentApi {
    /// List agents, optionally filtered client-side by name pattern.
    ///
    /// The listing endpoint uses the legacy GET-with-body convention.
    /// Names of `HOST\Account` form are not guaranteed unique; callers
    /// needing a single record resolve through [`crate::ops::resolve_agent`].
    fn list_agents(&self, filter: Option<&NameFilter>) -> Result<Vec<Agent>>;

    /// Fetch the detail-info view of a single agent by id
    fn get_agent_info(&self, id: u64) -> Result<Agent>;

    /// Set a recognized agent option.
    ///
    /// The option value is validated against its declared domain before any
    /// network call.
    fn set_agent_option(&self, id: u64, option: &AgentOption) -> Result<()>;

    /// Assign the agent's account to an organizational leaf by path.
    ///
    /// The path travels percent-encoded inside the endpoint path
    /// (`agents/{id}/accountleaf/{encodedPath}`). The leaf must already
    /// exist; [`crate::ops::assign_agent_leaf`] creates it first if needed.
    fn assign_account_leaf(&self, agent_id: u64, leaf_path: &str) -> Result<()>;
}
