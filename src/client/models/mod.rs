//! AccessHub API data models
//!
//! Domain types returned by the service plus the request payloads for
//! mutating calls. The wire format is PascalCase JSON throughout.

mod agent;
mod apikey;
mod group;
mod leaf;
mod options;
mod refs;
mod technician;
mod triplet;

pub use agent::Agent;
pub use apikey::ApiKeyRecord;
pub use group::{CreateGroupRequest, GroupDetail, GroupKind, GroupMember, GroupSummary, RightsGroup};
pub use leaf::{CreateLeafRequest, Leaf};
pub use options::{AgentLogLevel, AgentOption, TechnicianOption};
pub use refs::{AgentRef, GroupRef, TechnicianRef};
pub use technician::{CreateTechnicianRequest, Technician, TechnicianStatus, UpdateTechnicianRequest};
pub use triplet::{CreateTripletRequest, Triplet, UpdateTripletRequest};
