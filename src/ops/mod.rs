//! Mutating orchestrators
//!
//! Compound operations that look a target up before mutating it. Each is a
//! short linear sequence with an abort-on-ambiguity gate: targets addressed
//! by name must resolve to exactly one record before any mutating call is
//! issued, mutating calls always use resolved identifiers, and a step
//! failure aborts the remaining steps with no compensating rollback (the
//! service offers no multi-resource transaction primitive).

mod groups;
mod leafs;
mod resolve;
mod triplets;

pub use groups::{
    MemberOutcome, add_agent_to_group, add_technician_to_group, delete_group,
    remove_agent_from_group, remove_technician_from_group,
};
pub use leafs::{LeafAssignment, assign_agent_leaf, delete_leaf_by_path};
pub use resolve::{resolve_agent, resolve_group, resolve_technician};
pub use triplets::create_triplet;
