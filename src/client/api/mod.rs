//! API trait definitions split by resource
//!
//! This module organizes the AccessHub API surface into focused traits, one
//! per resource kind:
//! - [`TechnicianApi`] - Technician accounts
//! - [`AgentApi`] - Managed domain accounts
//! - [`GroupApi`] / [`RightsGroupApi`] - Entity groups and rights groups
//! - [`LeafApi`] - Organizational leafs
//! - [`TripletApi`] - Standing access grants
//! - [`ApiKeyApi`] - Registered API keys
//!
//! The [`AccessHubApi`](super::AccessHubApi) super-trait combines them all.

mod agent;
mod apikey;
mod group;
mod leaf;
mod technician;
mod triplet;

pub use agent::AgentApi;
pub use apikey::ApiKeyApi;
pub use group::{GroupApi, RightsGroupApi};
pub use leaf::LeafApi;
pub use technician::TechnicianApi;
pub use triplet::TripletApi;
