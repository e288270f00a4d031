//! AccessHub API client

pub mod api;
pub mod filter;
pub mod models;
pub mod rest;

#[cfg(test)]
pub mod mock;

pub use api::{AgentApi, ApiKeyApi, GroupApi, LeafApi, RightsGroupApi, TechnicianApi, TripletApi};
pub use filter::NameFilter;
#[cfg(test)]
pub use mock::MockClient;
pub use rest::{RequestObserver, RequestTrace, RestClient};

/// The full AccessHub API surface: every per-resource trait combined.
///
/// Implemented automatically for any type implementing all of them
/// ([`RestClient`] against the live service, the mock client in tests).
pub trait AccessHubApi:
    TechnicianApi + AgentApi + GroupApi + RightsGroupApi + LeafApi + TripletApi + ApiKeyApi
{
}

impl<T> AccessHubApi for T where
    T: TechnicianApi + AgentApi + GroupApi + RightsGroupApi + LeafApi + TripletApi + ApiKeyApi
{
}
