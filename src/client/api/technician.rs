//! Technician API trait

use crate::client::filter::NameFilter;
use crate::client::models::{
    CreateTechnicianRequest, Technician, TechnicianOption, TechnicianStatus,
    UpdateTechnicianRequest,
};
use crate::error::Result;

/// Technician account operations
pub trait TechnicianApi {
    /// List technicians, optionally filtered client-side by name pattern.
    ///
    /// The listing endpoint uses the legacy GET-with-body convention.
    fn list_technicians(&self, filter: Option<&NameFilter>) -> Result<Vec<Technician>>;

    /// Create a technician account
    fn create_technician(&self, request: CreateTechnicianRequest) -> Result<Technician>;

    /// Update a technician account by id
    fn update_technician(&self, id: u64, request: UpdateTechnicianRequest) -> Result<Technician>;

    /// Delete a technician account by id
    fn delete_technician(&self, id: u64) -> Result<()>;

    /// Set the account status (active/disabled/pending)
    fn set_technician_status(&self, id: u64, status: TechnicianStatus) -> Result<()>;

    /// Set a recognized technician option.
    ///
    /// The option value is validated against its declared domain before any
    /// network call. The endpoint addresses the technician by id via a query
    /// parameter, not the path.
    fn set_technician_option(&self, id: u64, option: &TechnicianOption) -> Result<()>;
}
