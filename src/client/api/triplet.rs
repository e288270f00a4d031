//! Triplet API trait

use crate::client::models::{CreateTripletRequest, Triplet, UpdateTripletRequest};
use crate::error::Result;

/// Standing access grant operations
pub trait TripletApi {
    /// List all triplets
    fn list_triplets(&self) -> Result<Vec<Triplet>>;

    /// Fetch a triplet by id
    fn get_triplet(&self, id: u64) -> Result<Triplet>;

    /// Create a triplet binding a technician group, a rights group and an
    /// agent group. Group references are ids: name resolution happens in
    /// [`crate::ops::create_triplet`].
    fn create_triplet(&self, request: CreateTripletRequest) -> Result<Triplet>;

    /// Update a triplet's name or expiration by id
    fn update_triplet(&self, id: u64, request: UpdateTripletRequest) -> Result<Triplet>;

    /// Delete a triplet by id
    fn delete_triplet(&self, id: u64) -> Result<()>;
}
