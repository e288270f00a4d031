//! Organizational leaf API trait

use crate::client::filter::NameFilter;
use crate::client::models::{CreateLeafRequest, Leaf};
use crate::error::Result;

/// Organizational leaf operations
pub trait LeafApi {
    /// List leafs, optionally filtered client-side by path pattern.
    ///
    /// The listing endpoint uses the legacy GET-with-body convention.
    fn list_leafs(&self, filter: Option<&NameFilter>) -> Result<Vec<Leaf>>;

    /// Fetch a single leaf by id
    fn get_leaf(&self, id: u64) -> Result<Leaf>;

    /// Create a leaf with the given dot-separated path
    fn create_leaf(&self, request: CreateLeafRequest) -> Result<Leaf>;

    /// Delete a leaf by id
    fn delete_leaf(&self, id: u64) -> Result<()>;
}
