//! Organizational leaf models

use serde::{Deserialize, Serialize};

/// An organizational leaf.
///
/// The path is dot-separated, e.g. `Company.Customer.Site`. The service does
/// not guarantee path uniqueness; this client treats an ambiguous path match
/// as an error rather than silently picking one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Leaf {
    pub id: u64,

    /// Hierarchical dot-separated path
    pub path: String,
}

/// Payload for creating a leaf
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateLeafRequest {
    pub path: String,
}
