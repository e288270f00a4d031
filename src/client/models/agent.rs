//! Agent (domain account) models

use serde::{Deserialize, Serialize};

/// A managed domain account.
///
/// Two independent identifiers exist: `id` (the mutable-call target) and
/// `guid` (the externally-stable cross-reference). Both address the same
/// record for its lifetime. The `name` is often of `HOST\Account` form and
/// is not guaranteed unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Agent {
    /// Internal id, target of mutating calls
    pub id: u64,

    /// Externally-stable GUID
    pub guid: String,

    /// Account name, e.g. `HOST\Admin` (not guaranteed unique)
    pub name: String,

    /// Id of the organizational leaf this account is assigned to, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_leaf_id: Option<u64>,
}
