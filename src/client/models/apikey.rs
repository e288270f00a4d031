//! API key record models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered API key, as listed by the service.
///
/// Only metadata travels on this record; the service never echoes key
/// material back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiKeyRecord {
    pub id: u64,

    /// Operator-chosen label for the key
    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}
