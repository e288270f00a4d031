//! API key listing trait

use crate::client::models::ApiKeyRecord;
use crate::error::Result;

/// Registered API key operations.
///
/// The listing endpoint uses the legacy GET-with-body convention. Key
/// material never travels on these records.
pub trait ApiKeyApi {
    /// List registered API keys
    fn list_api_keys(&self) -> Result<Vec<ApiKeyRecord>>;
}
