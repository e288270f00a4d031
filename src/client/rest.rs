//! AccessHub REST client implementation
//!
//! One executor normalizes the service's irregular call conventions: the
//! standard convention carries auth in the query string and JSON bodies,
//! while a handful of listing endpoints require the legacy GET-with-body
//! convention (credentials form-encoded in a request body, even on GET).
//! The two are transport modes on the same client, selected per endpoint,
//! so a future service-side correction only changes a mode flag here.

use std::time::Duration;

use log::debug;
use reqwest::Method;
use reqwest::Url;
use reqwest::blocking::{Client as HttpClient, Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::api::{AgentApi, ApiKeyApi, GroupApi, LeafApi, RightsGroupApi, TechnicianApi, TripletApi};
use super::filter::NameFilter;
use super::models::{
    Agent, AgentOption, ApiKeyRecord, CreateGroupRequest, CreateLeafRequest,
    CreateTechnicianRequest, CreateTripletRequest, GroupDetail, GroupKind, GroupSummary, Leaf,
    RightsGroup, Technician, TechnicianOption, TechnicianStatus, Triplet,
    UpdateTechnicianRequest, UpdateTripletRequest,
};
use crate::config::{Credential, REDACTED};
use crate::error::{ApiError, ConfigError, Result};

/// Path prefix of every API endpoint
const API_PREFIX: &str = "api/v1";

/// Fixed auth-method marker the service expects on every call
const AUTH_METHOD: &str = "local";

/// Request timeout for every call
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// How a request travels to the service.
///
/// `Standard` is the normalized convention: principal and auth-method marker
/// in the query string, JSON bodies. `LegacyList` is the deviation a subset
/// of listing endpoints require: method fixed to GET, credentials travel as
/// a form-encoded body instead of the query string, no JSON content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Transport {
    Standard,
    LegacyList,
}

/// Observer hook receiving each constructed request before dispatch.
///
/// The trace carries the fully-built URL and header set with the API key
/// masked; the raw secret is never observable. Purely diagnostic: observers
/// cannot alter request semantics.
pub trait RequestObserver {
    fn on_request(&self, trace: &RequestTrace);
}

/// A constructed request, as shown to a [`RequestObserver`]
#[derive(Debug, Clone)]
pub struct RequestTrace {
    pub method: String,
    pub url: String,
    /// Header name/value pairs; the Authorization value is redacted
    pub headers: Vec<(String, String)>,
}

/// AccessHub API client.
///
/// Synchronous and blocking throughout: each call runs to completion before
/// the next begins, matching the service's lack of any batching or
/// concurrency contract.
pub struct RestClient {
    http: HttpClient,
    credential: Credential,
    observer: Option<Box<dyn RequestObserver>>,
}

impl RestClient {
    /// Create a new client for the given resolved credential
    pub fn new(credential: Credential) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            credential,
            observer: None,
        })
    }

    /// Attach a request observer (debug tracing)
    pub fn with_observer(mut self, observer: Box<dyn RequestObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// The host this client talks to
    pub fn host(&self) -> &str {
        &self.credential.host
    }

    // ── Request plumbing ─────────────────────────────────────────────

    /// Build the full URL for an endpoint.
    ///
    /// Endpoint segments are percent-encoded individually, so identifiers
    /// embedded in the path (e.g. a leaf path with spaces) stay intact. On
    /// the standard transport the principal and auth-method marker always
    /// ride the query string; extra parameters are appended after them
    /// (collisions are last-write-wins, per the service's behavior).
    fn endpoint_url(
        &self,
        endpoint: &str,
        extra_query: &[(&str, String)],
        transport: Transport,
    ) -> Result<Url> {
        let mut url = Url::parse(&self.credential.host)
            .map_err(|e| ConfigError::Invalid(format!("invalid host URL: {e}")))?;

        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ConfigError::Invalid("host URL cannot be a base".to_string()))?;
            segments.pop_if_empty();
            segments.extend(API_PREFIX.split('/'));
            segments.extend(endpoint.split('/'));
        }

        if transport == Transport::Standard {
            url.query_pairs_mut()
                .append_pair("Email", &self.credential.principal)
                .append_pair("authenticationmethod", AUTH_METHOD);
        }
        for (key, value) in extra_query {
            url.query_pairs_mut().append_pair(key, value);
        }

        Ok(url)
    }

    /// Build, trace, dispatch, and status-check one request
    fn run<B: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
        extra_query: &[(&str, String)],
        transport: Transport,
    ) -> Result<Response> {
        let url = self.endpoint_url(endpoint, extra_query, transport)?;

        let mut builder = self
            .http
            .request(method, url)
            .header(
                "Authorization",
                format!("APIKey {}", self.credential.secret.expose()),
            )
            .header("Accept", "application/json");

        builder = match transport {
            Transport::Standard => match body {
                Some(body) => builder.json(body),
                None => builder,
            },
            // Legacy listing calls: the auth pair travels form-encoded in
            // the body, even though the method is GET.
            Transport::LegacyList => builder.form(&[
                ("Email", self.credential.principal.as_str()),
                ("authenticationmethod", AUTH_METHOD),
            ]),
        };

        let request = builder.build().map_err(ApiError::from)?;
        self.trace(&request);
        debug!("{} {}", request.method(), request.url());

        let response = self.http.execute(request).map_err(ApiError::from)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_else(|_| String::new());
            return Err(ApiError::Status {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
                message,
            }
            .into());
        }

        Ok(response)
    }

    /// Hand the constructed request to the observer, key masked
    fn trace(&self, request: &Request) {
        let Some(observer) = &self.observer else {
            return;
        };

        let headers = request
            .headers()
            .iter()
            .map(|(name, value)| {
                let value = if name.as_str() == "authorization" {
                    format!("APIKey {REDACTED}")
                } else {
                    value.to_str().unwrap_or("<non-ascii>").to_string()
                };
                (name.to_string(), value)
            })
            .collect();

        observer.on_request(&RequestTrace {
            method: request.method().to_string(),
            url: request.url().to_string(),
            headers,
        });
    }

    fn parse_json<T: DeserializeOwned>(endpoint: &str, response: Response) -> Result<T> {
        response.json::<T>().map_err(|e| {
            ApiError::InvalidResponse(format!(
                "failed to parse response from '{endpoint}': {e}"
            ))
            .into()
        })
    }

    // ── Typed helpers over `run` ─────────────────────────────────────

    fn get<T: DeserializeOwned>(&self, endpoint: &str, query: &[(&str, String)]) -> Result<T> {
        let response = self.run(Method::GET, endpoint, None::<&()>, query, Transport::Standard)?;
        Self::parse_json(endpoint, response)
    }

    fn get_legacy<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let response = self.run(Method::GET, endpoint, None::<&()>, &[], Transport::LegacyList)?;
        Self::parse_json(endpoint, response)
    }

    fn post<T: DeserializeOwned, B: Serialize>(&self, endpoint: &str, body: &B) -> Result<T> {
        let response = self.run(Method::POST, endpoint, Some(body), &[], Transport::Standard)?;
        Self::parse_json(endpoint, response)
    }

    fn put<T: DeserializeOwned, B: Serialize>(&self, endpoint: &str, body: &B) -> Result<T> {
        let response = self.run(Method::PUT, endpoint, Some(body), &[], Transport::Standard)?;
        Self::parse_json(endpoint, response)
    }

    fn put_no_content<B: Serialize>(
        &self,
        endpoint: &str,
        body: Option<&B>,
        query: &[(&str, String)],
    ) -> Result<()> {
        self.run(Method::PUT, endpoint, body, query, Transport::Standard)?;
        Ok(())
    }

    fn delete(&self, endpoint: &str) -> Result<()> {
        self.run(Method::DELETE, endpoint, None::<&()>, &[], Transport::Standard)?;
        Ok(())
    }
}

/// Apply an optional client-side name filter to a fetched collection
fn filtered<T>(
    items: Vec<T>,
    filter: Option<&NameFilter>,
    name_of: impl Fn(&T) -> &str,
) -> Vec<T> {
    match filter {
        Some(filter) => filter.apply(items, name_of),
        None => items,
    }
}

// ============================================================================
// TechnicianApi
// ============================================================================

impl TechnicianApi for RestClient {
    fn list_technicians(&self, filter: Option<&NameFilter>) -> Result<Vec<Technician>> {
        let technicians: Vec<Technician> = self.get_legacy("technicians")?;
        Ok(filtered(technicians, filter, |t| t.name.as_str()))
    }

    fn create_technician(&self, request: CreateTechnicianRequest) -> Result<Technician> {
        self.post("technicians", &request)
    }

    fn update_technician(&self, id: u64, request: UpdateTechnicianRequest) -> Result<Technician> {
        self.put(&format!("technicians/{id}"), &request)
    }

    fn delete_technician(&self, id: u64) -> Result<()> {
        self.delete(&format!("technicians/{id}"))
    }

    fn set_technician_status(&self, id: u64, status: TechnicianStatus) -> Result<()> {
        #[derive(Serialize)]
        #[serde(rename_all = "PascalCase")]
        struct StatusBody {
            status: TechnicianStatus,
        }

        self.put_no_content(
            &format!("technicians/{id}/status"),
            Some(&StatusBody { status }),
            &[],
        )
    }

    fn set_technician_option(&self, id: u64, option: &TechnicianOption) -> Result<()> {
        option.validate()?;

        // This endpoint addresses the technician via a query parameter, not
        // the path.
        let query = [
            ("technicianid", id.to_string()),
            ("name", option.key().to_string()),
            ("value", option.value()),
        ];
        self.put_no_content("technicians/options", None::<&()>, &query)
    }
}

// ============================================================================
// AgentApi
// ============================================================================

impl AgentApi for RestClient {
    fn list_agents(&self, filter: Option<&NameFilter>) -> Result<Vec<Agent>> {
        let agents: Vec<Agent> = self.get_legacy("agents")?;
        Ok(filtered(agents, filter, |a| a.name.as_str()))
    }

    fn get_agent_info(&self, id: u64) -> Result<Agent> {
        self.get(&format!("agents/{id}/info"), &[])
    }

    fn set_agent_option(&self, id: u64, option: &AgentOption) -> Result<()> {
        option.validate()?;

        #[derive(Serialize)]
        #[serde(rename_all = "PascalCase")]
        struct OptionBody {
            name: String,
            value: String,
        }

        self.put_no_content(
            &format!("agents/{id}/options"),
            Some(&OptionBody {
                name: option.key().to_string(),
                value: option.value(),
            }),
            &[],
        )
    }

    fn assign_account_leaf(&self, agent_id: u64, leaf_path: &str) -> Result<()> {
        // The leaf path is one path segment; endpoint_url percent-encodes it.
        self.put_no_content(
            &format!("agents/{agent_id}/accountleaf/{leaf_path}"),
            None::<&()>,
            &[],
        )
    }
}

// ============================================================================
// GroupApi / RightsGroupApi
// ============================================================================

impl GroupApi for RestClient {
    fn list_groups(
        &self,
        kind: GroupKind,
        filter: Option<&NameFilter>,
    ) -> Result<Vec<GroupSummary>> {
        let groups: Vec<GroupSummary> = self.get_legacy(kind.collection())?;
        Ok(filtered(groups, filter, |g| g.name.as_str()))
    }

    fn get_group(&self, kind: GroupKind, id: u64) -> Result<GroupDetail> {
        // Group detail fetches share the legacy listing convention.
        self.get_legacy(&format!("{}/{id}", kind.collection()))
    }

    fn create_group(&self, kind: GroupKind, request: CreateGroupRequest) -> Result<GroupSummary> {
        self.post(kind.collection(), &request)
    }

    fn delete_group_record(&self, kind: GroupKind, id: u64) -> Result<()> {
        self.delete(&format!("{}/{id}", kind.collection()))
    }

    fn add_group_member(&self, kind: GroupKind, group_id: u64, member_id: u64) -> Result<()> {
        self.put_no_content(
            &format!("{}/{group_id}/{}/{member_id}", kind.collection(), kind.edge()),
            None::<&()>,
            &[],
        )
    }

    fn remove_group_member(&self, kind: GroupKind, group_id: u64, member_id: u64) -> Result<()> {
        self.delete(&format!(
            "{}/{group_id}/{}/{member_id}",
            kind.collection(),
            kind.edge()
        ))
    }
}

impl RightsGroupApi for RestClient {
    fn list_rights_groups(&self, filter: Option<&NameFilter>) -> Result<Vec<RightsGroup>> {
        let groups: Vec<RightsGroup> = self.get("rightsgroups", &[])?;
        Ok(filtered(groups, filter, |g| g.name.as_str()))
    }
}

// ============================================================================
// LeafApi
// ============================================================================

impl LeafApi for RestClient {
    fn list_leafs(&self, filter: Option<&NameFilter>) -> Result<Vec<Leaf>> {
        let leafs: Vec<Leaf> = self.get_legacy("leafs")?;
        Ok(filtered(leafs, filter, |l| l.path.as_str()))
    }

    fn get_leaf(&self, id: u64) -> Result<Leaf> {
        self.get(&format!("leafs/{id}"), &[])
    }

    fn create_leaf(&self, request: CreateLeafRequest) -> Result<Leaf> {
        self.post("leafs", &request)
    }

    fn delete_leaf(&self, id: u64) -> Result<()> {
        self.delete(&format!("leafs/{id}"))
    }
}

// ============================================================================
// TripletApi
// ============================================================================

impl TripletApi for RestClient {
    fn list_triplets(&self) -> Result<Vec<Triplet>> {
        self.get("triplets", &[])
    }

    fn get_triplet(&self, id: u64) -> Result<Triplet> {
        self.get(&format!("triplets/{id}"), &[])
    }

    fn create_triplet(&self, request: CreateTripletRequest) -> Result<Triplet> {
        self.post("triplets", &request)
    }

    fn update_triplet(&self, id: u64, request: UpdateTripletRequest) -> Result<Triplet> {
        self.put(&format!("triplets/{id}"), &request)
    }

    fn delete_triplet(&self, id: u64) -> Result<()> {
        self.delete(&format!("triplets/{id}"))
    }
}

// ============================================================================
// ApiKeyApi
// ============================================================================

impl ApiKeyApi for RestClient {
    fn list_api_keys(&self) -> Result<Vec<ApiKeyRecord>> {
        self.get_legacy("apikeys")
    }
}
