//! Mock AccessHub client for testing
//!
//! Implements every API trait over in-memory fixtures so membership and
//! orchestrator logic can be tested without network access. Tracks per-call
//! counts so tests can assert exactly which calls were (and were not) made.

use std::sync::Mutex;

use super::api::{AgentApi, ApiKeyApi, GroupApi, LeafApi, RightsGroupApi, TechnicianApi, TripletApi};
use super::filter::NameFilter;
use super::models::{
    Agent, AgentOption, ApiKeyRecord, CreateGroupRequest, CreateLeafRequest,
    CreateTechnicianRequest, CreateTripletRequest, GroupDetail, GroupKind, GroupMember,
    GroupSummary, Leaf, RightsGroup, Technician, TechnicianOption, TechnicianStatus, Triplet,
    UpdateTechnicianRequest, UpdateTripletRequest,
};
use crate::error::{ApiError, Error, Result};

/// Mock API client for testing.
///
/// Configure fixtures via builder methods, then pass anywhere an API trait
/// is expected. Mutations update the in-memory fixtures so multi-step
/// sequences observe their own side effects.
#[derive(Default)]
pub struct MockClient {
    technicians: Mutex<Vec<Technician>>,
    agents: Mutex<Vec<Agent>>,
    tech_groups: Mutex<Vec<GroupSummary>>,
    tech_group_details: Mutex<Vec<GroupDetail>>,
    agent_groups: Mutex<Vec<GroupSummary>>,
    agent_group_details: Mutex<Vec<GroupDetail>>,
    leafs: Mutex<Vec<Leaf>>,
    triplets: Mutex<Vec<Triplet>>,
    rights_groups: Mutex<Vec<RightsGroup>>,
    api_keys: Mutex<Vec<ApiKeyRecord>>,
    /// One-shot error returned by the next call, then cleared
    error: Mutex<Option<ApiError>>,
    /// Fail the Nth remove_group_member call (1-based)
    fail_remove_member_at: Mutex<Option<usize>>,
    /// Captured (agent_id, leaf_path) pairs from assign_account_leaf
    assigned_leafs: Mutex<Vec<(u64, String)>>,
    counts: Mutex<CallCounts>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub list_technicians: usize,
    pub create_technician: usize,
    pub update_technician: usize,
    pub delete_technician: usize,
    pub set_technician_status: usize,
    pub set_technician_option: usize,
    pub list_agents: usize,
    pub get_agent_info: usize,
    pub set_agent_option: usize,
    pub assign_account_leaf: usize,
    pub list_groups: usize,
    pub get_group: usize,
    pub create_group: usize,
    pub delete_group_record: usize,
    pub add_group_member: usize,
    pub remove_group_member: usize,
    pub list_rights_groups: usize,
    pub list_leafs: usize,
    pub get_leaf: usize,
    pub create_leaf: usize,
    pub delete_leaf: usize,
    pub list_triplets: usize,
    pub get_triplet: usize,
    pub create_triplet: usize,
    pub update_triplet: usize,
    pub delete_triplet: usize,
    pub list_api_keys: usize,
}

impl CallCounts {
    /// Number of mutating calls issued. The ambiguity-gate and idempotence
    /// properties assert this stays zero.
    pub fn mutating_total(&self) -> usize {
        self.create_technician
            + self.update_technician
            + self.delete_technician
            + self.set_technician_status
            + self.set_technician_option
            + self.set_agent_option
            + self.assign_account_leaf
            + self.create_group
            + self.delete_group_record
            + self.add_group_member
            + self.remove_group_member
            + self.create_leaf
            + self.delete_leaf
            + self.create_triplet
            + self.update_triplet
            + self.delete_triplet
    }
}

fn filtered<T: Clone>(
    items: &[T],
    filter: Option<&NameFilter>,
    name_of: impl Fn(&T) -> &str,
) -> Vec<T> {
    items
        .iter()
        .filter(|item| filter.is_none_or(|f| f.matches(name_of(item))))
        .cloned()
        .collect()
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_technicians(self, technicians: Vec<Technician>) -> Self {
        *self.technicians.lock().unwrap() = technicians;
        self
    }

    pub fn with_agents(self, agents: Vec<Agent>) -> Self {
        *self.agents.lock().unwrap() = agents;
        self
    }

    pub fn with_groups(self, kind: GroupKind, groups: Vec<GroupSummary>) -> Self {
        *self.groups_of(kind).lock().unwrap() = groups;
        self
    }

    pub fn with_group_details(self, kind: GroupKind, details: Vec<GroupDetail>) -> Self {
        *self.details_of(kind).lock().unwrap() = details;
        self
    }

    pub fn with_leafs(self, leafs: Vec<Leaf>) -> Self {
        *self.leafs.lock().unwrap() = leafs;
        self
    }

    pub fn with_triplets(self, triplets: Vec<Triplet>) -> Self {
        *self.triplets.lock().unwrap() = triplets;
        self
    }

    pub fn with_rights_groups(self, groups: Vec<RightsGroup>) -> Self {
        *self.rights_groups.lock().unwrap() = groups;
        self
    }

    pub fn with_api_keys(self, keys: Vec<ApiKeyRecord>) -> Self {
        *self.api_keys.lock().unwrap() = keys;
        self
    }

    /// Return this error from the next API call, then clear it
    pub fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().unwrap() = Some(error);
        self
    }

    /// Fail the Nth remove_group_member call (1-based)
    pub fn fail_remove_member_at(self, n: usize) -> Self {
        *self.fail_remove_member_at.lock().unwrap() = Some(n);
        self
    }

    /// Get the call counts for verification in tests
    pub fn call_counts(&self) -> CallCounts {
        self.counts.lock().unwrap().clone()
    }

    /// Captured (agent_id, leaf_path) pairs from assign_account_leaf
    pub fn assigned_leafs(&self) -> Vec<(u64, String)> {
        self.assigned_leafs.lock().unwrap().clone()
    }

    fn groups_of(&self, kind: GroupKind) -> &Mutex<Vec<GroupSummary>> {
        match kind {
            GroupKind::Technician => &self.tech_groups,
            GroupKind::Agent => &self.agent_groups,
        }
    }

    fn details_of(&self, kind: GroupKind) -> &Mutex<Vec<GroupDetail>> {
        match kind {
            GroupKind::Technician => &self.tech_group_details,
            GroupKind::Agent => &self.agent_group_details,
        }
    }

    /// Check for a pending one-shot error and consume it
    fn check_error(&self) -> Result<()> {
        let mut error = self.error.lock().unwrap();
        if let Some(e) = error.take() {
            return Err(e.into());
        }
        Ok(())
    }
}

// ============================================================================
// TechnicianApi
// ============================================================================

impl TechnicianApi for MockClient {
    fn list_technicians(&self, filter: Option<&NameFilter>) -> Result<Vec<Technician>> {
        self.check_error()?;
        self.counts.lock().unwrap().list_technicians += 1;
        Ok(filtered(&self.technicians.lock().unwrap(), filter, |t| {
            t.name.as_str()
        }))
    }

    fn create_technician(&self, request: CreateTechnicianRequest) -> Result<Technician> {
        self.check_error()?;
        self.counts.lock().unwrap().create_technician += 1;

        let mut technicians = self.technicians.lock().unwrap();
        let id = technicians.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let technician = Technician {
            id,
            name: request.name,
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            phone: request.phone,
            status: TechnicianStatus::Active,
        };
        technicians.push(technician.clone());
        Ok(technician)
    }

    fn update_technician(&self, id: u64, request: UpdateTechnicianRequest) -> Result<Technician> {
        self.check_error()?;
        self.counts.lock().unwrap().update_technician += 1;

        let mut technicians = self.technicians.lock().unwrap();
        let technician = technicians
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(Error::NotFound {
                kind: "technician",
                name: id.to_string(),
            })?;
        if request.first_name.is_some() {
            technician.first_name = request.first_name;
        }
        if request.last_name.is_some() {
            technician.last_name = request.last_name;
        }
        if request.email.is_some() {
            technician.email = request.email;
        }
        if request.phone.is_some() {
            technician.phone = request.phone;
        }
        Ok(technician.clone())
    }

    fn delete_technician(&self, id: u64) -> Result<()> {
        self.check_error()?;
        self.counts.lock().unwrap().delete_technician += 1;
        self.technicians.lock().unwrap().retain(|t| t.id != id);
        Ok(())
    }

    fn set_technician_status(&self, id: u64, status: TechnicianStatus) -> Result<()> {
        self.check_error()?;
        self.counts.lock().unwrap().set_technician_status += 1;
        if let Some(t) = self.technicians.lock().unwrap().iter_mut().find(|t| t.id == id) {
            t.status = status;
        }
        Ok(())
    }

    fn set_technician_option(&self, _id: u64, option: &TechnicianOption) -> Result<()> {
        option.validate()?;
        self.check_error()?;
        self.counts.lock().unwrap().set_technician_option += 1;
        Ok(())
    }
}

// ============================================================================
// AgentApi
// ============================================================================

impl AgentApi for MockClient {
    fn list_agents(&self, filter: Option<&NameFilter>) -> Result<Vec<Agent>> {
        self.check_error()?;
        self.counts.lock().unwrap().list_agents += 1;
        Ok(filtered(&self.agents.lock().unwrap(), filter, |a| {
            a.name.as_str()
        }))
    }

    fn get_agent_info(&self, id: u64) -> Result<Agent> {
        self.check_error()?;
        self.counts.lock().unwrap().get_agent_info += 1;
        self.agents
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(Error::NotFound {
                kind: "agent",
                name: id.to_string(),
            })
    }

    fn set_agent_option(&self, _id: u64, option: &AgentOption) -> Result<()> {
        option.validate()?;
        self.check_error()?;
        self.counts.lock().unwrap().set_agent_option += 1;
        Ok(())
    }

    fn assign_account_leaf(&self, agent_id: u64, leaf_path: &str) -> Result<()> {
        self.check_error()?;
        self.counts.lock().unwrap().assign_account_leaf += 1;
        self.assigned_leafs
            .lock()
            .unwrap()
            .push((agent_id, leaf_path.to_string()));
        Ok(())
    }
}

// ============================================================================
// GroupApi / RightsGroupApi
// ============================================================================

impl GroupApi for MockClient {
    fn list_groups(
        &self,
        kind: GroupKind,
        filter: Option<&NameFilter>,
    ) -> Result<Vec<GroupSummary>> {
        self.check_error()?;
        self.counts.lock().unwrap().list_groups += 1;
        Ok(filtered(&self.groups_of(kind).lock().unwrap(), filter, |g| {
            g.name.as_str()
        }))
    }

    fn get_group(&self, kind: GroupKind, id: u64) -> Result<GroupDetail> {
        self.check_error()?;
        self.counts.lock().unwrap().get_group += 1;
        self.details_of(kind)
            .lock()
            .unwrap()
            .iter()
            .find(|g| g.id == id)
            .cloned()
            .ok_or(Error::NotFound {
                kind: kind.label(),
                name: id.to_string(),
            })
    }

    fn create_group(&self, kind: GroupKind, request: CreateGroupRequest) -> Result<GroupSummary> {
        self.check_error()?;
        self.counts.lock().unwrap().create_group += 1;

        let mut groups = self.groups_of(kind).lock().unwrap();
        let id = groups.iter().map(|g| g.id).max().unwrap_or(0) + 1;
        let summary = GroupSummary {
            id,
            name: request.name.clone(),
            member_count: 0,
        };
        groups.push(summary.clone());
        self.details_of(kind).lock().unwrap().push(GroupDetail {
            id,
            name: request.name,
            members: vec![],
        });
        Ok(summary)
    }

    fn delete_group_record(&self, kind: GroupKind, id: u64) -> Result<()> {
        self.check_error()?;
        self.counts.lock().unwrap().delete_group_record += 1;

        // The real service rejects deleting a non-empty group.
        let details = self.details_of(kind).lock().unwrap();
        if let Some(detail) = details.iter().find(|g| g.id == id) {
            if !detail.members.is_empty() {
                return Err(ApiError::Status {
                    status: 409,
                    endpoint: format!("{}/{id}", kind.collection()),
                    message: "group is not empty".to_string(),
                }
                .into());
            }
        }
        drop(details);

        self.groups_of(kind).lock().unwrap().retain(|g| g.id != id);
        self.details_of(kind)
            .lock()
            .unwrap()
            .retain(|g| g.id != id);
        Ok(())
    }

    fn add_group_member(&self, kind: GroupKind, group_id: u64, member_id: u64) -> Result<()> {
        self.check_error()?;
        self.counts.lock().unwrap().add_group_member += 1;

        let mut details = self.details_of(kind).lock().unwrap();
        if let Some(detail) = details.iter_mut().find(|g| g.id == group_id) {
            detail.members.push(GroupMember {
                id: member_id,
                name: format!("member-{member_id}"),
                guid: None,
            });
        }
        Ok(())
    }

    fn remove_group_member(&self, kind: GroupKind, group_id: u64, member_id: u64) -> Result<()> {
        self.check_error()?;

        let n = {
            let mut counts = self.counts.lock().unwrap();
            counts.remove_group_member += 1;
            counts.remove_group_member
        };
        if let Some(fail_at) = *self.fail_remove_member_at.lock().unwrap() {
            if n == fail_at {
                return Err(ApiError::Status {
                    status: 500,
                    endpoint: format!(
                        "{}/{group_id}/{}/{member_id}",
                        kind.collection(),
                        kind.edge()
                    ),
                    message: "simulated failure".to_string(),
                }
                .into());
            }
        }

        let mut details = self.details_of(kind).lock().unwrap();
        if let Some(detail) = details.iter_mut().find(|g| g.id == group_id) {
            detail.members.retain(|m| m.id != member_id);
        }
        Ok(())
    }
}

impl RightsGroupApi for MockClient {
    fn list_rights_groups(&self, filter: Option<&NameFilter>) -> Result<Vec<RightsGroup>> {
        self.check_error()?;
        self.counts.lock().unwrap().list_rights_groups += 1;
        Ok(filtered(
            &self.rights_groups.lock().unwrap(),
            filter,
            |g| g.name.as_str(),
        ))
    }
}

// ============================================================================
// LeafApi
// ============================================================================

impl LeafApi for MockClient {
    fn list_leafs(&self, filter: Option<&NameFilter>) -> Result<Vec<Leaf>> {
        self.check_error()?;
        self.counts.lock().unwrap().list_leafs += 1;
        Ok(filtered(&self.leafs.lock().unwrap(), filter, |l| {
            l.path.as_str()
        }))
    }

    fn get_leaf(&self, id: u64) -> Result<Leaf> {
        self.check_error()?;
        self.counts.lock().unwrap().get_leaf += 1;
        self.leafs
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.id == id)
            .cloned()
            .ok_or(Error::NotFound {
                kind: "leaf",
                name: id.to_string(),
            })
    }

    fn create_leaf(&self, request: CreateLeafRequest) -> Result<Leaf> {
        self.check_error()?;
        self.counts.lock().unwrap().create_leaf += 1;

        let mut leafs = self.leafs.lock().unwrap();
        let id = leafs.iter().map(|l| l.id).max().unwrap_or(0) + 1;
        let leaf = Leaf {
            id,
            path: request.path,
        };
        leafs.push(leaf.clone());
        Ok(leaf)
    }

    fn delete_leaf(&self, id: u64) -> Result<()> {
        self.check_error()?;
        self.counts.lock().unwrap().delete_leaf += 1;
        self.leafs.lock().unwrap().retain(|l| l.id != id);
        Ok(())
    }
}

// ============================================================================
// TripletApi
// ============================================================================

impl TripletApi for MockClient {
    fn list_triplets(&self) -> Result<Vec<Triplet>> {
        self.check_error()?;
        self.counts.lock().unwrap().list_triplets += 1;
        Ok(self.triplets.lock().unwrap().clone())
    }

    fn get_triplet(&self, id: u64) -> Result<Triplet> {
        self.check_error()?;
        self.counts.lock().unwrap().get_triplet += 1;
        self.triplets
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(Error::NotFound {
                kind: "triplet",
                name: id.to_string(),
            })
    }

    fn create_triplet(&self, request: CreateTripletRequest) -> Result<Triplet> {
        self.check_error()?;
        self.counts.lock().unwrap().create_triplet += 1;

        let mut triplets = self.triplets.lock().unwrap();
        let id = triplets.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let triplet = Triplet {
            id,
            name: request.name,
            technician_group_id: request.technician_group_id,
            rights_group_id: request.rights_group_id,
            agent_group_id: request.agent_group_id,
            expires_at: request.expires_at,
        };
        triplets.push(triplet.clone());
        Ok(triplet)
    }

    fn update_triplet(&self, id: u64, request: UpdateTripletRequest) -> Result<Triplet> {
        self.check_error()?;
        self.counts.lock().unwrap().update_triplet += 1;

        let mut triplets = self.triplets.lock().unwrap();
        let triplet = triplets
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(Error::NotFound {
                kind: "triplet",
                name: id.to_string(),
            })?;
        if request.name.is_some() {
            triplet.name = request.name;
        }
        if request.expires_at.is_some() {
            triplet.expires_at = request.expires_at;
        }
        Ok(triplet.clone())
    }

    fn delete_triplet(&self, id: u64) -> Result<()> {
        self.check_error()?;
        self.counts.lock().unwrap().delete_triplet += 1;
        self.triplets.lock().unwrap().retain(|t| t.id != id);
        Ok(())
    }
}

// ============================================================================
// ApiKeyApi
// ============================================================================

impl ApiKeyApi for MockClient {
    fn list_api_keys(&self) -> Result<Vec<ApiKeyRecord>> {
        self.check_error()?;
        self.counts.lock().unwrap().list_api_keys += 1;
        Ok(self.api_keys.lock().unwrap().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn technician(id: u64, name: &str) -> Technician {
        Technician {
            id,
            name: name.to_string(),
            first_name: None,
            last_name: None,
            email: None,
            phone: None,
            status: TechnicianStatus::Active,
        }
    }

    #[test]
    fn test_mock_default_empty() {
        let mock = MockClient::new();
        assert!(mock.list_technicians(None).unwrap().is_empty());
        assert!(mock.list_leafs(None).unwrap().is_empty());
    }

    #[test]
    fn test_mock_api_key_fixtures() {
        let mock = MockClient::new().with_api_keys(vec![ApiKeyRecord {
            id: 1,
            label: "ci-runner".to_string(),
            created_at: None,
        }]);

        let keys = mock.list_api_keys().unwrap();
        assert_eq!(keys.len(), 1);
        assert_eq!(keys[0].label, "ci-runner");
        assert_eq!(mock.call_counts().list_api_keys, 1);
    }

    #[test]
    fn test_mock_with_error_is_one_shot() {
        let mock = MockClient::new().with_error(ApiError::Network("down".to_string()));

        assert!(mock.list_technicians(None).is_err());
        // Error is consumed, next call succeeds
        assert!(mock.list_technicians(None).is_ok());
    }

    #[test]
    fn test_mock_call_counts() {
        let mock = MockClient::new();

        mock.list_technicians(None).unwrap();
        mock.list_technicians(None).unwrap();
        mock.list_agents(None).unwrap();

        let counts = mock.call_counts();
        assert_eq!(counts.list_technicians, 2);
        assert_eq!(counts.list_agents, 1);
        assert_eq!(counts.mutating_total(), 0);
    }

    #[test]
    fn test_mock_list_applies_filter() {
        let mock = MockClient::new()
            .with_technicians(vec![technician(1, "alice"), technician(2, "bob")]);

        let filter = NameFilter::new("a*").unwrap();
        let matched = mock.list_technicians(Some(&filter)).unwrap();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "alice");
    }

    #[test]
    fn test_mock_leaf_round_trip() {
        let mock = MockClient::new();

        mock.create_leaf(CreateLeafRequest {
            path: "A.B.C".to_string(),
        })
        .unwrap();

        let filter = NameFilter::case_sensitive("A.B.C").unwrap();
        let found = mock.list_leafs(Some(&filter)).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].path, "A.B.C");
    }

    #[test]
    fn test_mock_delete_nonempty_group_rejected() {
        let mock = MockClient::new()
            .with_groups(
                GroupKind::Agent,
                vec![GroupSummary {
                    id: 1,
                    name: "servers".to_string(),
                    member_count: 1,
                }],
            )
            .with_group_details(
                GroupKind::Agent,
                vec![GroupDetail {
                    id: 1,
                    name: "servers".to_string(),
                    members: vec![GroupMember {
                        id: 10,
                        name: "HOST\\Web01".to_string(),
                        guid: None,
                    }],
                }],
            );

        assert!(mock.delete_group_record(GroupKind::Agent, 1).is_err());

        mock.remove_group_member(GroupKind::Agent, 1, 10).unwrap();
        assert!(mock.delete_group_record(GroupKind::Agent, 1).is_ok());
    }

    #[test]
    fn test_mock_scripted_remove_failure() {
        let mock = MockClient::new()
            .with_group_details(
                GroupKind::Technician,
                vec![GroupDetail {
                    id: 1,
                    name: "ops".to_string(),
                    members: vec![
                        GroupMember { id: 1, name: "a".to_string(), guid: None },
                        GroupMember { id: 2, name: "b".to_string(), guid: None },
                    ],
                }],
            )
            .fail_remove_member_at(2);

        assert!(mock.remove_group_member(GroupKind::Technician, 1, 1).is_ok());
        assert!(mock.remove_group_member(GroupKind::Technician, 1, 2).is_err());
    }
}
