//! Account leaf assignment

use log::{debug, info};

use crate::client::models::{AgentRef, CreateLeafRequest, Leaf};
use crate::client::{AgentApi, LeafApi};
use crate::error::{Error, Result};

/// The leaf an assignment landed on, and whether it had to be created
#[derive(Debug, Clone)]
pub struct LeafAssignment {
    pub leaf: Leaf,
    pub created: bool,
}

/// Exact-path leaf lookup. Zero matches is not an error here; the caller
/// decides whether an absent leaf gets created.
fn find_leaf<C: LeafApi + ?Sized>(client: &C, path: &str) -> Result<Option<Leaf>> {
    let leafs = client.list_leafs(None)?;
    let mut matches: Vec<Leaf> = leafs.into_iter().filter(|l| l.path == path).collect();
    match matches.len() {
        0 => Ok(None),
        1 => Ok(Some(matches.remove(0))),
        count => Err(Error::Ambiguous {
            kind: "leaf",
            name: path.to_string(),
            count,
        }),
    }
}

/// Assign an account leaf to an agent, creating the leaf if it does not
/// exist yet.
///
/// This is the one place a missing target is created rather than reported:
/// leaf paths are free-form hierarchy labels and callers routinely assign
/// paths nobody has registered. Every other orchestrator treats a missing
/// target as [`Error::NotFound`].
pub fn assign_agent_leaf<C: AgentApi + LeafApi + ?Sized>(
    client: &C,
    agent: &AgentRef,
    path: &str,
) -> Result<LeafAssignment> {
    if path.trim().is_empty() {
        return Err(Error::Validation("leaf path must not be empty".to_string()));
    }
    // Leaf hierarchy levels are dot-separated; a '/' would be split into
    // extra URL path segments by the executor instead of traveling as one
    // encoded segment.
    if path.contains('/') {
        return Err(Error::Validation(format!(
            "leaf path '{path}' must not contain '/'"
        )));
    }
    let agent = super::resolve_agent(client, agent)?;
    let (leaf, created) = match find_leaf(client, path)? {
        Some(leaf) => (leaf, false),
        None => {
            debug!("leaf '{path}' does not exist, creating it");
            let leaf = client.create_leaf(CreateLeafRequest {
                path: path.to_string(),
            })?;
            (leaf, true)
        }
    };
    client.assign_account_leaf(agent.id, &leaf.path)?;
    info!("assigned leaf '{}' to agent '{}'", leaf.path, agent.name);
    Ok(LeafAssignment { leaf, created })
}

/// Delete a leaf addressed by its exact path
pub fn delete_leaf_by_path<C: LeafApi + ?Sized>(client: &C, path: &str) -> Result<()> {
    let leaf = find_leaf(client, path)?.ok_or(Error::NotFound {
        kind: "leaf",
        name: path.to_string(),
    })?;
    client.delete_leaf(leaf.id)
}
