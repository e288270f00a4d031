//! Group membership resolution
//!
//! Answers "which groups contain entity X" across the whole universe of
//! groups of one kind. Group member lists only travel on the expensive
//! detail fetch, so the resolver fetches the cheap summary listing first and
//! only fetches details for groups actually reporting members.
//!
//! Two modes:
//! - **Cached batch** (default): details are fetched once per resolver
//!   lifetime and retained; any number of subsequent queries scan the
//!   retained set in memory. One summary fetch plus one detail fetch per
//!   non-empty group, total, regardless of query count.
//! - **Live** (opt-in): the same fetch sequence runs fresh for every query.
//!   Same per-query cost as the cached build, repeated; intentionally
//!   slower, intentionally fresher.

use crate::client::GroupApi;
use crate::client::models::{GroupDetail, GroupKind};
use crate::error::Result;

/// Fetch behavior of a [`MembershipResolver`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FetchMode {
    Cached,
    Live,
}

/// Resolves entity-name -> containing-group-names for one group kind.
///
/// The cache is scoped to this resolver's lifetime and never shared across
/// unrelated invocations.
pub struct MembershipResolver<'a, C: GroupApi + ?Sized> {
    client: &'a C,
    kind: GroupKind,
    mode: FetchMode,
    cache: Option<Vec<GroupDetail>>,
}

impl<'a, C: GroupApi + ?Sized> MembershipResolver<'a, C> {
    /// Create a resolver in cached batch mode
    pub fn new(client: &'a C, kind: GroupKind) -> Self {
        Self {
            client,
            kind,
            mode: FetchMode::Cached,
            cache: None,
        }
    }

    /// Create a resolver in live mode: every query re-fetches
    pub fn live(client: &'a C, kind: GroupKind) -> Self {
        Self {
            client,
            kind,
            mode: FetchMode::Live,
            cache: None,
        }
    }

    /// Names of the groups containing a member with the given name.
    ///
    /// Result order follows the order groups were returned by the summary
    /// listing (stable, not sorted). An entity absent from all groups yields
    /// an empty set, not an error.
    pub fn groups_for(&mut self, member_name: &str) -> Result<Vec<String>> {
        match self.mode {
            FetchMode::Cached => {
                if self.cache.is_none() {
                    // A failed build is discarded wholesale: a partially
                    // built cache must never answer queries as if complete.
                    self.cache = Some(self.fetch_details()?);
                }
                let details = self.cache.as_deref().unwrap_or_default();
                Ok(Self::scan(details, member_name))
            }
            FetchMode::Live => {
                let details = self.fetch_details()?;
                Ok(Self::scan(&details, member_name))
            }
        }
    }

    /// Fetch the summary listing, then the detail of every group reporting
    /// at least one member. Zero-member groups are skipped: their detail
    /// fetch cannot contribute a membership.
    fn fetch_details(&self) -> Result<Vec<GroupDetail>> {
        let summaries = self.client.list_groups(self.kind, None)?;

        let mut details = Vec::with_capacity(summaries.len());
        for summary in &summaries {
            if summary.member_count == 0 {
                continue;
            }
            details.push(self.client.get_group(self.kind, summary.id)?);
        }
        Ok(details)
    }

    fn scan(details: &[GroupDetail], member_name: &str) -> Vec<String> {
        details
            .iter()
            .filter(|group| group.members.iter().any(|m| m.name == member_name))
            .map(|group| group.name.clone())
            .collect()
    }
}
