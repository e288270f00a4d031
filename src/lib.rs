//! Client library for the AccessHub identity and access management API.
//!
//! The crate is organized in three layers:
//!
//! - [`client`] holds the HTTP executor, the per-resource API traits and the
//!   wire models. [`client::rest::RestClient`] is the production
//!   implementation; every trait is also implemented by a scriptable mock
//!   for tests.
//! - [`membership`] answers "which groups is this entity in", either from a
//!   cached batch of group details or live per query.
//! - [`ops`] holds the mutating orchestrators: compound operations that
//!   resolve names to identifiers, refuse ambiguous targets, and short-circuit
//!   when the requested state already holds.
//!
//! Credentials come from [`config`]: an explicit [`config::Credential`] wins,
//! otherwise the on-disk config and credential store under `~/.accessops/`
//! are consulted.
//!
//! ```no_run
//! use accessops::client::rest::RestClient;
//! use accessops::client::models::{GroupKind, GroupRef, TechnicianRef};
//! use accessops::config::Credential;
//! use accessops::ops;
//!
//! # fn main() -> accessops::error::Result<()> {
//! let client = RestClient::new(Credential::resolve(None)?)?;
//! ops::add_technician_to_group(
//!     &client,
//!     &GroupRef::by_name("Helpdesk"),
//!     &TechnicianRef::by_name("alice"),
//! )?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod membership;
pub mod ops;

pub use client::AccessHubApi;
pub use error::{Error, Result};
