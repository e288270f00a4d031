//! Closed option sets for technicians and agents
//!
//! The service accepts option writes as key/value pairs. Rather than
//! forwarding arbitrary dictionaries, each recognized option is an enum
//! variant with a declared value domain, validated before any network call.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Recognized technician options
#[derive(Debug, Clone, PartialEq)]
pub enum TechnicianOption {
    /// Console inactivity timeout; accepted range 5..=480 minutes
    InactivityTimeoutMinutes(u32),
    /// Whether sign-in requires a second factor
    TwoFactorRequired(bool),
    /// UI locale tag, e.g. `en-US`; must be non-empty
    Locale(String),
}

impl TechnicianOption {
    /// Wire name of the option
    pub fn key(&self) -> &'static str {
        match self {
            TechnicianOption::InactivityTimeoutMinutes(_) => "InactivityTimeoutMinutes",
            TechnicianOption::TwoFactorRequired(_) => "TwoFactorRequired",
            TechnicianOption::Locale(_) => "Locale",
        }
    }

    /// Wire value of the option
    pub fn value(&self) -> String {
        match self {
            TechnicianOption::InactivityTimeoutMinutes(v) => v.to_string(),
            TechnicianOption::TwoFactorRequired(v) => v.to_string(),
            TechnicianOption::Locale(v) => v.clone(),
        }
    }

    /// Check the value against its declared domain
    pub fn validate(&self) -> Result<()> {
        match self {
            TechnicianOption::InactivityTimeoutMinutes(v) if !(5..=480).contains(v) => {
                Err(Error::Validation(format!(
                    "InactivityTimeoutMinutes must be between 5 and 480, got {v}"
                )))
            }
            TechnicianOption::Locale(v) if v.trim().is_empty() => {
                Err(Error::Validation("Locale must not be empty".to_string()))
            }
            _ => Ok(()),
        }
    }
}

/// Agent log verbosity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentLogLevel {
    Error,
    Warning,
    Info,
    Debug,
}

impl AgentLogLevel {
    fn as_str(self) -> &'static str {
        match self {
            AgentLogLevel::Error => "Error",
            AgentLogLevel::Warning => "Warning",
            AgentLogLevel::Info => "Info",
            AgentLogLevel::Debug => "Debug",
        }
    }
}

/// Recognized agent options
#[derive(Debug, Clone, PartialEq)]
pub enum AgentOption {
    /// Agent heartbeat interval; accepted range 30..=3600 seconds
    HeartbeatSeconds(u32),
    /// Agent-side log verbosity
    LogLevel(AgentLogLevel),
    /// Free-text operator note attached to the account
    Description(String),
}

impl AgentOption {
    /// Wire name of the option
    pub fn key(&self) -> &'static str {
        match self {
            AgentOption::HeartbeatSeconds(_) => "HeartbeatSeconds",
            AgentOption::LogLevel(_) => "LogLevel",
            AgentOption::Description(_) => "Description",
        }
    }

    /// Wire value of the option
    pub fn value(&self) -> String {
        match self {
            AgentOption::HeartbeatSeconds(v) => v.to_string(),
            AgentOption::LogLevel(v) => v.as_str().to_string(),
            AgentOption::Description(v) => v.clone(),
        }
    }

    /// Check the value against its declared domain
    pub fn validate(&self) -> Result<()> {
        match self {
            AgentOption::HeartbeatSeconds(v) if !(30..=3600).contains(v) => {
                Err(Error::Validation(format!(
                    "HeartbeatSeconds must be between 30 and 3600, got {v}"
                )))
            }
            _ => Ok(()),
        }
    }
}
