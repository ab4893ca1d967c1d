// File: crates/dashboard/src/access.rs
// Summary: Role ordering and the display-only view gate.

//! Role gate for views
//!
//! This is a rendering shortcut only. Whoever serves the data must enforce
//! authorization on their side; a client-side role string proves nothing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Roles ordered by privilege.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Viewer,
    Analyst,
    Admin,
    SuperAdmin,
}

impl Role {
    pub fn name(self) -> &'static str {
        match self {
            Role::Viewer => "viewer",
            Role::Analyst => "analyst",
            Role::Admin => "admin",
            Role::SuperAdmin => "superadmin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['_', '-', ' '], "").as_str() {
            "viewer" => Ok(Role::Viewer),
            "analyst" => Ok(Role::Analyst),
            "admin" => Ok(Role::Admin),
            "superadmin" => Ok(Role::SuperAdmin),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// The signed-in user as the client sees them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub name: String,
    pub role: Role,
}

impl Principal {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self { name: name.into(), role }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{name} ({role}) may not open this view; it requires {required}")]
pub struct AccessDenied {
    pub name: String,
    pub role: Role,
    pub required: Role,
}

/// Minimum role needed to render a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewGate {
    required: Role,
}

impl ViewGate {
    pub fn require(required: Role) -> Self {
        Self { required }
    }

    pub fn required(&self) -> Role { self.required }

    pub fn allows(&self, who: &Principal) -> bool {
        who.role >= self.required
    }

    pub fn check(&self, who: &Principal) -> Result<(), AccessDenied> {
        if self.allows(who) {
            Ok(())
        } else {
            tracing::info!(user = %who.name, role = %who.role, required = %self.required, "view hidden by role gate");
            Err(AccessDenied { name: who.name.clone(), role: who.role, required: self.required })
        }
    }
}
