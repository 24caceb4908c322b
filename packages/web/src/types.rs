//! Shared types for auth state and API responses

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

// ============================================================================
// Auth Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Employer,
    JobSeeker,
}

impl UserRole {
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Employer => "Employer",
            UserRole::JobSeeker => "Job Seeker",
        }
    }

    pub fn variants() -> &'static [UserRole] {
        &[UserRole::JobSeeker, UserRole::Employer]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub member_id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub role: UserRole,
}

impl AuthUser {
    /// Name shown in the navbar, falling back to the email address
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

// ============================================================================
// Job Types
// ============================================================================

/// Identifier taken from the `/jobs/:id` path segment. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobId(String);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("job id segment is empty")]
pub struct EmptyJobId;

impl JobId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for JobId {
    type Err = EmptyJobId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(EmptyJobId);
        }
        Ok(JobId(s.to_string()))
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// GraphQL Response Wrappers
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub login: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub register: Option<String>,
}
