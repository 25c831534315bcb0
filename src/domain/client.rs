use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when a persisted or submitted status string is not one of the
/// three enumerated values.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown client status: {0}")]
pub struct ParseStatusError(pub String);

/// Lifecycle status of a client record. Drives the dashboard counters and
/// the visual categorization in the table.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    #[default]
    Active,
    Inactive,
    Pending,
}

impl ClientStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            ClientStatus::Active => "active",
            ClientStatus::Inactive => "inactive",
            ClientStatus::Pending => "pending",
        }
    }
}

impl Display for ClientStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClientStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "active" => Ok(ClientStatus::Active),
            "inactive" => Ok(ClientStatus::Inactive),
            "pending" => Ok(ClientStatus::Pending),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub status: ClientStatus,
    /// Optional free text about the client profile.
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewClient {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub status: ClientStatus,
    pub notes: Option<String>,
}

impl NewClient {
    #[must_use]
    pub fn new(
        name: String,
        email: String,
        phone: String,
        company: String,
        status: ClientStatus,
        notes: Option<String>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_lowercase(),
            phone: phone.trim().to_string(),
            company: company.trim().to_string(),
            status,
            notes: notes
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}

/// Full replacement of a client's mutable fields. `id` and `created_at`
/// are never updated.
#[derive(Clone, Debug, Deserialize)]
pub struct UpdateClient {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub status: ClientStatus,
    pub notes: Option<String>,
}

impl UpdateClient {
    #[must_use]
    pub fn new(
        name: String,
        email: String,
        phone: String,
        company: String,
        status: ClientStatus,
        notes: Option<String>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_lowercase(),
            phone: phone.trim().to_string(),
            company: company.trim().to_string(),
            status,
            notes: notes
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}
