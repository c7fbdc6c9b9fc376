//! Domain primitives: statuses, boolean flag coercion, timestamps.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Publication status of a content row.
///
/// Wire and storage values are the strings the content team has always used;
/// the English names are accepted on input as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Shown on the public site.
    #[serde(rename = "Aktiv", alias = "Active")]
    Active,
    /// Hidden from the public site.
    #[serde(rename = "Deaktiv", alias = "Inactive")]
    Inactive,
}

impl Status {
    /// Get the stored representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "Aktiv",
            Status::Inactive => "Deaktiv",
        }
    }
}

/// Status of a service, which may additionally await review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceStatus {
    #[serde(rename = "Aktiv", alias = "Active")]
    Active,
    #[serde(rename = "Deaktiv", alias = "Inactive")]
    Inactive,
    /// Drafted but not yet published.
    #[serde(rename = "Gözləmədə", alias = "Pending")]
    Pending,
}

impl ServiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceStatus::Active => Status::Active.as_str(),
            ServiceStatus::Inactive => Status::Inactive.as_str(),
            ServiceStatus::Pending => "Gözləmədə",
        }
    }
}

impl From<Status> for ServiceStatus {
    fn from(status: Status) -> Self {
        match status {
            Status::Active => ServiceStatus::Active,
            Status::Inactive => ServiceStatus::Inactive,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Status {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for ServiceStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown status: {0}")]
pub struct StatusParseError(pub String);

impl FromStr for Status {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Aktiv" | "Active" => Ok(Status::Active),
            "Deaktiv" | "Inactive" => Ok(Status::Inactive),
            other => Err(StatusParseError(other.to_string())),
        }
    }
}

impl FromStr for ServiceStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Gözləmədə" | "Pending" => Ok(ServiceStatus::Pending),
            other => Status::from_str(other).map(ServiceStatus::from),
        }
    }
}

/// Store a boolean flag as the 0/1 integer the schema uses.
pub fn flag_to_int(flag: bool) -> i64 {
    if flag {
        1
    } else {
        0
    }
}

/// Read a stored 0/1 flag. NULL reads as `false`.
pub fn int_to_flag(value: Option<i64>) -> bool {
    value.map(|v| v != 0).unwrap_or(false)
}

/// Current UTC time in the format used for `updated_at` / `created_at`.
///
/// Millisecond precision keeps rows written within the same second ordered,
/// and the text sorts correctly against SQLite's `CURRENT_TIMESTAMP` output.
pub fn timestamp_now() -> String {
    chrono::Utc::now()
        .format("%Y-%m-%d %H:%M:%S%.3f")
        .to_string()
}
