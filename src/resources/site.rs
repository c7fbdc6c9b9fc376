//! Site-wide resources: key/value settings, social links, dashboard stats,
//! newsletter subscribers.

use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::{read_status, Field, Resource, Writable};
use crate::domain::Status;

/// Open-ended string settings. Values are opaque text, including `show_prices`
/// which consumers compare against the literal `"true"` / `"false"`.
pub struct Settings;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Setting {
    pub id: String,
    pub value: String,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingInput {
    pub value: Option<String>,
}

impl Resource for Settings {
    type Key = String;
    type Record = Setting;

    const TABLE: &'static str = "settings";
    const NOUN: &'static str = "Setting";
    const ORDER_BY: &'static str = "rowid ASC";

    fn from_row(row: &SqliteRow) -> Result<Setting, sqlx::Error> {
        Ok(Setting {
            id: row.try_get("id")?,
            value: row.try_get("value")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl Writable for Settings {
    type Input = SettingInput;

    fn fields(input: &SettingInput) -> Result<Vec<Field>, serde_json::Error> {
        Ok(vec![Field::text("value", &input.value)])
    }

    fn updated_details(key: &String, input: &SettingInput) -> String {
        format!(
            "Setting {} changed: {}",
            key,
            input.value.as_deref().unwrap_or("")
        )
    }
}

/// Social network links keyed by network (`facebook`, `instagram`, ...).
pub struct SocialLinks;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub id: String,
    pub name: String,
    pub url: Option<String>,
    pub status: Option<Status>,
    pub updated_at: Option<String>,
}

/// The network name is fixed by seeding; only the link and status are edited.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SocialLinkInput {
    pub url: Option<String>,
    pub status: Option<Status>,
}

impl Resource for SocialLinks {
    type Key = String;
    type Record = SocialLink;

    const TABLE: &'static str = "social_media";
    const NOUN: &'static str = "Social link";
    const ORDER_BY: &'static str = "rowid ASC";

    fn from_row(row: &SqliteRow) -> Result<SocialLink, sqlx::Error> {
        Ok(SocialLink {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            url: row.try_get("url")?,
            status: read_status(Self::TABLE, row.try_get("status")?),
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl Writable for SocialLinks {
    type Input = SocialLinkInput;

    fn fields(input: &SocialLinkInput) -> Result<Vec<Field>, serde_json::Error> {
        Ok(vec![
            Field::text("url", &input.url),
            Field::status("status", input.status),
        ])
    }

    fn updated_details(key: &String, _input: &SocialLinkInput) -> String {
        format!("{} link and status changed", key)
    }
}

/// Read-only counters shown on the dashboard.
pub struct Stats;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub id: String,
    pub label: String,
    pub value: i64,
    pub icon: Option<String>,
}

impl Resource for Stats {
    type Key = String;
    type Record = Stat;

    const TABLE: &'static str = "stats";
    const NOUN: &'static str = "Stat";
    const ORDER_BY: &'static str = "rowid ASC";

    fn from_row(row: &SqliteRow) -> Result<Stat, sqlx::Error> {
        Ok(Stat {
            id: row.try_get("id")?,
            label: row.try_get("label")?,
            value: row.try_get("value")?,
            icon: row.try_get("icon")?,
        })
    }
}

/// Newsletter subscribers. Sign-up happens on the public site; the admin
/// side only lists and removes them.
pub struct Subscribers;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subscriber {
    pub id: i64,
    pub email: String,
    pub created_at: Option<String>,
}

impl Resource for Subscribers {
    type Key = i64;
    type Record = Subscriber;

    const TABLE: &'static str = "subscribers";
    const NOUN: &'static str = "Subscriber";
    const ORDER_BY: &'static str = "created_at DESC, id DESC";

    fn from_row(row: &SqliteRow) -> Result<Subscriber, sqlx::Error> {
        Ok(Subscriber {
            id: row.try_get("id")?,
            email: row.try_get("email")?,
            created_at: row.try_get("created_at")?,
        })
    }
}
