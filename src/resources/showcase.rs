//! Certificates and client logos, each with a singleton section-settings row.

use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::{read_status, Field, Resource, Singleton, Writable};
use crate::domain::{int_to_flag, Status};

pub struct Certificates;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Certificate {
    pub id: i64,
    pub title: Option<String>,
    pub image: Option<String>,
    pub status: Option<Status>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CertificateInput {
    pub title: Option<String>,
    pub image: Option<String>,
    pub status: Option<Status>,
}

impl Resource for Certificates {
    type Key = i64;
    type Record = Certificate;

    const TABLE: &'static str = "certificates";
    const NOUN: &'static str = "Certificate";
    const ORDER_BY: &'static str = "id ASC";

    fn from_row(row: &SqliteRow) -> Result<Certificate, sqlx::Error> {
        Ok(Certificate {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            image: row.try_get("image")?,
            status: read_status(Self::TABLE, row.try_get("status")?),
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl Writable for Certificates {
    type Input = CertificateInput;

    fn fields(input: &CertificateInput) -> Result<Vec<Field>, serde_json::Error> {
        Ok(vec![
            Field::text("title", &input.title),
            Field::text("image", &input.image),
            Field::status("status", input.status),
        ])
    }

    fn display_name(input: &CertificateInput) -> Option<String> {
        input.title.clone()
    }
}

pub struct Clients;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Client {
    pub id: i64,
    pub name: Option<String>,
    pub logo: Option<String>,
    pub status: Option<Status>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientInput {
    pub name: Option<String>,
    pub logo: Option<String>,
    pub status: Option<Status>,
}

impl Resource for Clients {
    type Key = i64;
    type Record = Client;

    const TABLE: &'static str = "clients";
    const NOUN: &'static str = "Client";
    const ORDER_BY: &'static str = "created_at DESC, id DESC";

    fn from_row(row: &SqliteRow) -> Result<Client, sqlx::Error> {
        Ok(Client {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            logo: row.try_get("logo")?,
            status: read_status(Self::TABLE, row.try_get("status")?),
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl Writable for Clients {
    type Input = ClientInput;

    fn fields(input: &ClientInput) -> Result<Vec<Field>, serde_json::Error> {
        Ok(vec![
            Field::text("name", &input.name),
            Field::text("logo", &input.logo),
            Field::status("status", input.status),
        ])
    }

    fn display_name(input: &ClientInput) -> Option<String> {
        input.name.clone()
    }

    fn created_details(input: &ClientInput) -> String {
        match &input.name {
            Some(name) => format!("Client logo added: {}", name),
            None => "New client logo added".to_string(),
        }
    }

    fn updated_details(key: &i64, _input: &ClientInput) -> String {
        format!("Client logo updated (id: {})", key)
    }
}

/// Title, subtitle, and visibility of a public page section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionSettings {
    pub id: i64,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub is_enabled: bool,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SectionSettingsInput {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub is_enabled: Option<bool>,
}

fn section_from_row(row: &SqliteRow) -> Result<SectionSettings, sqlx::Error> {
    Ok(SectionSettings {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        subtitle: row.try_get("subtitle")?,
        is_enabled: int_to_flag(row.try_get("is_enabled")?),
        updated_at: row.try_get("updated_at")?,
    })
}

fn section_fields(input: &SectionSettingsInput) -> Vec<Field> {
    vec![
        Field::text("title", &input.title),
        Field::text("subtitle", &input.subtitle),
        // an absent flag is an explicit "off" on update
        Field::flag("is_enabled", Some(input.is_enabled.unwrap_or(false))),
    ]
}

pub struct CertificateSettings;

impl Resource for CertificateSettings {
    type Key = i64;
    type Record = SectionSettings;

    const TABLE: &'static str = "certificate_settings";
    const NOUN: &'static str = "Certificate section settings";
    const ORDER_BY: &'static str = "id ASC";

    fn from_row(row: &SqliteRow) -> Result<SectionSettings, sqlx::Error> {
        section_from_row(row)
    }
}

impl Writable for CertificateSettings {
    type Input = SectionSettingsInput;

    fn fields(input: &SectionSettingsInput) -> Result<Vec<Field>, serde_json::Error> {
        Ok(section_fields(input))
    }
}

impl Singleton for CertificateSettings {}

pub struct ClientSettings;

impl Resource for ClientSettings {
    type Key = i64;
    type Record = SectionSettings;

    const TABLE: &'static str = "client_settings";
    const NOUN: &'static str = "Client section settings";
    const ORDER_BY: &'static str = "id ASC";

    fn from_row(row: &SqliteRow) -> Result<SectionSettings, sqlx::Error> {
        section_from_row(row)
    }
}

impl Writable for ClientSettings {
    type Input = SectionSettingsInput;

    fn fields(input: &SectionSettingsInput) -> Result<Vec<Field>, serde_json::Error> {
        Ok(section_fields(input))
    }
}

impl Singleton for ClientSettings {}
