//! Singleton page content: about us, corporate info, contact info.

use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::{Field, Resource, Singleton, Writable};
use crate::domain::{decode_list, FeatureCard};

pub struct AboutUs;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AboutPage {
    pub id: i64,
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
    pub section_title: Option<String>,
    pub section_description: Option<String>,
    pub main_image: Option<String>,
    pub experience_text: Option<String>,
    pub features: Vec<FeatureCard>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AboutPageInput {
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
    pub section_title: Option<String>,
    pub section_description: Option<String>,
    pub main_image: Option<String>,
    pub experience_text: Option<String>,
    pub features: Option<Vec<FeatureCard>>,
}

impl Resource for AboutUs {
    type Key = i64;
    type Record = AboutPage;

    const TABLE: &'static str = "about_us";
    const NOUN: &'static str = "About page";
    const ORDER_BY: &'static str = "id ASC";

    fn from_row(row: &SqliteRow) -> Result<AboutPage, sqlx::Error> {
        let features: Option<String> = row.try_get("features")?;
        Ok(AboutPage {
            id: row.try_get("id")?,
            hero_title: row.try_get("hero_title")?,
            hero_subtitle: row.try_get("hero_subtitle")?,
            section_title: row.try_get("section_title")?,
            section_description: row.try_get("section_description")?,
            main_image: row.try_get("main_image")?,
            experience_text: row.try_get("experience_text")?,
            features: decode_list("features", features.as_deref()),
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl Writable for AboutUs {
    type Input = AboutPageInput;

    fn fields(input: &AboutPageInput) -> Result<Vec<Field>, serde_json::Error> {
        Ok(vec![
            Field::text("hero_title", &input.hero_title),
            Field::text("hero_subtitle", &input.hero_subtitle),
            Field::text("section_title", &input.section_title),
            Field::text("section_description", &input.section_description),
            Field::text("main_image", &input.main_image),
            Field::text("experience_text", &input.experience_text),
            Field::list("features", &input.features)?,
        ])
    }
}

impl Singleton for AboutUs {}

pub struct CorporateInfo;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorporatePage {
    pub id: i64,
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
    pub main_image: Option<String>,
    pub values: Vec<FeatureCard>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorporatePageInput {
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
    pub main_image: Option<String>,
    pub values: Option<Vec<FeatureCard>>,
}

impl Resource for CorporateInfo {
    type Key = i64;
    type Record = CorporatePage;

    const TABLE: &'static str = "corporate_info";
    const NOUN: &'static str = "Corporate page";
    const ORDER_BY: &'static str = "id ASC";

    fn from_row(row: &SqliteRow) -> Result<CorporatePage, sqlx::Error> {
        let values: Option<String> = row.try_get("values_json")?;
        Ok(CorporatePage {
            id: row.try_get("id")?,
            hero_title: row.try_get("hero_title")?,
            hero_subtitle: row.try_get("hero_subtitle")?,
            main_image: row.try_get("main_image")?,
            values: decode_list("values_json", values.as_deref()),
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl Writable for CorporateInfo {
    type Input = CorporatePageInput;

    fn fields(input: &CorporatePageInput) -> Result<Vec<Field>, serde_json::Error> {
        Ok(vec![
            Field::text("hero_title", &input.hero_title),
            Field::text("hero_subtitle", &input.hero_subtitle),
            Field::text("main_image", &input.main_image),
            Field::list("values_json", &input.values)?,
        ])
    }
}

impl Singleton for CorporateInfo {}

pub struct ContactInfo;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPage {
    pub id: i64,
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
    pub button_text: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub map_url: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactPageInput {
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
    pub button_text: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub map_url: Option<String>,
}

impl Resource for ContactInfo {
    type Key = i64;
    type Record = ContactPage;

    const TABLE: &'static str = "contact_info";
    const NOUN: &'static str = "Contact info";
    const ORDER_BY: &'static str = "id ASC";

    fn from_row(row: &SqliteRow) -> Result<ContactPage, sqlx::Error> {
        Ok(ContactPage {
            id: row.try_get("id")?,
            hero_title: row.try_get("hero_title")?,
            hero_subtitle: row.try_get("hero_subtitle")?,
            button_text: row.try_get("button_text")?,
            phone: row.try_get("phone")?,
            email: row.try_get("email")?,
            address: row.try_get("address")?,
            map_url: row.try_get("map_url")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl Writable for ContactInfo {
    type Input = ContactPageInput;

    fn fields(input: &ContactPageInput) -> Result<Vec<Field>, serde_json::Error> {
        Ok(vec![
            Field::text("hero_title", &input.hero_title),
            Field::text("hero_subtitle", &input.hero_subtitle),
            Field::text("button_text", &input.button_text),
            Field::text("phone", &input.phone),
            Field::text("email", &input.email),
            Field::text("address", &input.address),
            Field::text("map_url", &input.map_url),
        ])
    }
}

impl Singleton for ContactInfo {}
