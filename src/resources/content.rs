//! Editorial content: services, blog posts, team members.

use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::{read_status, Field, Resource, Writable};
use crate::domain::{decode_list, int_to_flag, ServiceStatus, Status};

pub struct Services;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Service {
    pub id: i64,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub background_image: Option<String>,
    pub status: Option<ServiceStatus>,
    pub features: Vec<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceInput {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub background_image: Option<String>,
    pub status: Option<ServiceStatus>,
    pub features: Option<Vec<String>>,
}

impl Resource for Services {
    type Key = i64;
    type Record = Service;

    const TABLE: &'static str = "services";
    const NOUN: &'static str = "Service";
    const ORDER_BY: &'static str = "updated_at DESC, id DESC";

    fn from_row(row: &SqliteRow) -> Result<Service, sqlx::Error> {
        let features: Option<String> = row.try_get("features")?;
        Ok(Service {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            subtitle: row.try_get("subtitle")?,
            description: row.try_get("description")?,
            icon: row.try_get("icon")?,
            background_image: row.try_get("background_image")?,
            status: read_status(Self::TABLE, row.try_get("status")?),
            features: decode_list("features", features.as_deref()),
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl Writable for Services {
    type Input = ServiceInput;

    fn fields(input: &ServiceInput) -> Result<Vec<Field>, serde_json::Error> {
        Ok(vec![
            Field::text("title", &input.title),
            Field::text("subtitle", &input.subtitle),
            Field::text("description", &input.description),
            Field::text("icon", &input.icon),
            Field::text("background_image", &input.background_image),
            Field::status("status", input.status),
            Field::list("features", &input.features)?,
        ])
    }

    fn display_name(input: &ServiceInput) -> Option<String> {
        input.title.clone()
    }
}

pub struct BlogPosts;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    pub subtitle: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub slug: String,
    pub status: Option<Status>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogPostInput {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub slug: Option<String>,
    pub status: Option<Status>,
}

impl Resource for BlogPosts {
    type Key = i64;
    type Record = BlogPost;

    const TABLE: &'static str = "blog_posts";
    const NOUN: &'static str = "Blog post";
    const ORDER_BY: &'static str = "created_at DESC, id DESC";

    fn from_row(row: &SqliteRow) -> Result<BlogPost, sqlx::Error> {
        Ok(BlogPost {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            subtitle: row.try_get("subtitle")?,
            content: row.try_get("content")?,
            image: row.try_get("image")?,
            slug: row.try_get("slug")?,
            status: read_status(Self::TABLE, row.try_get("status")?),
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl Writable for BlogPosts {
    type Input = BlogPostInput;

    fn fields(input: &BlogPostInput) -> Result<Vec<Field>, serde_json::Error> {
        Ok(vec![
            Field::text("title", &input.title),
            Field::text("subtitle", &input.subtitle),
            Field::text("content", &input.content),
            Field::text("image", &input.image),
            Field::text("slug", &input.slug),
            Field::status("status", input.status),
        ])
    }

    fn display_name(input: &BlogPostInput) -> Option<String> {
        input.title.clone()
    }
}

pub struct TeamMembers;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamMember {
    pub id: i64,
    pub name: String,
    pub position: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub linkedin_url: Option<String>,
    pub show_linkedin: bool,
    pub status: Option<Status>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeamMemberInput {
    pub name: Option<String>,
    pub position: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub linkedin_url: Option<String>,
    pub show_linkedin: Option<bool>,
    pub status: Option<Status>,
}

impl Resource for TeamMembers {
    type Key = i64;
    type Record = TeamMember;

    const TABLE: &'static str = "team_members";
    const NOUN: &'static str = "Team member";
    const ORDER_BY: &'static str = "id ASC";

    fn from_row(row: &SqliteRow) -> Result<TeamMember, sqlx::Error> {
        Ok(TeamMember {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            position: row.try_get("position")?,
            description: row.try_get("description")?,
            image: row.try_get("image")?,
            linkedin_url: row.try_get("linkedin_url")?,
            show_linkedin: int_to_flag(row.try_get("show_linkedin")?),
            status: read_status(Self::TABLE, row.try_get("status")?),
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl Writable for TeamMembers {
    type Input = TeamMemberInput;

    fn fields(input: &TeamMemberInput) -> Result<Vec<Field>, serde_json::Error> {
        Ok(vec![
            Field::text("name", &input.name),
            Field::text("position", &input.position),
            Field::text("description", &input.description),
            Field::text("image", &input.image),
            Field::text("linkedin_url", &input.linkedin_url),
            // an absent flag is an explicit "hidden" on update
            Field::flag("show_linkedin", Some(input.show_linkedin.unwrap_or(false))),
            Field::status("status", input.status),
        ])
    }

    fn display_name(input: &TeamMemberInput) -> Option<String> {
        input.name.clone()
    }
}
