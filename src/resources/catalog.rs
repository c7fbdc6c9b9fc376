//! Product catalogue: products and their category/brand lookups.
//!
//! Products reference categories and brands by id without a foreign key, so
//! deleting a lookup row leaves products pointing at nothing. Listings resolve
//! the names with a LEFT JOIN and report `null` for orphans.

use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::{read_status, Field, Resource, Writable};
use crate::domain::Status;

pub struct Products;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub category_id: Option<i64>,
    pub brand_id: Option<i64>,
    pub status: Option<Status>,
    pub updated_at: Option<String>,
    pub category_name: Option<String>,
    pub brand_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductInput {
    pub name: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub category_id: Option<i64>,
    pub brand_id: Option<i64>,
    pub status: Option<Status>,
}

impl Resource for Products {
    type Key = i64;
    type Record = Product;

    const TABLE: &'static str = "products";
    const NOUN: &'static str = "Product";
    const ORDER_BY: &'static str = "updated_at DESC, id DESC";

    fn list_sql() -> String {
        r#"
        SELECT p.*, c.name AS category_name, b.name AS brand_name
        FROM products p
        LEFT JOIN categories c ON p.category_id = c.id
        LEFT JOIN brands b ON p.brand_id = b.id
        ORDER BY p.updated_at DESC, p.id DESC
        "#
        .to_string()
    }

    fn from_row(row: &SqliteRow) -> Result<Product, sqlx::Error> {
        // absent when the row was selected without the lookup join
        let category_name: Option<String> = row.try_get("category_name").unwrap_or(None);
        let brand_name: Option<String> = row.try_get("brand_name").unwrap_or(None);

        Ok(Product {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            subtitle: row.try_get("subtitle")?,
            description: row.try_get("description")?,
            price: row.try_get("price")?,
            image: row.try_get("image")?,
            category_id: row.try_get("category_id")?,
            brand_id: row.try_get("brand_id")?,
            status: read_status(Self::TABLE, row.try_get("status")?),
            updated_at: row.try_get("updated_at")?,
            category_name,
            brand_name,
        })
    }
}

impl Writable for Products {
    type Input = ProductInput;

    fn fields(input: &ProductInput) -> Result<Vec<Field>, serde_json::Error> {
        Ok(vec![
            Field::text("name", &input.name),
            Field::text("subtitle", &input.subtitle),
            Field::text("description", &input.description),
            Field::real("price", input.price),
            Field::text("image", &input.image),
            Field::integer("category_id", input.category_id),
            Field::integer("brand_id", input.brand_id),
            Field::status("status", input.status),
        ])
    }

    fn display_name(input: &ProductInput) -> Option<String> {
        input.name.clone()
    }
}

/// Named lookup row shared by categories and brands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lookup {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LookupInput {
    pub name: Option<String>,
}

fn lookup_from_row(row: &SqliteRow) -> Result<Lookup, sqlx::Error> {
    Ok(Lookup {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
    })
}

pub struct Categories;

impl Resource for Categories {
    type Key = i64;
    type Record = Lookup;

    const TABLE: &'static str = "categories";
    const NOUN: &'static str = "Category";
    const ORDER_BY: &'static str = "id ASC";

    fn from_row(row: &SqliteRow) -> Result<Lookup, sqlx::Error> {
        lookup_from_row(row)
    }
}

impl Writable for Categories {
    type Input = LookupInput;

    fn fields(input: &LookupInput) -> Result<Vec<Field>, serde_json::Error> {
        Ok(vec![Field::text("name", &input.name)])
    }

    fn display_name(input: &LookupInput) -> Option<String> {
        input.name.clone()
    }
}

pub struct Brands;

impl Resource for Brands {
    type Key = i64;
    type Record = Lookup;

    const TABLE: &'static str = "brands";
    const NOUN: &'static str = "Brand";
    const ORDER_BY: &'static str = "id ASC";

    fn from_row(row: &SqliteRow) -> Result<Lookup, sqlx::Error> {
        lookup_from_row(row)
    }
}

impl Writable for Brands {
    type Input = LookupInput;

    fn fields(input: &LookupInput) -> Result<Vec<Field>, serde_json::Error> {
        Ok(vec![Field::text("name", &input.name)])
    }

    fn display_name(input: &LookupInput) -> Option<String> {
        input.name.clone()
    }
}
