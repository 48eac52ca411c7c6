//! Request and response payloads of the catalog API

use serde::{Deserialize, Serialize};

/// Request for user creation
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// User as returned by the server
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Request for category creation
#[derive(Debug, Clone, Serialize)]
pub struct NewCategory {
    pub name: String,
    pub description: String,
}

/// Category as returned by the server
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Request for product creation
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub user_id: i64,
    pub category_ids: Vec<i64>,
}

/// Paged envelope: results under `content` plus optional paging metadata
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: Option<u64>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub size: Option<u32>,
    #[serde(default)]
    pub last: Option<bool>,
}

/// A list endpoint answers either with a bare array or with a [`Page`]
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Bare(Vec<T>),
    Paged(Page<T>),
}

impl<T> Listing<T> {
    /// Unwrap the records regardless of the envelope they came in
    pub fn into_items(self) -> Vec<T> {
        match self {
            Listing::Bare(items) => items,
            Listing::Paged(page) => page.content,
        }
    }

    /// Whether the server wrapped the records in a paged envelope
    pub fn is_paged(&self) -> bool {
        matches!(self, Listing::Paged(_))
    }
}
