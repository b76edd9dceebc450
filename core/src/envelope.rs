//! Wire envelopes wrapped around every entity the panel returns.
//!
//! # Design
//! The panel wraps entities in three shapes: a single `{object, attributes,
//! meta?}`, an unpaginated `{object: "list", data: [...]}` and a paginated
//! list that adds `meta.pagination`. The `unwrap_*` functions are pure and
//! generic over the entity type; only pagination metadata survives the
//! unwrap.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// `{ object, attributes }` item inside a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item<T> {
    #[serde(default)]
    pub object: String,
    pub attributes: T,
}

/// A single entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Single<T> {
    #[serde(default)]
    pub object: String,
    pub attributes: T,
    #[serde(default, deserialize_with = "object_or_empty", skip_serializing_if = "Option::is_none")]
    pub meta: Option<Map<String, Value>>,
}

/// An unpaginated list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List<T> {
    #[serde(default)]
    pub object: String,
    pub data: Vec<Item<T>>,
}

/// A paginated list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    #[serde(default)]
    pub object: String,
    pub data: Vec<Item<T>>,
    pub meta: PageMeta,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub total: u64,
    pub count: u64,
    pub per_page: u64,
    pub current_page: u64,
    pub total_pages: u64,
    #[serde(default, deserialize_with = "links_or_empty")]
    pub links: PaginationLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationLinks {
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub next: Option<String>,
}

/// One page of unwrapped entities plus the panel's pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Page<T> {
    pub fn pagination(&self) -> &Pagination {
        &self.meta.pagination
    }

    pub fn has_next(&self) -> bool {
        self.meta.pagination.current_page < self.meta.pagination.total_pages
    }
}

pub fn unwrap_single<T>(envelope: Single<T>) -> T {
    envelope.attributes
}

pub fn unwrap_list<T>(envelope: List<T>) -> Vec<T> {
    envelope.data.into_iter().map(|item| item.attributes).collect()
}

pub fn unwrap_page<T>(envelope: Paginated<T>) -> Page<T> {
    Page {
        data: envelope.data.into_iter().map(|item| item.attributes).collect(),
        meta: envelope.meta,
    }
}

// PHP serializes an empty map as `[]`, so `links` and `meta` may arrive as
// an empty array.
fn links_or_empty<'de, D>(deserializer: D) -> Result<PaginationLinks, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Object(map) => PaginationLinks::deserialize(Value::Object(map)).map_err(serde::de::Error::custom),
        _ => Ok(PaginationLinks::default()),
    }
}

fn object_or_empty<'de, D>(deserializer: D) -> Result<Option<Map<String, Value>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Object(map) => Ok(Some(map)),
        _ => Ok(None),
    }
}
