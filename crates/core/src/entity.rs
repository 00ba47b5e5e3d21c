//! The CMS record envelope and list metadata.

use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

/// `{ id, attributes }` wrapper around every CMS record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity<A> {
    pub id: DbId,
    pub attributes: A,
}

/// Server-side pagination, mirrored by the list controllers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub page_count: u32,
    pub total: u64,
}

impl Pagination {
    /// Pagination shown before anything has been loaded.
    pub fn empty(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size,
            page_count: 1,
            total: 0,
        }
    }

    pub fn is_last_page(&self) -> bool {
        self.page >= self.page_count
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListMeta {
    pub pagination: Pagination,
}

/// `{ data: [...], meta: { pagination } }` list response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<A> {
    pub data: Vec<Entity<A>>,
    pub meta: ListMeta,
}

/// `{ data: {...} }` single-record response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleResponse<A> {
    pub data: Entity<A>,
}

/// Media relation (`image`, `photo`): `{ data: null | { id, attributes } }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaRelation {
    #[serde(default)]
    pub data: Option<Entity<MediaAttributes>>,
}

impl MediaRelation {
    pub fn url(&self) -> Option<&str> {
        self.data.as_ref().map(|media| media.attributes.url.as_str())
    }
}

/// Uploaded file metadata. Only the fields the dashboard reads are typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaAttributes {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub mime: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}
