//! Shop profile records.

use serde::{Deserialize, Serialize};

use crate::entity::{Entity, MediaRelation};
use crate::types::Timestamp;

pub type ShopEntity = Entity<ShopAttributes>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopAttributes {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub photo: MediaRelation,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
    #[serde(default)]
    pub published_at: Option<Timestamp>,
}

/// JSON metadata part of a shop update request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopPayload {
    pub name: String,
    pub address: String,
}

/// Placeholder shown when the signed-in user owns no shop yet (id 0).
pub fn empty_shop() -> ShopEntity {
    Entity {
        id: 0,
        attributes: ShopAttributes::default(),
    }
}
