//! The signed-in CMS user.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// Profile returned by the CMS `me` endpoint, plus the bearer token it was
/// fetched with.
///
/// [`UserDetail::anonymous`] is the "not logged in" value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetail {
    pub id: DbId,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub confirmed: bool,
    #[serde(default)]
    pub blocked: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub jwt: String,
}

impl UserDetail {
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Attach the token the profile was fetched with.
    pub fn with_jwt(mut self, jwt: impl Into<String>) -> Self {
        self.jwt = jwt.into();
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.id != 0 && !self.jwt.is_empty()
    }
}
