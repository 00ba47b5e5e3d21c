//! Query-string builder for the CMS filter/pagination DSL.
//!
//! The CMS expects nested keys in bracket notation
//! (`filters[uniqueName][$containsi]=soap`). Keys are emitted verbatim and
//! only values are percent-encoded.

use crate::types::DbId;

/// Page size used when a list page is first opened.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// A paginated, optionally filtered product list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub page_size: u32,
    /// Case-insensitive `uniqueName` substring filter. `None` sends no filter.
    pub search: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            search: None,
        }
    }
}

impl ListQuery {
    pub fn page(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
            ..Self::default()
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Render the query string (without the leading `?`).
    ///
    /// ```
    /// use pazarin_core::query::ListQuery;
    ///
    /// let qs = ListQuery::page(2, 5).with_search("soap").to_query_string();
    /// assert_eq!(
    ///     qs,
    ///     "filters[uniqueName][$containsi]=soap&populate=*&pagination[page]=2&pagination[pageSize]=5"
    /// );
    /// ```
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<(String, String)> = Vec::new();

        if let Some(search) = &self.search {
            pairs.push(("filters[uniqueName][$containsi]".into(), search.clone()));
        }
        pairs.push(("populate".into(), "*".into()));
        pairs.push(("pagination[page]".into(), self.page.to_string()));
        pairs.push(("pagination[pageSize]".into(), self.page_size.to_string()));

        encode_pairs(&pairs)
    }
}

/// Query string selecting the shop owned by `owner_id`, with relations populated.
pub fn owner_query(owner_id: DbId) -> String {
    encode_pairs(&[
        (
            "filters[users_permissions_user][id]".to_string(),
            owner_id.to_string(),
        ),
        ("populate".to_string(), "*".to_string()),
    ])
}

fn encode_pairs(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", encode_value(value)))
        .collect::<Vec<_>>()
        .join("&")
}

fn encode_value(value: &str) -> String {
    // `*` is the populate wildcard and must stay literal.
    if value == "*" {
        return value.to_string();
    }
    urlencoding::encode(value).into_owned()
}
