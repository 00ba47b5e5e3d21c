//! REST client for the headless CMS backing the dashboard.
//!
//! Wraps the CMS HTTP API (local login, current user, product CRUD, shop
//! profile) using [`reqwest`]. Every call takes the caller's bearer token;
//! an empty token sends the request anonymously.

use pazarin_core::entity::{Entity, ListResponse, SingleResponse};
use pazarin_core::product::{ProductAttributes, ProductPayload};
use pazarin_core::query::{owner_query, ListQuery};
use pazarin_core::shop::{ShopAttributes, ShopEntity, ShopPayload};
use pazarin_core::types::DbId;
use pazarin_core::upload::ImageUpload;
use pazarin_core::user::UserDetail;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

mod error;

pub use error::CmsError;

/// Multipart field holding the JSON metadata of a create/update request.
pub const DATA_PART: &str = "data";

/// HTTP client for one CMS instance.
#[derive(Debug, Clone)]
pub struct CmsClient {
    client: reqwest::Client,
    base_url: String,
}

/// Response of `POST /auth/local`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoginResponse {
    pub jwt: String,
    pub user: UserDetail,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    identifier: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct ShopList {
    #[serde(default)]
    data: Vec<Entity<ShopAttributes>>,
}

impl CmsClient {
    /// Create a client for the CMS API rooted at `base_url`,
    /// e.g. `http://localhost:1337/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Exchange username/email and password for a bearer token.
    ///
    /// Sends `POST /auth/local`.
    pub async fn login(&self, identifier: &str, password: &str) -> Result<LoginResponse, CmsError> {
        let response = self
            .client
            .post(self.url("/auth/local"))
            .json(&LoginRequest {
                identifier,
                password,
            })
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Fetch the profile behind `token` (`GET /users/me`).
    ///
    /// The returned profile has an empty `jwt`; callers attach the token.
    pub async fn me(&self, token: &str) -> Result<UserDetail, CmsError> {
        let response = self
            .authorize(self.client.get(self.url("/users/me")), token)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Fetch one page of products (`GET /products?...`).
    pub async fn list_products(
        &self,
        token: &str,
        query: &ListQuery,
    ) -> Result<ListResponse<ProductAttributes>, CmsError> {
        let url = format!("{}?{}", self.url("/products"), query.to_query_string());
        tracing::debug!(page = query.page, page_size = query.page_size, "Listing products");

        let response = self.authorize(self.client.get(url), token).send().await?;
        Self::parse_response(response).await
    }

    /// Delete a product (`DELETE /products/{id}`), returning the removed record.
    pub async fn delete_product(
        &self,
        token: &str,
        id: DbId,
    ) -> Result<SingleResponse<ProductAttributes>, CmsError> {
        let response = self
            .authorize(self.client.delete(self.url(&format!("/products/{id}"))), token)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Create a product (`POST /products`, multipart).
    pub async fn create_product(
        &self,
        token: &str,
        payload: &ProductPayload,
        image: Option<&ImageUpload>,
    ) -> Result<SingleResponse<ProductAttributes>, CmsError> {
        let form = multipart_body(payload, "image", image)?;
        let response = self
            .authorize(self.client.post(self.url("/products")), token)
            .multipart(form)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Update a product (`PUT /products/{id}`, multipart).
    pub async fn update_product(
        &self,
        token: &str,
        id: DbId,
        payload: &ProductPayload,
        image: Option<&ImageUpload>,
    ) -> Result<SingleResponse<ProductAttributes>, CmsError> {
        let form = multipart_body(payload, "image", image)?;
        let response = self
            .authorize(self.client.put(self.url(&format!("/products/{id}"))), token)
            .multipart(form)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Find the shop owned by `owner_id`, if any.
    pub async fn find_shop(
        &self,
        token: &str,
        owner_id: DbId,
    ) -> Result<Option<ShopEntity>, CmsError> {
        let url = format!("{}?{}", self.url("/shops"), owner_query(owner_id));
        let response = self.authorize(self.client.get(url), token).send().await?;

        let list: ShopList = Self::parse_response(response).await?;
        Ok(list.data.into_iter().next())
    }

    /// Update the shop profile (`PUT /shops/{id}`, multipart).
    pub async fn update_shop(
        &self,
        token: &str,
        id: DbId,
        payload: &ShopPayload,
        photo: Option<&ImageUpload>,
    ) -> Result<SingleResponse<ShopAttributes>, CmsError> {
        let form = multipart_body(payload, "photo", photo)?;
        let response = self
            .authorize(self.client.put(self.url(&format!("/shops/{id}"))), token)
            .multipart(form)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Attach `Authorization: Bearer` when a token is present.
    fn authorize(&self, builder: reqwest::RequestBuilder, token: &str) -> reqwest::RequestBuilder {
        if token.is_empty() {
            builder
        } else {
            builder.bearer_auth(token)
        }
    }

    /// Turn a non-2xx response into [`CmsError::Api`], extracting the CMS
    /// `error.message` when the body carries one.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, CmsError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        let error = CmsError::from_error_body(status.as_u16(), &body);
        tracing::warn!(status = status.as_u16(), error = %error, "CMS request failed");
        Err(error)
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, CmsError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

/// Build a `data` JSON part plus an optional `files.<field>` file part.
fn multipart_body<T: Serialize>(
    data: &T,
    file_field: &str,
    file: Option<&ImageUpload>,
) -> Result<Form, CmsError> {
    let mut form = Form::new().text(DATA_PART, serde_json::to_string(data)?);

    if let Some(file) = file {
        let content_type = if file.content_type.is_empty() {
            "application/octet-stream"
        } else {
            file.content_type.as_str()
        };
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(content_type)?;
        form = form.part(format!("files.{file_field}"), part);
    }

    Ok(form)
}
