//! The CMS operations the dashboard needs, as an injectable trait.

use async_trait::async_trait;
use pazarin_cms::{CmsClient, CmsError, LoginResponse};
use pazarin_core::entity::{ListResponse, SingleResponse};
use pazarin_core::product::{ProductAttributes, ProductPayload};
use pazarin_core::query::ListQuery;
use pazarin_core::shop::{ShopAttributes, ShopEntity, ShopPayload};
use pazarin_core::types::DbId;
use pazarin_core::upload::ImageUpload;
use pazarin_core::user::UserDetail;

#[async_trait]
pub trait CmsBackend: Send + Sync {
    /// API root, used to resolve relative media URLs.
    fn base_url(&self) -> &str;

    async fn login(&self, identifier: &str, password: &str) -> Result<LoginResponse, CmsError>;

    async fn me(&self, token: &str) -> Result<UserDetail, CmsError>;

    async fn list_products(
        &self,
        token: &str,
        query: &ListQuery,
    ) -> Result<ListResponse<ProductAttributes>, CmsError>;

    async fn delete_product(
        &self,
        token: &str,
        id: DbId,
    ) -> Result<SingleResponse<ProductAttributes>, CmsError>;

    async fn create_product(
        &self,
        token: &str,
        payload: &ProductPayload,
        image: Option<&ImageUpload>,
    ) -> Result<SingleResponse<ProductAttributes>, CmsError>;

    async fn update_product(
        &self,
        token: &str,
        id: DbId,
        payload: &ProductPayload,
        image: Option<&ImageUpload>,
    ) -> Result<SingleResponse<ProductAttributes>, CmsError>;

    async fn find_shop(&self, token: &str, owner_id: DbId)
        -> Result<Option<ShopEntity>, CmsError>;

    async fn update_shop(
        &self,
        token: &str,
        id: DbId,
        payload: &ShopPayload,
        photo: Option<&ImageUpload>,
    ) -> Result<SingleResponse<ShopAttributes>, CmsError>;
}

#[async_trait]
impl CmsBackend for CmsClient {
    fn base_url(&self) -> &str {
        CmsClient::base_url(self)
    }

    async fn login(&self, identifier: &str, password: &str) -> Result<LoginResponse, CmsError> {
        CmsClient::login(self, identifier, password).await
    }

    async fn me(&self, token: &str) -> Result<UserDetail, CmsError> {
        CmsClient::me(self, token).await
    }

    async fn list_products(
        &self,
        token: &str,
        query: &ListQuery,
    ) -> Result<ListResponse<ProductAttributes>, CmsError> {
        CmsClient::list_products(self, token, query).await
    }

    async fn delete_product(
        &self,
        token: &str,
        id: DbId,
    ) -> Result<SingleResponse<ProductAttributes>, CmsError> {
        CmsClient::delete_product(self, token, id).await
    }

    async fn create_product(
        &self,
        token: &str,
        payload: &ProductPayload,
        image: Option<&ImageUpload>,
    ) -> Result<SingleResponse<ProductAttributes>, CmsError> {
        CmsClient::create_product(self, token, payload, image).await
    }

    async fn update_product(
        &self,
        token: &str,
        id: DbId,
        payload: &ProductPayload,
        image: Option<&ImageUpload>,
    ) -> Result<SingleResponse<ProductAttributes>, CmsError> {
        CmsClient::update_product(self, token, id, payload, image).await
    }

    async fn find_shop(
        &self,
        token: &str,
        owner_id: DbId,
    ) -> Result<Option<ShopEntity>, CmsError> {
        CmsClient::find_shop(self, token, owner_id).await
    }

    async fn update_shop(
        &self,
        token: &str,
        id: DbId,
        payload: &ShopPayload,
        photo: Option<&ImageUpload>,
    ) -> Result<SingleResponse<ShopAttributes>, CmsError> {
        CmsClient::update_shop(self, token, id, payload, photo).await
    }
}
