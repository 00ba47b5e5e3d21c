//! The shop profile form on the settings page.

use pazarin_core::form::{FormDraft, ShopField, ShopFields};
use pazarin_core::image::resolve_image_url;
use pazarin_core::shop::{empty_shop, ShopEntity};
use pazarin_core::upload::ImageUpload;

use crate::auth::Auth;
use crate::error::DashboardError;
use crate::product_form::NOTHING_TO_SAVE_MESSAGE;
use crate::Services;

pub const SHOP_UPDATED_MESSAGE: &str = "Shop account updated successfully";

pub struct ShopProfile {
    services: Services,
    auth: Auth,
    shop: ShopEntity,
    draft: FormDraft<ShopFields>,
}

impl ShopProfile {
    /// Starts with the empty placeholder shop; call [`ShopProfile::load`].
    pub fn new(services: Services, auth: Auth) -> Self {
        let shop = empty_shop();
        let draft = FormDraft::new(ShopFields::from_attributes(&shop.attributes));
        Self {
            services,
            auth,
            shop,
            draft,
        }
    }

    /// Load the shop owned by the signed-in user. No match, or a failed
    /// request, leaves the empty placeholder.
    pub async fn load(&mut self) -> &ShopEntity {
        let user = self.auth.detail_user();
        let found = match self.services.cms.find_shop(&user.jwt, user.id).await {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!(user_id = user.id, error = %e, "Loading shop failed");
                self.services.snackbar.error(e.user_message());
                None
            }
        };

        self.reset_to(found.unwrap_or_else(empty_shop));
        &self.shop
    }

    fn reset_to(&mut self, shop: ShopEntity) {
        self.draft = FormDraft::new(ShopFields::from_attributes(&shop.attributes));
        self.shop = shop;
    }

    pub fn shop(&self) -> &ShopEntity {
        &self.shop
    }

    pub fn fields(&self) -> &ShopFields {
        self.draft.fields()
    }

    pub fn set_field(&mut self, field: ShopField, value: impl Into<String>) {
        self.draft.set_field(field, value);
    }

    /// Pick a new photo; unsupported formats go to the snackbar.
    pub fn select_photo(&mut self, upload: ImageUpload) -> Result<(), DashboardError> {
        if let Err(e) = self.draft.attach_image(upload) {
            let err = DashboardError::from(e);
            self.services.snackbar.error(err.user_message());
            return Err(err);
        }
        Ok(())
    }

    pub fn photo_preview(&self) -> Option<String> {
        if let Some(upload) = self.draft.image() {
            return Some(upload.to_data_url());
        }
        self.shop
            .attributes
            .photo
            .url()
            .map(|url| resolve_image_url(self.services.cms.base_url(), url))
    }

    pub fn is_dirty(&self) -> bool {
        self.draft.is_dirty()
    }

    pub fn can_submit(&self) -> bool {
        self.draft.is_dirty()
    }

    /// `PUT /shops/{id}` with the edited fields and optional new photo.
    pub async fn submit(&mut self) -> Result<&ShopEntity, DashboardError> {
        if !self.can_submit() {
            return Err(DashboardError::Validation(NOTHING_TO_SAVE_MESSAGE.into()));
        }

        let payload = self.draft.fields().to_payload();
        let token = self.auth.token();
        let result = self
            .services
            .cms
            .update_shop(&token, self.shop.id, &payload, self.draft.image())
            .await;

        match result {
            Ok(saved) => {
                tracing::info!(shop_id = saved.data.id, "Shop updated");
                self.services.snackbar.success(SHOP_UPDATED_MESSAGE);
                self.reset_to(saved.data);
                Ok(&self.shop)
            }
            Err(e) => {
                tracing::warn!(shop_id = self.shop.id, error = %e, "Updating shop failed");
                self.services.snackbar.error(e.user_message());
                Err(e.into())
            }
        }
    }
}
