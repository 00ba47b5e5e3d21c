//! The add/edit product dialog.

use pazarin_core::form::{FormDraft, ProductField, ProductFields};
use pazarin_core::image::resolve_image_url;
use pazarin_core::product::ProductEntity;
use pazarin_core::upload::ImageUpload;

use crate::auth::Auth;
use crate::error::DashboardError;
use crate::Services;

pub const ADD_PRODUCT_TITLE: &str = "Add Product";
pub const EDIT_PRODUCT_TITLE: &str = "Edit Product";
pub const PRODUCT_CREATED_MESSAGE: &str = "Product added successfully";
pub const PRODUCT_UPDATED_MESSAGE: &str = "Product updated successfully";
pub const NOTHING_TO_SAVE_MESSAGE: &str = "Nothing to save";

/// Form state behind the product dialog: creates when opened without a
/// target, edits the target otherwise.
pub struct ProductEditor {
    services: Services,
    auth: Auth,
    target: Option<ProductEntity>,
    draft: FormDraft<ProductFields>,
}

impl ProductEditor {
    pub fn new(services: Services, auth: Auth, target: Option<ProductEntity>) -> Self {
        let draft = FormDraft::new(ProductFields::from_attributes(
            target.as_ref().map(|t| &t.attributes),
        ));
        Self {
            services,
            auth,
            target,
            draft,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.target.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit() {
            EDIT_PRODUCT_TITLE
        } else {
            ADD_PRODUCT_TITLE
        }
    }

    pub fn target(&self) -> Option<&ProductEntity> {
        self.target.as_ref()
    }

    pub fn fields(&self) -> &ProductFields {
        self.draft.fields()
    }

    pub fn set_field(&mut self, field: ProductField, value: impl Into<String>) {
        self.draft.set_field(field, value);
    }

    /// Pick a new image. Unsupported formats are reported through the
    /// snackbar and leave the form as it was.
    pub fn select_image(&mut self, upload: ImageUpload) -> Result<(), DashboardError> {
        if let Err(e) = self.draft.attach_image(upload) {
            let err = DashboardError::from(e);
            self.services.snackbar.error(err.user_message());
            return Err(err);
        }
        Ok(())
    }

    /// What the image slot shows: the picked file, else the stored image.
    pub fn image_preview(&self) -> Option<String> {
        if let Some(upload) = self.draft.image() {
            return Some(upload.to_data_url());
        }
        self.target
            .as_ref()
            .and_then(|t| t.attributes.image.url())
            .map(|url| resolve_image_url(self.services.cms.base_url(), url))
    }

    pub fn is_dirty(&self) -> bool {
        self.draft.is_dirty()
    }

    /// The save button is enabled only once something has been edited.
    pub fn can_submit(&self) -> bool {
        self.draft.is_dirty()
    }

    /// Save the form: `POST /products` when creating, `PUT /products/{id}`
    /// when editing.
    pub async fn submit(&mut self) -> Result<ProductEntity, DashboardError> {
        if !self.can_submit() {
            return Err(DashboardError::Validation(NOTHING_TO_SAVE_MESSAGE.into()));
        }

        match self.save().await {
            Ok(saved) => {
                let message = if self.is_edit() {
                    PRODUCT_UPDATED_MESSAGE
                } else {
                    PRODUCT_CREATED_MESSAGE
                };
                tracing::info!(product_id = saved.id, edit = self.is_edit(), "Product saved");
                self.services.snackbar.success(message);
                self.draft.mark_saved();
                if self.is_edit() {
                    self.target = Some(saved.clone());
                }
                Ok(saved)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Saving product failed");
                self.services.snackbar.error(e.user_message());
                Err(e)
            }
        }
    }

    async fn save(&self) -> Result<ProductEntity, DashboardError> {
        let payload = self.draft.fields().to_payload()?;
        let token = self.auth.token();
        let image = self.draft.image();

        let saved = match &self.target {
            Some(target) => {
                self.services
                    .cms
                    .update_product(&token, target.id, &payload, image)
                    .await?
            }
            None => {
                self.services
                    .cms
                    .create_product(&token, &payload, image)
                    .await?
            }
        };
        Ok(saved.data)
    }
}
