//! Form drafts for the product dialog and the shop profile.
//!
//! A draft starts from the record being edited (or blank), tracks whether the
//! user has touched anything, and turns into the JSON metadata part of a
//! multipart save request.

use crate::error::CoreError;
use crate::product::{unique_name, ProductAttributes, ProductPayload};
use crate::shop::{ShopAttributes, ShopPayload};
use crate::upload::ImageUpload;

/// Field sets that can be edited one field at a time.
pub trait FormFields {
    type Field: Copy;

    fn set(&mut self, field: Self::Field, value: String);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductField {
    Name,
    Price,
    BasePrice,
    Unit,
    Stock,
    ProductId,
}

/// Text inputs of the product dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFields {
    pub name: String,
    pub price: String,
    pub base_price: String,
    pub unit: String,
    pub stock: String,
    pub product_id: String,
}

impl ProductFields {
    pub fn from_attributes(attributes: Option<&ProductAttributes>) -> Self {
        let Some(attrs) = attributes else {
            return Self::default();
        };
        Self {
            name: attrs.name.clone(),
            price: attrs.price.clone().unwrap_or_default(),
            base_price: attrs.base_price.clone().unwrap_or_default(),
            unit: attrs.unit.clone(),
            stock: attrs.stock.map(|s| s.to_string()).unwrap_or_default(),
            product_id: attrs.product_id.clone().unwrap_or_default(),
        }
    }

    /// Build the metadata blob, deriving `uniqueName` from name and unit.
    pub fn to_payload(&self) -> Result<ProductPayload, CoreError> {
        let stock = match self.stock.trim() {
            "" => None,
            raw => Some(raw.parse::<i64>().map_err(|_| {
                CoreError::Validation(format!("Stock must be a whole number, got '{raw}'"))
            })?),
        };

        Ok(ProductPayload {
            name: self.name.trim().to_string(),
            price: self.price.trim().to_string(),
            base_price: self.base_price.trim().to_string(),
            unit: self.unit.trim().to_string(),
            stock,
            product_id: self.product_id.trim().to_string(),
            unique_name: unique_name(&self.name, &self.unit),
        })
    }
}

impl FormFields for ProductFields {
    type Field = ProductField;

    fn set(&mut self, field: ProductField, value: String) {
        let slot = match field {
            ProductField::Name => &mut self.name,
            ProductField::Price => &mut self.price,
            ProductField::BasePrice => &mut self.base_price,
            ProductField::Unit => &mut self.unit,
            ProductField::Stock => &mut self.stock,
            ProductField::ProductId => &mut self.product_id,
        };
        *slot = value;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopField {
    Name,
    Address,
}

/// Text inputs of the shop profile form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShopFields {
    pub name: String,
    pub address: String,
}

impl ShopFields {
    pub fn from_attributes(attributes: &ShopAttributes) -> Self {
        Self {
            name: attributes.name.clone(),
            address: attributes.address.clone(),
        }
    }

    pub fn to_payload(&self) -> ShopPayload {
        ShopPayload {
            name: self.name.clone(),
            address: self.address.clone(),
        }
    }
}

impl FormFields for ShopFields {
    type Field = ShopField;

    fn set(&mut self, field: ShopField, value: String) {
        match field {
            ShopField::Name => self.name = value,
            ShopField::Address => self.address = value,
        }
    }
}

/// Editable copy of a record plus an optional picked image.
///
/// Any edit marks the draft dirty, even one that restores the original
/// value. Saving is only offered for dirty drafts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft<F> {
    fields: F,
    image: Option<ImageUpload>,
    dirty: bool,
}

impl<F: FormFields> FormDraft<F> {
    pub fn new(fields: F) -> Self {
        Self {
            fields,
            image: None,
            dirty: false,
        }
    }

    pub fn fields(&self) -> &F {
        &self.fields
    }

    pub fn image(&self) -> Option<&ImageUpload> {
        self.image.as_ref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn set_field(&mut self, field: F::Field, value: impl Into<String>) {
        self.fields.set(field, value.into());
        self.dirty = true;
    }

    /// Attach an image after checking its format. A rejected file leaves the
    /// draft untouched.
    pub fn attach_image(&mut self, upload: ImageUpload) -> Result<(), CoreError> {
        upload.validate()?;
        self.image = Some(upload);
        self.dirty = true;
        Ok(())
    }

    /// Called after a successful save: the saved values become the baseline.
    pub fn mark_saved(&mut self) {
        self.image = None;
        self.dirty = false;
    }
}
