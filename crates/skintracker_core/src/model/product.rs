//! Product inventory domain model.
//!
//! # Responsibility
//! - Define the product record kept in the inventory collection.
//! - Validate form-level constraints before persistence.
//!
//! # Invariants
//! - `id` is assigned at creation time and is immutable afterwards.
//! - `name` and `brand` are non-empty after trimming.

use std::error::Error;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::model::{next_record_id, RecordId};

/// Image URI assigned to products created without a photo.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=100&width=100";

/// Fixed product category set offered by the inventory form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Cleanser,
    Toner,
    Serum,
    Moisturizer,
    Sunscreen,
    Mask,
    Other,
}

/// Validation failures for product create/update input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductValidationError {
    /// Product name is empty after trimming.
    EmptyName,
    /// Brand name is empty after trimming.
    EmptyBrand,
}

impl Display for ProductValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "product name is required"),
            Self::EmptyBrand => write!(f, "brand name is required"),
        }
    }
}

impl Error for ProductValidationError {}

/// One product in the user's inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stable id; creation timestamp in epoch milliseconds.
    pub id: RecordId,
    pub name: String,
    pub brand: String,
    pub category: ProductCategory,
    #[serde(default)]
    pub notes: String,
    /// Image URI; a placeholder until photo capture exists.
    #[serde(default = "default_image")]
    pub image: String,
}

/// Form-level input for creating or editing a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub brand: String,
    pub category: ProductCategory,
    pub notes: String,
}

impl Product {
    /// Builds a product from form input with a freshly allocated id.
    pub fn from_draft(draft: ProductDraft) -> Result<Self, ProductValidationError> {
        Self::with_id(next_record_id(), draft)
    }

    /// Builds a product with a caller-provided stable id.
    ///
    /// Used by edit paths and tests where identity already exists.
    pub fn with_id(id: RecordId, draft: ProductDraft) -> Result<Self, ProductValidationError> {
        let product = Self {
            id,
            name: draft.name,
            brand: draft.brand,
            category: draft.category,
            notes: draft.notes,
            image: PLACEHOLDER_IMAGE.to_string(),
        };
        product.validate()?;
        Ok(product)
    }

    /// Checks form-level constraints without touching identity.
    pub fn validate(&self) -> Result<(), ProductValidationError> {
        if self.name.trim().is_empty() {
            return Err(ProductValidationError::EmptyName);
        }
        if self.brand.trim().is_empty() {
            return Err(ProductValidationError::EmptyBrand);
        }
        Ok(())
    }
}

fn default_image() -> String {
    PLACEHOLDER_IMAGE.to_string()
}

#[cfg(test)]
mod tests {
    use super::{Product, ProductCategory, ProductDraft, ProductValidationError, PLACEHOLDER_IMAGE};

    fn draft(name: &str, brand: &str) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            brand: brand.to_string(),
            category: ProductCategory::Cleanser,
            notes: String::new(),
        }
    }

    #[test]
    fn from_draft_assigns_id_and_placeholder_image() {
        let product = Product::from_draft(draft("Gentle Cleanser", "CeraVe")).unwrap();
        assert!(product.id > 0);
        assert_eq!(product.image, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn validation_rejects_blank_name_and_brand() {
        let err = Product::from_draft(draft("   ", "CeraVe")).unwrap_err();
        assert_eq!(err, ProductValidationError::EmptyName);

        let err = Product::from_draft(draft("Gentle Cleanser", "")).unwrap_err();
        assert_eq!(err, ProductValidationError::EmptyBrand);
    }

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_value(ProductCategory::Sunscreen).unwrap();
        assert_eq!(json, "sunscreen");
    }
}
