use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Key Type
// ============================================================================

/// Catalog key of a product (for example, "westminster")
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductKey(pub String);

impl ProductKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// Record
// ============================================================================

/// Product record as shown on the product page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub title: String,
    pub category: String,
    pub price: String,
    pub description: String,

    /// Image path relative to the site root
    pub image: String,
}

impl Product {
    /// Alt text for the product image
    pub fn image_alt(&self) -> &str {
        &self.title
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("title must not be empty".into());
        }
        if self.image.trim().is_empty() {
            return Err("image must not be empty".into());
        }
        Ok(())
    }
}
