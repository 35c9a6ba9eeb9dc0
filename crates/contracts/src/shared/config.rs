use crate::domain::a001_product::{Catalog, ProductKey};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub site: SiteSettings,
    pub products: Catalog,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SiteSettings {
    /// Brand name used in acknowledgments
    pub brand: String,
    /// Where the browser goes after a successful login or signup
    pub landing_page: String,
    /// Product shown when the query names none or an unknown one
    pub default_product: ProductKey,
    /// Size option labels on the product page
    pub sizes: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid site configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Product catalog is empty")]
    EmptyCatalog,

    #[error("Default product '{0}' is not in the catalog")]
    UnknownDefaultProduct(ProductKey),

    #[error("Product '{key}' is invalid: {reason}")]
    InvalidProduct { key: ProductKey, reason: String },
}

impl SiteSettings {
    /// Brand name closing a sentence, without doubling a trailing period
    pub fn brand_sentence(&self) -> String {
        if self.brand.ends_with('.') {
            self.brand.clone()
        } else {
            format!("{}.", self.brand)
        }
    }
}

/// Configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[site]
brand = "Prescott & Co."
landing_page = "/"
default_product = "westminster"
sizes = ["S", "M", "L", "XL"]

[products.westminster]
title = "The Westminster"
category = "Tailored Suits"
price = "88,900 PKR"
description = "A masterpiece of English tailoring, cut from premium Super 150s wool..."
image = "Images/suit.jpg"

[products.casual]
title = "Cable-Knit Quarter-Zip"
category = "wool and cashmere blend"
price = "29,500 PKR"
description = "Relaxed tailoring for everyday sophistication..."
image = "Images/elegance1.jpg"

[products.accessories]
title = "Tank Louis Watch"
category = "18K rose gold"
price = "15,000 PKR"
description = "Add the finishing touch to your style with curated accessories."
image = "Images/watch2.jpg"

[products.outerwear]
title = "Trench Coat - Off-White"
category = "Wool"
price = "45,000 PKR"
description = "Outerwear with timeless appeal..."
image = "Images/offwhitesuit.jpg"

[products.formal]
title = "Double-Knit Suit Trouser"
category = "double-knit fabric"
price = "20,000 PKR"
description = "Formal wear crafted to perfection..."
image = "Images/Gentleman Style.jpg"

[products.footwear]
title = "Summer Walk Loafer"
category = "Suede"
price = "25,000 PKR"
description = "Handcrafted footwear..."
image = "Images/Bestsellers.jpg"
"#;

impl SiteConfig {
    /// Parse and validate a configuration document
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the embedded default configuration
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_toml(DEFAULT_CONFIG)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.products.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        if !self.products.contains(&self.site.default_product) {
            return Err(ConfigError::UnknownDefaultProduct(
                self.site.default_product.clone(),
            ));
        }
        for (key, product) in self.products.iter() {
            product
                .validate()
                .map_err(|reason| ConfigError::InvalidProduct {
                    key: key.clone(),
                    reason,
                })?;
        }
        Ok(())
    }
}
