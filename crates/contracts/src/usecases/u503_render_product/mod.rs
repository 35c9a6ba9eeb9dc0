//! Product page rendering from the `product` query parameter.

use crate::domain::a001_product::ProductKey;
use crate::shared::config::SiteConfig;
use crate::shared::view::ProductView;
use serde::Serialize;
use thiserror::Error;
use url::form_urlencoded;

pub const PRODUCT_PAGE: &str = "/product";

#[derive(Debug, Serialize)]
struct ProductQuery {
    product: Option<String>,
}

/// Link to the product page for `key`
pub fn product_href(key: &ProductKey) -> String {
    let query = ProductQuery {
        product: Some(key.to_string()),
    };
    match serde_qs::to_string(&query) {
        Ok(qs) => format!("{}?{}", PRODUCT_PAGE, qs),
        Err(e) => {
            log::warn!("cannot encode product key '{}': {}", key, e);
            PRODUCT_PAGE.to_string()
        }
    }
}

/// How the rendered key was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    Query,
    Default,
}

/// Read the `product` parameter from a query string (leading `?` optional).
///
/// Unrelated and repeated parameters are tolerated; the first non-empty
/// `product` value wins. A missing or empty parameter yields `default`.
pub fn product_key_from_query(search: &str, default: &ProductKey) -> (ProductKey, KeySource) {
    let requested = form_urlencoded::parse(search.trim_start_matches('?').as_bytes())
        .find(|(name, value)| name == "product" && !value.is_empty())
        .map(|(_, value)| value.into_owned());

    match requested {
        Some(key) => (ProductKey::new(key), KeySource::Query),
        None => (default.clone(), KeySource::Default),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedProduct {
    pub key: ProductKey,
    /// The requested key was not in the catalog
    pub fell_back: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("neither '{requested}' nor the default product '{default}' is in the catalog")]
    NoProduct {
        requested: ProductKey,
        default: ProductKey,
    },
}

pub fn render_product(
    config: &SiteConfig,
    search: &str,
    view: &mut impl ProductView,
) -> Result<RenderedProduct, RenderError> {
    let default = &config.site.default_product;
    let (requested, _) = product_key_from_query(search, default);

    let (key, product) = config
        .products
        .resolve(&requested, default)
        .ok_or_else(|| RenderError::NoProduct {
            requested: requested.clone(),
            default: default.clone(),
        })?;

    let fell_back = *key != requested;
    if fell_back {
        log::warn!("unknown product '{}', showing '{}'", requested, key);
    }

    view.write_product(product);
    Ok(RenderedProduct {
        key: key.clone(),
        fell_back,
    })
}
