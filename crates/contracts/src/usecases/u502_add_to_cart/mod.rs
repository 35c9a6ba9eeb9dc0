use crate::domain::a002_size_option::SizeOptionSet;
use crate::shared::config::SiteConfig;
use crate::shared::view::Presenter;
use thiserror::Error;

pub const NO_SIZE_WARNING: &str = "Please select a size before adding to cart.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddToCartError {
    #[error("no size selected")]
    NoSizeSelected,
}

/// Acknowledgment of a simulated cart addition. Nothing is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartConfirmation {
    pub size: String,
}

impl CartConfirmation {
    pub fn message(&self, config: &SiteConfig) -> String {
        format!(
            "Added to cart!\nSize: {}\n\nThank you for shopping with {}",
            self.size,
            config.site.brand_sentence()
        )
    }
}

pub fn add_to_cart(
    sizes: &SizeOptionSet,
    presenter: &impl Presenter,
    config: &SiteConfig,
) -> Result<CartConfirmation, AddToCartError> {
    let Some(size) = sizes.active_label() else {
        presenter.alert(NO_SIZE_WARNING);
        return Err(AddToCartError::NoSizeSelected);
    };

    let confirmation = CartConfirmation {
        size: size.to_string(),
    };
    log::info!("add to cart: size {}", confirmation.size);
    presenter.alert(&confirmation.message(config));
    Ok(confirmation)
}
