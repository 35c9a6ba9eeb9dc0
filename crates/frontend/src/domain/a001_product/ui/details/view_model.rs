use crate::shared::browser::BrowserPresenter;
use contracts::domain::a001_product::Product;
use contracts::domain::a002_size_option::SizeOptionSet;
use contracts::shared::config::SiteConfig;
use contracts::shared::view::ProductView;
use contracts::usecases::u502_add_to_cart::add_to_cart;
use contracts::usecases::u503_render_product::render_product;
use leptos::prelude::*;

/// ViewModel for the product page
#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub product: RwSignal<Option<Product>>,
    pub sizes: RwSignal<SizeOptionSet>,
    pub error: RwSignal<Option<String>>,
}

impl ProductDetailsViewModel {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            product: RwSignal::new(None),
            sizes: RwSignal::new(SizeOptionSet::new(config.site.sizes.clone())),
            error: RwSignal::new(None),
        }
    }

    /// Render the product named by the query string `search`
    pub fn load_from_query(&self, config: &SiteConfig, search: &str) {
        let mut view = *self;
        match render_product(config, search, &mut view) {
            Ok(rendered) => {
                log::debug!("product page shows '{}'", rendered.key);
                self.error.set(None);
            }
            Err(e) => {
                log::error!("{}", e);
                self.error.set(Some(e.to_string()));
            }
        }
    }

    pub fn add_to_cart_command(&self, config: &SiteConfig) {
        let result = self
            .sizes
            .with_untracked(|sizes| add_to_cart(sizes, &BrowserPresenter, config));
        if let Err(e) = result {
            log::debug!("add to cart rejected: {}", e);
        }
    }

    pub fn text(&self, f: fn(&Product) -> &str) -> impl Fn() -> Option<String> {
        let product = self.product;
        move || product.with(|p| p.as_ref().map(|p| f(p).to_string()))
    }
}

impl ProductView for ProductDetailsViewModel {
    fn write_product(&mut self, product: &Product) {
        self.product.set(Some(product.clone()));
    }
}
