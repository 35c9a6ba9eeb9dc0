use contracts::shared::config::SiteConfig;
use leptos::prelude::*;
use std::sync::Arc;

/// Application-wide context. Holds the site configuration parsed at startup.
#[derive(Clone)]
pub struct AppGlobalContext {
    pub config: Arc<SiteConfig>,
}

impl AppGlobalContext {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Hook to access the site configuration
pub fn use_site_config() -> Arc<SiteConfig> {
    use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found")
        .config
}
