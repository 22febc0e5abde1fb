//! Site configuration for the browser build.
//!
//! Values are fixed at compile time: the embedded defaults from
//! `contracts::shared::config` plus `PORTFOLIO_*` variables present in the
//! build environment.

use contracts::shared::config::{ConfigOverrides, SiteConfig};
use leptos::prelude::*;

fn build_overrides() -> ConfigOverrides {
    ConfigOverrides {
        base_path: option_env!("PORTFOLIO_BASE_PATH").map(str::to_string),
        optimize_images: option_env!("PORTFOLIO_OPTIMIZE_IMAGES").map(str::to_string),
        contact_endpoint: option_env!("PORTFOLIO_CONTACT_ENDPOINT").map(str::to_string),
    }
}

/// Load the configuration and provide it to the component tree.
pub fn provide_site_config() {
    let config = match SiteConfig::load(&build_overrides()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Falling back to default site config: {}", e);
            SiteConfig::default()
        }
    };
    provide_context(config);
}

/// Hook to read the site configuration.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().expect("SiteConfig not found. Call provide_site_config() in App.")
}

/// Resolve a site-relative asset path against the deployment base path.
pub fn asset_url(path: &str) -> String {
    use_site_config().asset_url(path)
}
