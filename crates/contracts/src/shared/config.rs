use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub contact: ContactSection,
    pub assets: AssetSection,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SiteSection {
    /// Deployment prefix, e.g. `/PortfolioTest` when served from a project page.
    #[serde(default)]
    pub base_path: String,
    #[serde(default)]
    pub optimize_images: bool,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ContactSection {
    pub endpoint: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AssetSection {
    pub model_path: String,
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[site]
base_path = ""
optimize_images = false

[contact]
endpoint = "https://formspree.io/f/xgvkldra"

[assets]
model_path = "/assets/3d/computer.glb"
"#;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid value for {key}: {value:?}")]
    InvalidOverride { key: &'static str, value: String },
}

/// Values captured from the build environment. `None` keeps the default.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub base_path: Option<String>,
    pub optimize_images: Option<String>,
    pub contact_endpoint: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: SiteSection {
                base_path: String::new(),
                optimize_images: false,
            },
            contact: ContactSection {
                endpoint: "https://formspree.io/f/xgvkldra".to_string(),
            },
            assets: AssetSection {
                model_path: "/assets/3d/computer.glb".to_string(),
            },
        }
    }
}

impl SiteConfig {
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Load the embedded defaults and apply build-time overrides on top.
    pub fn load(overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        let mut config = Self::from_toml(DEFAULT_CONFIG)?;

        if let Some(base_path) = &overrides.base_path {
            config.site.base_path = base_path.trim().to_string();
        }
        if let Some(raw) = &overrides.optimize_images {
            config.site.optimize_images = parse_flag("PORTFOLIO_OPTIMIZE_IMAGES", raw)?;
        }
        if let Some(endpoint) = &overrides.contact_endpoint {
            let endpoint = endpoint.trim();
            if endpoint.is_empty() {
                return Err(ConfigError::InvalidOverride {
                    key: "PORTFOLIO_CONTACT_ENDPOINT",
                    value: endpoint.to_string(),
                });
            }
            config.contact.endpoint = endpoint.to_string();
        }

        log::info!(
            "Site config: base_path={:?}, optimize_images={}",
            config.site.base_path,
            config.site.optimize_images
        );
        Ok(config)
    }

    /// Prefix a site-relative asset path with the deployment base path.
    /// Absolute URLs pass through untouched.
    pub fn asset_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        let base = self.site.base_path.trim_end_matches('/');
        format!("{}/{}", base, path.trim_start_matches('/'))
    }

    pub fn model_url(&self) -> String {
        self.asset_url(&self.assets.model_path)
    }
}

fn parse_flag(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidOverride {
            key,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = SiteConfig::from_toml(DEFAULT_CONFIG);
        assert!(config.is_ok());
        assert_eq!(config.unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_overrides_applied() {
        let overrides = ConfigOverrides {
            base_path: Some("/PortfolioTest".to_string()),
            optimize_images: Some("true".to_string()),
            contact_endpoint: Some("https://relay.example/f/abc".to_string()),
        };
        let config = SiteConfig::load(&overrides).unwrap();
        assert_eq!(config.site.base_path, "/PortfolioTest");
        assert!(config.site.optimize_images);
        assert_eq!(config.contact.endpoint, "https://relay.example/f/abc");
    }

    #[test]
    fn test_invalid_overrides_rejected() {
        let overrides = ConfigOverrides {
            optimize_images: Some("maybe".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            SiteConfig::load(&overrides),
            Err(ConfigError::InvalidOverride { key: "PORTFOLIO_OPTIMIZE_IMAGES", .. })
        ));

        let overrides = ConfigOverrides {
            contact_endpoint: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(SiteConfig::load(&overrides).is_err());
    }

    #[test]
    fn test_asset_url() {
        let mut config = SiteConfig::default();
        assert_eq!(config.asset_url("/tecsus.jpg"), "/tecsus.jpg");
        assert_eq!(config.asset_url("tecsus.jpg"), "/tecsus.jpg");

        config.site.base_path = "/PortfolioTest/".to_string();
        assert_eq!(config.asset_url("/tecsus.jpg"), "/PortfolioTest/tecsus.jpg");
        assert_eq!(
            config.model_url(),
            "/PortfolioTest/assets/3d/computer.glb"
        );
        assert_eq!(
            config.asset_url("https://cdn.example/a.png"),
            "https://cdn.example/a.png"
        );
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            SiteConfig::from_toml("[site"),
            Err(ConfigError::Parse(_))
        ));
    }
}
