use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Main site configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    /// Directory containing the recipe documents
    #[serde(default = "default_content_dir")]
    pub content_dir: PathBuf,
    /// HTTP listener settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Site identity used in page chrome and head metadata
    #[serde(default)]
    pub site: SiteIdentity,
}

/// Address the HTTP listener binds to
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Interface to listen on
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Site-wide strings rendered into page chrome and metadata tags
#[derive(Debug, Deserialize, Clone)]
pub struct SiteIdentity {
    /// Site name shown in the header and page titles
    #[serde(default = "default_site_name")]
    pub name: String,
    /// Short line shown under the site name on the listing page
    #[serde(default = "default_tagline")]
    pub tagline: String,
    /// Meta description for the listing page
    #[serde(default = "default_site_description")]
    pub description: String,
    /// Public origin used for canonical and social-sharing URLs
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for SiteIdentity {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            tagline: default_tagline(),
            description: default_site_description(),
            base_url: default_base_url(),
        }
    }
}

// Default value functions
fn default_content_dir() -> PathBuf {
    PathBuf::from("content/recipes")
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_site_name() -> String {
    "Shredded Chicken Recipes".to_string()
}

fn default_tagline() -> String {
    "Delicious chicken recipes for every occasion".to_string()
}

fn default_site_description() -> String {
    "Discover amazing shredded chicken recipes for every occasion. Easy, healthy, and delicious meals for your family.".to_string()
}

fn default_base_url() -> String {
    "https://shreddedchickenrecipes.com".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: default_content_dir(),
            server: ServerConfig::default(),
            site: SiteIdentity::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPES__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPES__SERVER__PORT
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// Socket address string for the HTTP listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Absolute URL for a site path, based on the configured base URL
    ///
    /// An empty path or "/" yields the base URL itself.
    pub fn canonical_url(&self, path: &str) -> String {
        let base = self.site.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            base.to_string()
        } else {
            format!("{base}/{path}")
        }
    }
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with RECIPES__ prefix
/// 2. config.toml file in current directory
/// 3. Default values
///
/// Environment variable format: RECIPES__SITE__BASE_URL
pub fn load_config() -> Result<SiteConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Environment variables with RECIPES_ prefix
        // Use double underscore for nested: RECIPES__SERVER__PORT
        .add_source(
            Environment::with_prefix("RECIPES")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        assert_eq!(default_content_dir(), PathBuf::from("content/recipes"));
        assert_eq!(default_host(), "127.0.0.1");
        assert_eq!(default_port(), 3000);
        assert_eq!(default_site_name(), "Shredded Chicken Recipes");
        assert_eq!(default_base_url(), "https://shreddedchickenrecipes.com");
    }

    #[test]
    fn test_server_config_default() {
        let server = ServerConfig::default();
        assert_eq!(server.host, "127.0.0.1");
        assert_eq!(server.port, 3000);
    }

    #[test]
    fn test_bind_addr() {
        let mut config = SiteConfig::default();
        config.server.port = 8080;
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_canonical_url_strips_slashes() {
        let mut config = SiteConfig::default();
        config.site.base_url = "https://example.com/".to_string();

        assert_eq!(config.canonical_url(""), "https://example.com");
        assert_eq!(config.canonical_url("/"), "https://example.com");
        assert_eq!(
            config.canonical_url("garlic-chicken"),
            "https://example.com/garlic-chicken"
        );
        assert_eq!(config.canonical_url("/404"), "https://example.com/404");
    }

    #[test]
    fn test_load_config_without_file() {
        // Clear any environment variables that might interfere
        let keys_to_clear: Vec<String> = std::env::vars()
            .filter(|(k, _)| k.starts_with("RECIPES__"))
            .map(|(k, _)| k)
            .collect();

        for key in keys_to_clear {
            std::env::remove_var(&key);
        }

        // Every field has a default, so an empty environment loads cleanly
        let config = load_config().expect("defaults should load");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.content_dir, PathBuf::from("content/recipes"));
    }
}
