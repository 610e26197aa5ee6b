#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::pagination::ITEMS_PER_PAGE;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_PRODUCT_MODEL: &str = "product.template";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProxyConfig {
    pub odoo: OdooSettings,
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct OdooSettings {
    pub url: String,
    pub db: String,
    pub user: String,
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// proxy 未帶 `limit` 時使用的預設值
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_model() -> String {
    DEFAULT_PRODUCT_MODEL.to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_page_size() -> usize {
    ITEMS_PER_PAGE
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

// api_key 不寫進日誌
impl fmt::Debug for OdooSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OdooSettings")
            .field("url", &self.url)
            .field("db", &self.db)
            .field("user", &self.user)
            .field("api_key", &"***")
            .field("model", &self.model)
            .finish()
    }
}

impl ConfigProvider for OdooSettings {
    fn odoo_url(&self) -> &str {
        &self.url
    }

    fn database(&self) -> &str {
        &self.db
    }

    fn username(&self) -> &str {
        &self.user
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn product_model(&self) -> &str {
        &self.model
    }
}

impl ProxyConfig {
    /// 從環境變數載入：ODOO_URL、ODOO_DB、ODOO_USER、ODOO_API，另可選 HOST、PORT、PAGE_SIZE
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ProxyConfig::from_env`] with an injectable variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| CatalogError::MissingConfigError {
                field: key.to_string(),
            })
        };

        Ok(Self {
            odoo: OdooSettings {
                url: required("ODOO_URL")?,
                db: required("ODOO_DB")?,
                user: required("ODOO_USER")?,
                api_key: required("ODOO_API")?,
                model: lookup("ODOO_MODEL").unwrap_or_else(default_model),
            },
            server: ServerSettings {
                host: lookup("HOST").unwrap_or_else(default_host),
                port: parse_optional(&lookup, "PORT")?.unwrap_or_else(default_port),
            },
            catalog: CatalogSettings {
                page_size: parse_optional(&lookup, "PAGE_SIZE")?.unwrap_or_else(default_page_size),
            },
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_optional<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: fmt::Display,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|e: T::Err| CatalogError::InvalidConfigValueError {
                    field: key.to_string(),
                    value: raw.clone(),
                    reason: e.to_string(),
                })
        })
        .transpose()
}

impl Validate for ProxyConfig {
    fn validate(&self) -> Result<()> {
        validate_url("odoo.url", &self.odoo.url)?;
        validate_non_empty_string("odoo.db", &self.odoo.db)?;
        validate_non_empty_string("odoo.user", &self.odoo.user)?;
        validate_non_empty_string("odoo.api_key", &self.odoo.api_key)?;
        validate_non_empty_string("odoo.model", &self.odoo.model)?;
        validate_non_empty_string("server.host", &self.server.host)?;
        validate_positive_number("server.port", usize::from(self.server.port), 1)?;
        validate_range("catalog.page_size", self.catalog.page_size, 1, 500)?;

        tracing::debug!("✅ Proxy configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    const BASE: [(&str, &str); 4] = [
        ("ODOO_URL", "https://b4experience.odoo.com"),
        ("ODOO_DB", "b4experience"),
        ("ODOO_USER", "api@b4experience.com"),
        ("ODOO_API", "k3y"),
    ];

    #[test]
    fn test_from_env_with_defaults() {
        let config = ProxyConfig::from_lookup(lookup_from(&BASE)).unwrap();

        assert_eq!(config.odoo.db, "b4experience");
        assert_eq!(config.odoo.model, "product.template");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.catalog.page_size, 8);
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_env_missing_variable() {
        let err = ProxyConfig::from_lookup(lookup_from(&BASE[..3])).unwrap_err();
        match err {
            CatalogError::MissingConfigError { field } => assert_eq!(field, "ODOO_API"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_env_invalid_port() {
        let mut pairs = BASE.to_vec();
        pairs.push(("PORT", "eighty"));
        let err = ProxyConfig::from_lookup(lookup_from(&pairs)).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidConfigValueError { .. }));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = ProxyConfig::from_lookup(lookup_from(&BASE)).unwrap();
        config.catalog.page_size = 0;
        assert!(config.validate().is_err());

        let mut config = ProxyConfig::from_lookup(lookup_from(&BASE)).unwrap();
        config.odoo.url = "b4experience.odoo.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_hides_api_key() {
        let config = ProxyConfig::from_lookup(lookup_from(&BASE)).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("k3y"));
        assert!(debug.contains("***"));
    }
}
