use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, ShopError};
use crate::place::Place;
use crate::topping::ToppingKind;

pub const DEFAULT_SHOP_NAME: &str = "Cool Treats";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShopConfig {
    pub name: String,
    pub order: OrderConfig,
}

/// The order served when nothing is given on the command line.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OrderConfig {
    pub flavor: String,
    pub toppings: Vec<String>,
    pub place: String,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_SHOP_NAME.to_string(),
            order: OrderConfig::default(),
        }
    }
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            flavor: "chocolate".to_string(),
            toppings: vec![ToppingKind::ChocolateSyrup.key().to_string()],
            place: Place::AtBeach.key().to_string(),
        }
    }
}

impl ShopConfig {
    pub fn from_toml(content: &str, origin: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| ShopError::config(origin, e))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ShopError::config(path, e))?;
        let config = Self::from_toml(&content, path)?;
        tracing::debug!(path = %path.display(), shop = %config.name, "loaded config");
        Ok(config)
    }

    /// Loads `path` when given, otherwise falls back to the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
