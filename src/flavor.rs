// Flavors: the catalog, the plain scoop, and the factory that builds one.

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;

use crate::error::{Result, ShopError};

lazy_static! {
    static ref CATALOG: HashMap<&'static str, &'static str> = [
        ("vanilla", "vanilla"),
        ("chocolate", "chocolate"),
        ("strawberry", "strawberry"),
    ]
    .into_iter()
    .collect();
}

/// Anything that can be handed across the counter: a plain flavor or a
/// flavor buried under any number of toppings.
pub trait Scoop {
    fn describe(&self) -> Result<String>;
}

/// Read-only view over the fixed set of flavors the shop sells.
pub struct FlavorCatalog;

impl FlavorCatalog {
    pub fn lookup(name: &str) -> Option<&'static str> {
        CATALOG.get(name).copied()
    }

    pub fn contains(name: &str) -> bool {
        CATALOG.contains_key(name)
    }

    /// Flavor names in alphabetical order.
    pub fn names() -> Vec<&'static str> {
        let mut names: Vec<_> = CATALOG.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flavor {
    flavor: String,
}

impl Flavor {
    pub fn name(&self) -> &str {
        &self.flavor
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.flavor)
    }
}

impl Scoop for Flavor {
    fn describe(&self) -> Result<String> {
        Ok(self.flavor.clone())
    }
}

pub struct FlavorFactory;

impl FlavorFactory {
    pub fn create_flavor(name: &str) -> Result<Flavor> {
        let flavor = FlavorCatalog::lookup(name).ok_or_else(|| {
            tracing::debug!(flavor = name, "flavor not in catalog");
            ShopError::unknown_flavor(name)
        })?;

        tracing::debug!(flavor, "scooped flavor");
        Ok(Flavor {
            flavor: flavor.to_string(),
        })
    }
}
