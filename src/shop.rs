// The shop and the registry that guarantees there is only ever one of it.
//
// Instead of a process-wide static, `main` owns one `ShopRegistry` and lends it
// to whoever needs the shop.

use std::cell::OnceCell;

use crate::error::{Result, ShopError};

#[derive(Debug, PartialEq, Eq)]
pub struct Shop {
    name: String,
}

impl Shop {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The served sentence, without printing it.
    pub fn order_line(&self, description: &str, topping: &str, place: &str) -> String {
        format!("Serving {} with {} {}.", description, topping, place)
    }

    /// Prints the served sentence and returns the line that was printed.
    pub fn serve_ice_cream(&self, description: &str, topping: &str, place: &str) -> String {
        tracing::info!(shop = %self.name, description, place, "serving order");
        let line = self.order_line(description, topping, place);
        println!("{}", line);
        line
    }
}

#[derive(Debug, Default)]
pub struct ShopRegistry {
    instance: OnceCell<Shop>,
}

impl ShopRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the shop, creating it with `name` on first call. Later names are
    /// ignored.
    pub fn get_instance(&self, name: &str) -> &Shop {
        self.instance.get_or_init(|| {
            tracing::debug!(shop = name, "opening shop");
            Shop {
                name: name.to_string(),
            }
        })
    }

    /// Direct construction: fails if a shop already exists.
    pub fn open(&self, name: &str) -> Result<&Shop> {
        if let Some(existing) = self.instance.get() {
            tracing::warn!(shop = %existing.name, requested = name, "shop already open");
            return Err(ShopError::AlreadyInstantiated {
                name: existing.name.clone(),
            });
        }
        Ok(self.get_instance(name))
    }

    pub fn current(&self) -> Option<&Shop> {
        self.instance.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_starts_empty() {
        let registry = ShopRegistry::new();
        assert!(registry.current().is_none());
    }

    #[test]
    fn test_get_instance_returns_same_shop() {
        let registry = ShopRegistry::new();
        let first = registry.get_instance("Cool Treats");
        let second = registry.get_instance("Frosty Bites");

        assert!(std::ptr::eq(first, second));
        assert_eq!(second.name(), "Cool Treats");
    }

    #[test]
    fn test_open_twice_fails() {
        let registry = ShopRegistry::new();
        let shop = registry.open("Cool Treats").unwrap();
        assert_eq!(shop.name(), "Cool Treats");

        let err = registry.open("Frosty Bites").unwrap_err();
        assert!(matches!(err, ShopError::AlreadyInstantiated { ref name } if name == "Cool Treats"));
        assert_eq!(registry.current().unwrap().name(), "Cool Treats");
    }

    #[test]
    fn test_open_after_get_instance_fails() {
        let registry = ShopRegistry::new();
        registry.get_instance("Cool Treats");
        assert!(registry.open("Cool Treats").is_err());
    }

    #[test]
    fn test_order_line_keeps_empty_topping_gap() {
        let registry = ShopRegistry::new();
        let shop = registry.get_instance("Cool Treats");
        assert_eq!(
            shop.order_line("chocolate with chocolate syrup", "", "at the beach"),
            "Serving chocolate with chocolate syrup with  at the beach."
        );
        assert_eq!(
            shop.order_line("vanilla", "sprinkles", "in the park"),
            "Serving vanilla with sprinkles in the park."
        );
    }

    #[test]
    fn test_serve_returns_printed_line() {
        let registry = ShopRegistry::new();
        let shop = registry.get_instance("Cool Treats");
        let line = shop.serve_ice_cream("strawberry", "", "in the shop");
        assert_eq!(line, "Serving strawberry with  in the shop.");
        assert_eq!(line, shop.order_line("strawberry", "", "in the shop"));
    }
}
