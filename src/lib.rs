//! # Ice Cream Shop
//!
//! Four design patterns around one small scenario:
//!
//! - Factory: [`flavor::FlavorFactory`] builds flavors from a fixed catalog
//! - Decorator: [`topping::Topped`] wraps a scoop and extends its description
//! - Strategy: [`place::EatingPlace`] picks where the ice cream is eaten
//! - Singleton: [`shop::ShopRegistry`] hands out at most one [`shop::Shop`]
//!
//! ```
//! use ice_cream_shop::prelude::*;
//!
//! let registry = ShopRegistry::new();
//! let shop = registry.get_instance("Cool Treats");
//!
//! let chocolate = FlavorFactory::create_flavor("chocolate").unwrap();
//! let topped = Topped::new(chocolate, ToppingKind::ChocolateSyrup);
//! let description = topped.describe().unwrap();
//! let place = Place::AtBeach.select_place().unwrap();
//!
//! assert_eq!(
//!     shop.order_line(&description, "", place),
//!     "Serving chocolate with chocolate syrup with  at the beach."
//! );
//! ```

pub mod config;
pub mod error;
pub mod flavor;
pub mod logging;
pub mod order;
pub mod place;
pub mod shop;
pub mod topping;

pub use error::{Result, ShopError};

pub mod prelude {
    pub use crate::config::{OrderConfig, ShopConfig};
    pub use crate::error::{Result, ShopError};
    pub use crate::flavor::{Flavor, FlavorCatalog, FlavorFactory, Scoop};
    pub use crate::order::{serve_order, Order};
    pub use crate::place::{EatingPlace, Place};
    pub use crate::shop::{Shop, ShopRegistry};
    pub use crate::topping::{decorate, Topped, Topping, ToppingKind};
}
