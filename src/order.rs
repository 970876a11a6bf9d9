// An order ties the patterns together: factory, decorators, place strategy,
// and finally the shop.

use crate::config::OrderConfig;
use crate::error::Result;
use crate::flavor::FlavorFactory;
use crate::place::{EatingPlace, Place};
use crate::shop::Shop;
use crate::topping::{decorate, ToppingKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub flavor: String,
    pub toppings: Vec<ToppingKind>,
    pub place: Place,
}

impl Order {
    pub fn new(flavor: impl Into<String>, toppings: Vec<ToppingKind>, place: Place) -> Self {
        Self {
            flavor: flavor.into(),
            toppings,
            place,
        }
    }

    pub fn from_config(config: &OrderConfig) -> Result<Self> {
        let toppings = config
            .toppings
            .iter()
            .map(|t| t.parse::<ToppingKind>())
            .collect::<Result<Vec<ToppingKind>>>()?;
        let place = config.place.parse::<Place>()?;
        Ok(Self::new(config.flavor.clone(), toppings, place))
    }

    /// Builds the decorated description and the place phrase. Nothing is
    /// printed, so a failing order produces no output.
    pub fn prepare(&self) -> Result<(String, &'static str)> {
        let flavor = FlavorFactory::create_flavor(&self.flavor)?;
        let description = decorate(flavor, &self.toppings).describe()?;
        let place = self.place.select_place()?;
        Ok((description, place))
    }
}

/// Prepares `order` and has `shop` serve it. The topping argument is always
/// empty because the toppings are already part of the description.
pub fn serve_order(shop: &Shop, order: &Order) -> Result<String> {
    let (description, place) = order.prepare()?;
    Ok(shop.serve_ice_cream(&description, "", place))
}
