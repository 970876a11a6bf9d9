// Toppings decorate a scoop by extending its description.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ShopError};
use crate::flavor::Scoop;

/// A topping phrase. The default method is the abstract base: a topping that
/// does not supply its own phrase cannot be served.
pub trait Topping {
    fn phrase(&self) -> Result<&'static str> {
        Err(ShopError::not_implemented("Topping::phrase"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToppingKind {
    ChocolateSyrup,
    ChocolateSprinkles,
}

impl ToppingKind {
    pub const ALL: [ToppingKind; 2] = [
        ToppingKind::ChocolateSyrup,
        ToppingKind::ChocolateSprinkles,
    ];

    /// Spelling accepted on the command line and in config files.
    pub fn key(self) -> &'static str {
        match self {
            ToppingKind::ChocolateSyrup => "syrup",
            ToppingKind::ChocolateSprinkles => "sprinkles",
        }
    }
}

impl Topping for ToppingKind {
    fn phrase(&self) -> Result<&'static str> {
        Ok(match self {
            ToppingKind::ChocolateSyrup => "chocolate syrup",
            ToppingKind::ChocolateSprinkles => "chocolate sprinkles",
        })
    }
}

impl FromStr for ToppingKind {
    type Err = ShopError;

    fn from_str(s: &str) -> Result<Self> {
        ToppingKind::ALL
            .into_iter()
            .find(|kind| kind.key() == s)
            .ok_or_else(|| ShopError::UnknownTopping { name: s.to_string() })
    }
}

impl fmt::Display for ToppingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Decorator: owns the scoop underneath and appends its topping phrase.
pub struct Topped<T> {
    wrapped: Box<dyn Scoop>,
    topping: T,
}

impl<T: Topping> Topped<T> {
    pub fn new(wrapped: impl Scoop + 'static, topping: T) -> Self {
        Self {
            wrapped: Box::new(wrapped),
            topping,
        }
    }
}

impl<T: Topping> Scoop for Topped<T> {
    fn describe(&self) -> Result<String> {
        let base = self.wrapped.describe()?;
        let phrase = self.topping.phrase()?;
        Ok(format!("{} with {}", base, phrase))
    }
}

/// Wraps `scoop` once per topping, in order.
pub fn decorate(scoop: impl Scoop + 'static, toppings: &[ToppingKind]) -> Box<dyn Scoop> {
    toppings
        .iter()
        .fold(Box::new(scoop) as Box<dyn Scoop>, |inner, &topping| {
            Box::new(Topped {
                wrapped: inner,
                topping,
            }) as Box<dyn Scoop>
        })
}
