// Eating-place strategies.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ShopError};

pub trait EatingPlace {
    fn select_place(&self) -> Result<&'static str> {
        Err(ShopError::not_implemented("EatingPlace::select_place"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Place {
    InShop,
    InPark,
    AtBeach,
}

impl Place {
    pub const ALL: [Place; 3] = [Place::InShop, Place::InPark, Place::AtBeach];

    pub fn key(self) -> &'static str {
        match self {
            Place::InShop => "shop",
            Place::InPark => "park",
            Place::AtBeach => "beach",
        }
    }
}

impl EatingPlace for Place {
    fn select_place(&self) -> Result<&'static str> {
        Ok(match self {
            Place::InShop => "in the shop",
            Place::InPark => "in the park",
            Place::AtBeach => "at the beach",
        })
    }
}

impl FromStr for Place {
    type Err = ShopError;

    fn from_str(s: &str) -> Result<Self> {
        Place::ALL
            .into_iter()
            .find(|place| place.key() == s)
            .ok_or_else(|| ShopError::UnknownPlace { name: s.to_string() })
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
