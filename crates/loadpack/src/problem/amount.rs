use std::{
    fmt::Display,
    ops::{Add, AddAssign, Sub},
};

use serde::{Deserialize, Serialize};

/// Weight (kg) and volume (m³) measured together.
///
/// Used for a unit's demand, a bin's accumulated load and a vehicle's capacity.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Amount {
    pub weight: f64,
    pub volume: f64,
}

impl Amount {
    pub const ZERO: Amount = Amount {
        weight: 0.0,
        volume: 0.0,
    };

    pub const fn new(weight: f64, volume: f64) -> Self {
        Amount { weight, volume }
    }

    pub fn fits_within(&self, capacity: &Amount) -> bool {
        self.weight <= capacity.weight && self.volume <= capacity.volume
    }

    /// Which dimensions of `self` go over `capacity`, if any.
    pub fn exceeded_dimension(&self, capacity: &Amount) -> Option<ExceededDimension> {
        match (
            self.weight > capacity.weight,
            self.volume > capacity.volume,
        ) {
            (true, true) => Some(ExceededDimension::Both),
            (true, false) => Some(ExceededDimension::Weight),
            (false, true) => Some(ExceededDimension::Volume),
            (false, false) => None,
        }
    }

    /// Share of `capacity` taken by the tighter of the two dimensions.
    pub fn load_factor(&self, capacity: &Amount) -> f64 {
        (self.weight / capacity.weight).max(self.volume / capacity.volume)
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} kg / {} m³", self.weight, self.volume)
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Self::Output {
        Amount {
            weight: self.weight + rhs.weight,
            volume: self.volume + rhs.volume,
        }
    }
}

impl<'a> Add<&'a Amount> for &Amount {
    type Output = Amount;

    fn add(self, rhs: &'a Amount) -> Self::Output {
        *self + *rhs
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Amount) {
        self.weight += rhs.weight;
        self.volume += rhs.volume;
    }
}

impl Sub for Amount {
    type Output = Amount;

    fn sub(self, rhs: Amount) -> Self::Output {
        Amount {
            weight: self.weight - rhs.weight,
            volume: self.volume - rhs.volume,
        }
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, |total, amount| total + amount)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExceededDimension {
    Weight,
    Volume,
    Both,
}

impl Display for ExceededDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ExceededDimension::Weight => "weight",
                ExceededDimension::Volume => "volume",
                ExceededDimension::Both => "weight and volume",
            }
        )
    }
}
