use std::convert::TryFrom;

use rand::Rng;
use rust_decimal::prelude::*;
use serde::{Serialize, Serializer};

use crate::error::FareGenError;

pub const NUM_DECIMAL_PLACES: u32 = 2;
pub const MIN_FARE: f64 = 50.0;
pub const MAX_FARE: f64 = 1000.0;

/// A ticket price between [`MIN_FARE`] and [`MAX_FARE`] (inclusive), always
/// carrying exactly [`NUM_DECIMAL_PLACES`] fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Fare(Decimal);

impl Fare {
    fn lower_bound() -> Decimal {
        Decimal::new(5_000, NUM_DECIMAL_PLACES)
    }

    fn upper_bound() -> Decimal {
        Decimal::new(100_000, NUM_DECIMAL_PLACES)
    }

    /// Ties round to the even neighbour. The draws are continuous so ties are
    /// practically never hit.
    fn round_to_cents(decimal: Decimal) -> Decimal {
        let mut rounded =
            decimal.round_dp_with_strategy(NUM_DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven);
        rounded.rescale(NUM_DECIMAL_PLACES);
        rounded
    }

    /// Turns a uniform draw from `[MIN_FARE, MAX_FARE]` into a fare.
    fn from_draw(value: f64) -> Self {
        let decimal = Decimal::from_f64(value).unwrap_or_else(Fare::lower_bound);
        Fare(Fare::round_to_cents(decimal).clamp(Fare::lower_bound(), Fare::upper_bound()))
    }

    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Fare {
    type Error = FareGenError;
    fn try_from(decimal: Decimal) -> Result<Self, Self::Error> {
        let rounded = Fare::round_to_cents(decimal);
        if rounded >= Fare::lower_bound() && rounded <= Fare::upper_bound() {
            Ok(Fare(rounded))
        } else {
            Err(FareGenError::FareOutOfRange)
        }
    }
}

impl TryFrom<f64> for Fare {
    type Error = FareGenError;
    fn try_from(decimal: f64) -> Result<Self, Self::Error> {
        Fare::try_from(Decimal::from_f64(decimal).ok_or(FareGenError::FareOutOfRange)?)
    }
}

impl Serialize for Fare {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.0)
    }
}

/// Draws `count` fares uniformly from `[MIN_FARE, MAX_FARE]`.
pub fn sample_fares<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Fare> {
    (0..count)
        .map(|_| Fare::from_draw(rng.gen_range(MIN_FARE..=MAX_FARE)))
        .collect()
}
