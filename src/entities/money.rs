use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

const CENTS_PER_UNIT: i64 = 100;
const BASIS_POINTS_PER_UNIT: i64 = 10_000;

// Ten trillion currency units.
const MAX_CENTS: i64 = 1_000_000_000_000_000;

/// An amount of currency held as an integer count of minor units (cents),
/// bounded to `±Money::MAX`. Every rounding step rounds half away from zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);
    pub const MAX: Money = Money(MAX_CENTS);

    pub const fn from_cents(cents: i64) -> Self {
        Self(bound(cents as i128))
    }

    pub const fn from_units(units: i64) -> Self {
        Self(bound(units as i128 * CENTS_PER_UNIT as i128))
    }

    pub fn from_decimal(amount: f64) -> Self {
        if !amount.is_finite() {
            return Self::ZERO;
        }

        let cents = (amount * CENTS_PER_UNIT as f64).round();
        let limit = MAX_CENTS as f64;

        Self(cents.clamp(-limit, limit) as i64)
    }

    pub fn cents(self) -> i64 {
        self.0
    }

    pub fn to_decimal(self) -> f64 {
        self.0 as f64 / CENTS_PER_UNIT as f64
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub fn scale_to_unit(self, ratio: BasisPoints) -> Self {
        let units = div_round_wide(
            self.0 as i128 * ratio.value() as i128,
            (BASIS_POINTS_PER_UNIT * CENTS_PER_UNIT) as i128,
        );

        Self(bound(units * CENTS_PER_UNIT as i128))
    }

    pub fn percent(self, percent: u32) -> Self {
        Self(bound(div_round_wide(self.0 as i128 * percent as i128, 100)))
    }

    /// Whole tokens earned at `rate` per currency unit.
    pub fn tokens_at(self, rate: BasisPoints) -> i64 {
        let tokens = div_round_wide(
            self.0 as i128 * rate.value() as i128,
            (BASIS_POINTS_PER_UNIT * CENTS_PER_UNIT) as i128,
        );

        tokens.clamp(i64::MIN as i128, i64::MAX as i128) as i64
    }
}

const fn bound(cents: i128) -> i64 {
    if cents > MAX_CENTS as i128 {
        MAX_CENTS
    } else if cents < -(MAX_CENTS as i128) {
        -MAX_CENTS
    } else {
        cents as i64
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(bound(self.0 as i128 + rhs.0 as i128))
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(bound(self.0 as i128 - rhs.0 as i128))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();

        write!(
            f,
            "{}{}.{:02}",
            sign,
            abs / CENTS_PER_UNIT as u64,
            abs % CENTS_PER_UNIT as u64
        )
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_decimal())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Ok(Money::from_decimal(amount))
    }
}

/// A ratio in hundredths of a percent: `10_000` is 1.0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BasisPoints(u32);

impl BasisPoints {
    pub const ONE: BasisPoints = BasisPoints(10_000);

    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    pub fn as_fraction(self) -> f64 {
        self.0 as f64 / BASIS_POINTS_PER_UNIT as f64
    }

    pub fn from_fraction(fraction: f64) -> Self {
        if !fraction.is_finite() || fraction <= 0.0 {
            return Self(0);
        }

        let value = (fraction * BASIS_POINTS_PER_UNIT as f64).round();
        Self(value.min(u32::MAX as f64) as u32)
    }

    /// Product of two ratios to the nearest basis point, saturating at `u32::MAX`.
    pub fn compose(self, other: BasisPoints) -> Self {
        let product = div_round_wide(
            self.0 as i128 * other.0 as i128,
            BASIS_POINTS_PER_UNIT as i128,
        );
        Self(u32::try_from(product).unwrap_or(u32::MAX))
    }
}

pub(crate) fn div_round(numerator: i64, denominator: i64) -> i64 {
    div_round_wide(numerator as i128, denominator as i128) as i64
}

fn div_round_wide(numerator: i128, denominator: i128) -> i128 {
    let half = denominator / 2;

    if numerator >= 0 {
        (numerator + half) / denominator
    } else {
        (numerator - half) / denominator
    }
}
