use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::config::PricingConfig;
use crate::entities::{Money, NegotiationOutcome};
use crate::error::{invalid_discount_error, invalid_fare_error, invalid_state_error, Error};

pub fn negotiate<R: Rng + ?Sized>(
    config: &PricingConfig,
    price: Money,
    rng: &mut R,
) -> Result<NegotiationOutcome, Error> {
    if !price.is_positive() {
        return Err(invalid_fare_error());
    }

    let range = config.negotiation_discount;
    if !(range.min < range.max) {
        return Err(invalid_state_error());
    }

    let fraction = Uniform::new(range.min, range.max).sample(rng);

    settle(config, price, fraction)
}

/// The saving is floored to whole currency units, with a minimum of one unit
/// (one cent for fares of one unit or less).
#[tracing::instrument(skip(config))]
pub fn settle(
    config: &PricingConfig,
    price: Money,
    discount_fraction: f64,
) -> Result<NegotiationOutcome, Error> {
    if !price.is_positive() {
        return Err(invalid_fare_error());
    }

    if !config.negotiation_discount.contains(discount_fraction) {
        return Err(invalid_discount_error());
    }

    let saved = Money::from_units((price.to_decimal() * discount_fraction).floor() as i64);
    let minimum = if price > Money::from_units(1) {
        Money::from_units(1)
    } else {
        Money::from_cents(1)
    };
    let savings_amount = saved.max(minimum);

    Ok(NegotiationOutcome::new(price, discount_fraction, savings_amount))
}
