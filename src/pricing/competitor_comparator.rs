use crate::config::PricingConfig;
use crate::entities::{BasisPoints, Comparison, CompetitorPrice, FareQuote, Money, SavingsSummary};

pub fn compare_to_competitors(
    config: &PricingConfig,
    quote: &FareQuote,
    current_price: Money,
) -> Comparison {
    compare_with_surge(config, quote, current_price, 1.0)
}

/// Multipliers below 1.0 or non-finite are treated as no surge.
#[tracing::instrument(skip(config, quote), fields(vehicle_class = ?quote.vehicle_class))]
pub fn compare_with_surge(
    config: &PricingConfig,
    quote: &FareQuote,
    current_price: Money,
    surge_multiplier: f64,
) -> Comparison {
    let surge_multiplier = if !(surge_multiplier.is_finite() && surge_multiplier >= 1.0) {
        tracing::warn!("ignoring surge multiplier {}", surge_multiplier);
        1.0
    } else if surge_multiplier > config.max_surge_multiplier {
        tracing::warn!(
            "surge multiplier {} capped at {}",
            surge_multiplier,
            config.max_surge_multiplier
        );
        config.max_surge_multiplier
    } else {
        surge_multiplier
    };

    let surge = BasisPoints::from_fraction(surge_multiplier);

    let competitors: Vec<CompetitorPrice> = config
        .competitors
        .iter()
        .map(|rate| {
            let base_fare = quote.original_price.scale_to_unit(rate.markup.compose(surge));

            CompetitorPrice::new(
                rate.name.clone(),
                base_fare,
                rate.booking_fee,
                rate.service_fee,
                surge_multiplier,
            )
        })
        .collect();

    let reference = competitors
        .first()
        .map(|c| c.name.clone())
        .unwrap_or_default();

    let savings = SavingsSummary::new(current_price, &competitors, &reference);

    Comparison {
        nexride_price: current_price,
        competitors,
        savings,
    }
}
