use std::collections::BTreeMap;

use crate::config::PricingConfig;
use crate::entities::{FareQuote, FareTable, Money, TripRequest};

#[tracing::instrument(skip(config))]
pub fn compute_fares(config: &PricingConfig, trip: &TripRequest) -> FareTable {
    let distance_km = effective_distance(config, trip.distance_km);
    let reference = reference_fare(config, distance_km);
    let factor = price_factor(config, distance_km);

    let quotes = config
        .vehicles
        .iter()
        .map(|(vehicle_class, rate)| {
            let units = (reference as f64 * rate.class_factor.as_fraction() * factor).round();
            let base_price = Money::from_units((units as i64).max(1));

            let quote = FareQuote {
                vehicle_class: *vehicle_class,
                display_name: rate.display_name.clone(),
                base_price,
                original_price: base_price.scale_to_unit(rate.markup),
                reward_accrual_rate: rate.reward_accrual_rate,
                reward_tokens: base_price.tokens_at(rate.reward_accrual_rate),
                eta_minutes: rate.eta_minutes,
                seats: rate.seats,
            };

            (*vehicle_class, quote)
        })
        .collect::<BTreeMap<_, _>>();

    FareTable {
        distance_km,
        selected: trip.vehicle_class,
        quotes,
    }
}

fn effective_distance(config: &PricingConfig, distance_km: f64) -> f64 {
    if !(distance_km.is_finite() && distance_km > 0.0) {
        tracing::warn!(
            "unusable trip distance {}, falling back to {} km",
            distance_km,
            config.default_distance_km
        );
        return config.default_distance_km;
    }

    if distance_km > config.max_distance_km {
        tracing::warn!(
            "trip distance {} km capped at {} km",
            distance_km,
            config.max_distance_km
        );
        return config.max_distance_km;
    }

    distance_km
}

fn reference_fare(config: &PricingConfig, distance_km: f64) -> i64 {
    let fare = distance_km * config.per_km_rate.to_decimal() + config.flag_fall.to_decimal();
    let minimum = config.minimum_reference_fare.cents() / 100;

    (fare.round() as i64).max(minimum)
}

fn price_factor(config: &PricingConfig, distance_km: f64) -> f64 {
    (distance_km / config.price_factor_distance_km)
        .clamp(config.min_price_factor, config.max_price_factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::VehicleClass;

    fn fares(distance_km: f64, vehicle_class: VehicleClass) -> FareTable {
        compute_fares(
            &PricingConfig::default(),
            &TripRequest::new(distance_km, vehicle_class),
        )
    }

    fn base(table: &FareTable, vehicle_class: VehicleClass) -> Money {
        table.get(vehicle_class).map(|q| q.base_price).unwrap()
    }

    #[test]
    fn prices_at_default_distance() {
        let table = fares(12.5, VehicleClass::Comfort);

        // reference 15, price factor 12.5 / 15
        assert_eq!(base(&table, VehicleClass::Economy), Money::from_units(10));
        assert_eq!(base(&table, VehicleClass::Comfort), Money::from_units(15));
        assert_eq!(base(&table, VehicleClass::Luxury), Money::from_units(31));
        assert_eq!(base(&table, VehicleClass::Xl), Money::from_units(19));
        assert_eq!(table.selected_quote().unwrap().display_name, "NexComfort");
    }

    #[test]
    fn original_prices_use_class_markups() {
        let table = fares(12.5, VehicleClass::Economy);
        let original = |c| table.get(c).map(|q| q.original_price).unwrap();

        assert_eq!(original(VehicleClass::Economy), Money::from_units(13));
        assert_eq!(original(VehicleClass::Comfort), Money::from_units(18));
        assert_eq!(original(VehicleClass::Luxury), Money::from_units(40));
        assert_eq!(original(VehicleClass::Xl), Money::from_units(24));
    }

    #[test]
    fn quotes_carry_class_details() {
        let table = fares(12.5, VehicleClass::Economy);

        let luxury = table.get(VehicleClass::Luxury).unwrap();
        assert_eq!(luxury.reward_accrual_rate.value(), 2_300);
        assert_eq!(luxury.reward_tokens, 7);
        assert_eq!(luxury.eta_minutes, 8);

        let xl = table.get(VehicleClass::Xl).unwrap();
        assert_eq!(xl.seats, 6);
        assert_eq!(xl.reward_tokens, 5);
    }

    #[test]
    fn long_trips_cap_the_price_factor() {
        let table = fares(30.0, VehicleClass::Economy);

        // reference 29, factor capped at 1.5
        assert_eq!(base(&table, VehicleClass::Economy), Money::from_units(35));
    }

    #[test]
    fn short_trips_hit_the_minimum_reference() {
        let table = fares(2.0, VehicleClass::Economy);

        // reference max(8, 7), factor floored at 0.8
        assert_eq!(base(&table, VehicleClass::Economy), Money::from_units(5));
    }

    #[test]
    fn fares_never_decrease_with_distance() {
        for vehicle_class in VehicleClass::ALL {
            let mut previous = Money::ZERO;

            for step in 1..=120 {
                let distance_km = step as f64 * 0.5;
                let price = base(&fares(distance_km, vehicle_class), vehicle_class);

                assert!(
                    price >= previous,
                    "{:?} fare dropped at {} km",
                    vehicle_class,
                    distance_km
                );
                previous = price;
            }
        }

        let short = fares(5.0, VehicleClass::Economy);
        let long = fares(30.0, VehicleClass::Economy);
        assert!(base(&long, VehicleClass::Economy) >= base(&short, VehicleClass::Economy));
    }

    #[test]
    fn unusable_distance_falls_back_to_default() {
        let expected = fares(12.5, VehicleClass::Economy);

        assert_eq!(fares(0.0, VehicleClass::Economy), expected);
        assert_eq!(fares(-3.0, VehicleClass::Economy), expected);
        assert_eq!(fares(f64::NAN, VehicleClass::Economy), expected);
    }

    #[test]
    fn huge_distances_are_capped() {
        let capped = fares(1e13, VehicleClass::Economy);
        let limit = fares(PricingConfig::default().max_distance_km, VehicleClass::Economy);

        assert_eq!(capped, limit);
        assert_eq!(capped.distance_km, 1_000.0);
        // reference 805, factor 1.5, economy 0.8
        assert_eq!(base(&capped, VehicleClass::Economy), Money::from_units(966));

        for quote in capped.quotes.values() {
            assert!(quote.base_price.is_positive());
            assert!(quote.original_price >= quote.base_price);
        }

        // infinite distance is unusable, not long
        assert_eq!(fares(f64::INFINITY, VehicleClass::Economy).distance_km, 12.5);
    }

    #[test]
    fn original_price_never_below_base() {
        for step in 0..=80 {
            let table = fares(step as f64, VehicleClass::Economy);

            for quote in table.quotes.values() {
                assert!(quote.base_price.is_positive());
                assert!(quote.original_price >= quote.base_price);
            }
        }
    }
}
