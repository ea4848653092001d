use super::Engine;

use async_trait::async_trait;

use crate::{
    api::FareAPI,
    entities::{Comparison, FareQuote, FareTable, Money, TripRequest},
    error::Error,
    pricing,
};

#[async_trait]
impl FareAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn compute_fares(&self, trip: TripRequest) -> Result<FareTable, Error> {
        let table = pricing::compute_fares(&self.config, &trip);

        tracing::info!(
            "priced {} vehicle classes for {} km",
            table.quotes.len(),
            table.distance_km
        );

        Ok(table)
    }

    #[tracing::instrument(skip(self, quote), fields(vehicle_class = ?quote.vehicle_class))]
    async fn compare_to_competitors(
        &self,
        quote: FareQuote,
        current_price: Money,
        surge_multiplier: Option<f64>,
    ) -> Result<Comparison, Error> {
        let comparison = match surge_multiplier {
            Some(surge) => pricing::compare_with_surge(&self.config, &quote, current_price, surge),
            None => pricing::compare_to_competitors(&self.config, &quote, current_price),
        };

        Ok(comparison)
    }
}
