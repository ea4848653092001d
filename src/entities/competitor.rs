use std::collections::BTreeMap;

use serde::Serialize;

use crate::entities::money::div_round;
use crate::entities::Money;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CompetitorPrice {
    pub name: String,
    pub base_fare: Money,
    pub booking_fee: Money,
    pub service_fee: Money,
    pub total_price: Money,
    pub surge_multiplier: f64,
    pub surge_active: bool,
}

impl CompetitorPrice {
    pub fn new(
        name: String,
        base_fare: Money,
        booking_fee: Money,
        service_fee: Money,
        surge_multiplier: f64,
    ) -> Self {
        Self {
            name,
            base_fare,
            booking_fee,
            service_fee,
            total_price: base_fare + booking_fee + service_fee,
            surge_multiplier,
            surge_active: surge_multiplier > 1.0,
        }
    }

    pub fn is_surge_active(&self) -> bool {
        self.surge_active
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SavingsSummary {
    amount_vs_each_competitor: BTreeMap<String, Money>,
    reference_competitor: String,
    reference_total: Money,
    percentage_cheaper: i64,
}

impl SavingsSummary {
    pub fn new(nexride_price: Money, competitors: &[CompetitorPrice], reference: &str) -> Self {
        let amount_vs_each_competitor = competitors
            .iter()
            .map(|c| (c.name.clone(), c.total_price - nexride_price))
            .collect();

        let anchor = competitors
            .iter()
            .find(|c| c.name == reference)
            .or_else(|| competitors.first());

        let (reference_competitor, reference_total) = match anchor {
            Some(c) => (c.name.clone(), c.total_price),
            None => (String::new(), Money::ZERO),
        };

        let percentage_cheaper = if reference_total.is_positive() {
            div_round(
                (reference_total - nexride_price).cents() * 100,
                reference_total.cents(),
            )
        } else {
            0
        };

        Self {
            amount_vs_each_competitor,
            reference_competitor,
            reference_total,
            percentage_cheaper,
        }
    }

    pub fn amount_vs(&self, competitor: &str) -> Option<Money> {
        self.amount_vs_each_competitor.get(competitor).copied()
    }

    pub fn amount_vs_each_competitor(&self) -> &BTreeMap<String, Money> {
        &self.amount_vs_each_competitor
    }

    pub fn reference_competitor(&self) -> &str {
        &self.reference_competitor
    }

    pub fn reference_total(&self) -> Money {
        self.reference_total
    }

    pub fn percentage_cheaper(&self) -> i64 {
        self.percentage_cheaper
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Comparison {
    pub nexride_price: Money,
    pub competitors: Vec<CompetitorPrice>,
    pub savings: SavingsSummary,
}

impl Comparison {
    pub fn is_surge_active(&self) -> bool {
        self.competitors.iter().any(CompetitorPrice::is_surge_active)
    }
}
