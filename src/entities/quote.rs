use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entities::{BasisPoints, Money, VehicleClass};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FareQuote {
    pub vehicle_class: VehicleClass,
    pub display_name: String,
    pub base_price: Money,
    pub original_price: Money,
    pub reward_accrual_rate: BasisPoints,
    pub reward_tokens: i64,
    pub eta_minutes: u32,
    pub seats: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FareTable {
    pub distance_km: f64,
    pub selected: VehicleClass,
    pub quotes: BTreeMap<VehicleClass, FareQuote>,
}

impl FareTable {
    pub fn get(&self, vehicle_class: VehicleClass) -> Option<&FareQuote> {
        self.quotes.get(&vehicle_class)
    }

    pub fn selected_quote(&self) -> Option<&FareQuote> {
        self.get(self.selected)
    }
}
