use serde::{Deserialize, Serialize};

use crate::entities::Money;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NegotiationOutcome {
    pub input_price: Money,
    pub discount_fraction: f64,
    pub discounted_price: Money,
    pub savings_amount: Money,
}

impl NegotiationOutcome {
    pub fn new(input_price: Money, discount_fraction: f64, savings_amount: Money) -> Self {
        Self {
            input_price,
            discount_fraction,
            discounted_price: input_price - savings_amount,
            savings_amount,
        }
    }

    pub fn discount_percent(&self) -> i64 {
        (self.discount_fraction * 100.0).round() as i64
    }
}
