use serde::{Deserialize, Serialize};

use crate::entities::money::div_round;
use crate::entities::{Comparison, FinalCharge, Money};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RideReceipt {
    pub competitor_total: Money,
    pub amount_paid: Money,
    pub tokens_earned: i64,
}

impl RideReceipt {
    pub fn new(comparison: &Comparison, charge: &FinalCharge) -> Self {
        Self {
            competitor_total: comparison.savings.reference_total(),
            amount_paid: charge.final_amount,
            tokens_earned: charge.reward_tokens_earned,
        }
    }

    pub fn saved(&self) -> Money {
        self.competitor_total - self.amount_paid
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SavingsStats {
    pub rides: u32,
    pub total_saved: Money,
    pub avg_savings_percent: i64,
    pub tokens_earned: i64,
}

impl SavingsStats {
    pub fn from_receipts(receipts: &[RideReceipt]) -> Self {
        let competitor_total: Money = receipts.iter().map(|r| r.competitor_total).sum();
        let total_saved: Money = receipts.iter().map(RideReceipt::saved).sum();

        let avg_savings_percent = if competitor_total.is_positive() {
            div_round(total_saved.cents() * 100, competitor_total.cents())
        } else {
            0
        };

        Self {
            rides: receipts.len() as u32,
            total_saved,
            avg_savings_percent,
            tokens_earned: receipts.iter().map(|r| r.tokens_earned).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn receipt(competitor: i64, paid: i64, tokens: i64) -> RideReceipt {
        RideReceipt {
            competitor_total: Money::from_units(competitor),
            amount_paid: Money::from_units(paid),
            tokens_earned: tokens,
        }
    }

    #[test]
    fn stats_accumulate_rides() {
        let stats = SavingsStats::from_receipts(&[receipt(20, 15, 4), receipt(30, 24, 6)]);

        assert_eq!(stats.rides, 2);
        assert_eq!(stats.total_saved, Money::from_units(11));
        // 11 / 50
        assert_eq!(stats.avg_savings_percent, 22);
        assert_eq!(stats.tokens_earned, 10);
    }

    #[test]
    fn no_rides_no_stats() {
        assert_eq!(SavingsStats::from_receipts(&[]), SavingsStats::default());
    }
}
