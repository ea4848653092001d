use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{FinalCharge, Money};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionTierId {
    Comfort,
    Ultra,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionTier {
    pub id: SubscriptionTierId,
    pub name: String,
    pub monthly_price: Money,
    pub token_price: Money,
    pub popular: bool,
    pub benefits: Vec<String>,
}

impl SubscriptionTier {
    #[tracing::instrument(skip(self), fields(tier = ?self.id))]
    pub fn activate(&self, now: DateTime<Utc>, period_days: i64) -> Subscription {
        Subscription {
            tier: self.id,
            activated_at: now,
            expires_at: now + Duration::days(period_days),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub tier: SubscriptionTierId,
    pub activated_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionCharge {
    pub subscription: Subscription,
    pub charge: FinalCharge,
}
