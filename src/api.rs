use async_trait::async_trait;
use std::sync::Arc;

use crate::entities::{
    Comparison, FareQuote, FareTable, FinalCharge, Money, NegotiationOutcome, PaymentMethod,
    RideReceipt, SavingsStats, SubscriptionCharge, SubscriptionTier, SubscriptionTierId,
    TripRequest,
};
use crate::error::Error;

#[async_trait]
pub trait FareAPI {
    async fn compute_fares(&self, trip: TripRequest) -> Result<FareTable, Error>;
    async fn compare_to_competitors(
        &self,
        quote: FareQuote,
        current_price: Money,
        surge_multiplier: Option<f64>,
    ) -> Result<Comparison, Error>;
}

#[async_trait]
pub trait NegotiationAPI {
    async fn negotiate(&self, price: Money) -> Result<NegotiationOutcome, Error>;
}

#[async_trait]
pub trait PaymentAPI {
    async fn apply_payment(
        &self,
        base_amount: Money,
        method: PaymentMethod,
    ) -> Result<FinalCharge, Error>;
    async fn summarize_savings(&self, receipts: Vec<RideReceipt>) -> Result<SavingsStats, Error>;
}

#[async_trait]
pub trait SubscriptionAPI {
    async fn list_subscription_tiers(&self) -> Result<Vec<SubscriptionTier>, Error>;
    async fn subscribe(
        &self,
        tier: SubscriptionTierId,
        method: PaymentMethod,
    ) -> Result<SubscriptionCharge, Error>;
}

pub trait API: FareAPI + NegotiationAPI + PaymentAPI + SubscriptionAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
