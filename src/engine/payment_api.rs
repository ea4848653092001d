use super::Engine;

use async_trait::async_trait;

use crate::{
    api::PaymentAPI,
    entities::{FinalCharge, Money, PaymentMethod, RideReceipt, SavingsStats},
    error::Error,
    pricing,
};

#[async_trait]
impl PaymentAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn apply_payment(
        &self,
        base_amount: Money,
        method: PaymentMethod,
    ) -> Result<FinalCharge, Error> {
        let charge = pricing::apply_payment(&self.config, base_amount, &method);

        tracing::info!(
            "charging {} with {} (+{} tokens)",
            charge.final_amount,
            method.display_name,
            charge.reward_tokens_earned
        );

        Ok(charge)
    }

    #[tracing::instrument(skip_all, fields(rides = receipts.len()))]
    async fn summarize_savings(&self, receipts: Vec<RideReceipt>) -> Result<SavingsStats, Error> {
        Ok(SavingsStats::from_receipts(&receipts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PricingConfig, Settings};
    use crate::entities::PaymentMethodId;
    use tokio_test::assert_ok;

    #[tokio::test]
    async fn crypto_wallet_payment() {
        let engine = Engine::new(PricingConfig::default(), &Settings::default());

        let charge = assert_ok!(
            engine
                .apply_payment(Money::from_units(100), PaymentMethodId::CryptoWallet.into())
                .await
        );

        assert_eq!(charge.final_amount, Money::from_units(95));
        assert_eq!(charge.reward_tokens_earned, 24);
    }

    #[tokio::test]
    async fn savings_summary() {
        let engine = Engine::new(PricingConfig::default(), &Settings::default());
        let receipts = vec![RideReceipt {
            competitor_total: Money::from_units(20),
            amount_paid: Money::from_units(15),
            tokens_earned: 4,
        }];

        let stats = assert_ok!(engine.summarize_savings(receipts).await);

        assert_eq!(stats.rides, 1);
        assert_eq!(stats.avg_savings_percent, 25);
    }

    #[tokio::test]
    async fn oversized_amount_is_charged_at_the_bound() {
        let engine = Engine::new(PricingConfig::default(), &Settings::default());

        let charge = assert_ok!(
            engine
                .apply_payment(Money::from_decimal(1e17), PaymentMethodId::CryptoWallet.into())
                .await
        );

        assert_eq!(charge.base_amount, Money::MAX);
        assert!(charge.final_amount.is_positive());
        assert!(charge.final_amount < charge.base_amount);
    }
}
