use super::Engine;

use async_trait::async_trait;
use chrono::Utc;

use crate::{
    api::SubscriptionAPI,
    entities::{PaymentMethod, SubscriptionCharge, SubscriptionTier, SubscriptionTierId},
    error::{invalid_input_error, Error},
    pricing,
};

#[async_trait]
impl SubscriptionAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn list_subscription_tiers(&self) -> Result<Vec<SubscriptionTier>, Error> {
        Ok(self.config.subscription_tiers.clone())
    }

    #[tracing::instrument(skip(self))]
    async fn subscribe(
        &self,
        tier: SubscriptionTierId,
        method: PaymentMethod,
    ) -> Result<SubscriptionCharge, Error> {
        let tier = self
            .config
            .subscription_tier(tier)
            .ok_or_else(|| invalid_input_error())?;

        let charge = pricing::charge_subscription(&self.config, tier, &method);
        let subscription = tier.activate(Utc::now(), self.config.subscription_period_days);

        tracing::info!(
            "{} subscription active until {}",
            tier.name,
            subscription.expires_at
        );

        Ok(SubscriptionCharge {
            subscription,
            charge,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PricingConfig, Settings};
    use crate::entities::{Money, PaymentMethodId};
    use chrono::Duration;
    use tokio_test::{assert_err, assert_ok};

    #[tokio::test]
    async fn subscribe_charges_the_tier_price() {
        let engine = Engine::new(PricingConfig::default(), &Settings::default());

        let result = assert_ok!(
            engine
                .subscribe(SubscriptionTierId::Comfort, PaymentMethodId::CashWallet.into())
                .await
        );

        assert_eq!(result.charge.final_amount, Money::from_units(5));
        assert_eq!(result.charge.reward_tokens_earned, 0);
        assert_eq!(result.subscription.tier, SubscriptionTierId::Comfort);
        assert_eq!(
            result.subscription.expires_at - result.subscription.activated_at,
            Duration::days(30)
        );
    }

    #[tokio::test]
    async fn tier_missing_from_config_is_rejected() {
        let mut config = PricingConfig::default();
        config
            .subscription_tiers
            .retain(|t| t.id != SubscriptionTierId::Ultra);
        let engine = Engine::new(config, &Settings::default());

        let err = assert_err!(
            engine
                .subscribe(SubscriptionTierId::Ultra, PaymentMethodId::CashWallet.into())
                .await
        );
        assert_eq!(err.code, 101);

        let tiers = assert_ok!(engine.list_subscription_tiers().await);
        assert_eq!(tiers.len(), 1);
    }
}
