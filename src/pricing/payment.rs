use crate::config::PricingConfig;
use crate::entities::{BasisPoints, FinalCharge, Money, PaymentMethod, SubscriptionTier};

/// Methods missing from the discount table pay full price.
pub fn apply_payment(
    config: &PricingConfig,
    base_amount: Money,
    method: &PaymentMethod,
) -> FinalCharge {
    charge(config, base_amount, method, config.payment_reward_rate)
}

pub fn charge_subscription(
    config: &PricingConfig,
    tier: &SubscriptionTier,
    method: &PaymentMethod,
) -> FinalCharge {
    charge(config, tier.monthly_price, method, BasisPoints::new(0))
}

#[tracing::instrument(skip(config))]
fn charge(
    config: &PricingConfig,
    base_amount: Money,
    method: &PaymentMethod,
    reward_rate: BasisPoints,
) -> FinalCharge {
    let discount_percent = discount_percent(config, method);

    let final_amount = (base_amount - base_amount.percent(discount_percent)).max(Money::ZERO);

    FinalCharge {
        base_amount,
        payment_method: method.id.clone(),
        payment_discount_percent: discount_percent,
        discount_amount: base_amount - final_amount,
        final_amount,
        reward_tokens_earned: final_amount.tokens_at(reward_rate),
    }
}

fn discount_percent(config: &PricingConfig, method: &PaymentMethod) -> u32 {
    match config.payment_discounts.get(&method.id) {
        Some(percent) => (*percent).min(100),
        None => {
            tracing::warn!(
                "no discount configured for payment method {}, charging full price",
                method.id.name()
            );
            0
        }
    }
}
