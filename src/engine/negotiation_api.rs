use super::Engine;

use async_trait::async_trait;

use crate::{
    api::NegotiationAPI,
    entities::{Money, NegotiationOutcome},
    error::Error,
    pricing,
};

#[async_trait]
impl NegotiationAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn negotiate(&self, price: Money) -> Result<NegotiationOutcome, Error> {
        let outcome = {
            let mut rng = self.rng.lock().await;
            pricing::negotiate(&self.config, price, &mut *rng)?
        };

        if !self.negotiation_delay.is_zero() {
            tokio::time::sleep(self.negotiation_delay).await;
        }

        tracing::info!(
            "negotiated {}% off: {} -> {}",
            outcome.discount_percent(),
            outcome.input_price,
            outcome.discounted_price
        );

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PricingConfig, Settings};
    use std::time::{Duration, Instant};
    use tokio_test::{assert_err, assert_ok};

    fn engine(delay: Duration, seed: u64) -> Engine {
        let settings = Settings {
            negotiation_delay: delay,
            rng_seed: Some(seed),
            ..Settings::default()
        };

        Engine::new(PricingConfig::default(), &settings)
    }

    #[tokio::test]
    async fn invalid_fare_fails_without_waiting() {
        let engine = engine(Duration::from_secs(60), 1);

        let err = assert_err!(engine.negotiate(Money::ZERO).await);
        assert_eq!(err.code, 102);

        let err = assert_err!(engine.negotiate(Money::from_units(-5)).await);
        assert_eq!(err.code, 102);
    }

    #[tokio::test]
    async fn negotiation_waits_for_the_delay() {
        let engine = engine(Duration::from_millis(20), 1);

        let started = Instant::now();
        let outcome = assert_ok!(engine.negotiate(Money::from_units(15)).await);

        assert!(started.elapsed() >= Duration::from_millis(20));
        assert!(outcome.discounted_price < Money::from_units(15));
    }

    #[tokio::test]
    async fn seeded_engines_agree() {
        let first = engine(Duration::ZERO, 99);
        let second = engine(Duration::ZERO, 99);

        for _ in 0..5 {
            let a = assert_ok!(first.negotiate(Money::from_units(19)).await);
            let b = assert_ok!(second.negotiate(Money::from_units(19)).await);
            assert_eq!(a, b);
        }
    }

    #[tokio::test]
    async fn attempts_are_independent() {
        let engine = engine(Duration::ZERO, 5);

        let outcomes: Vec<NegotiationOutcome> = negotiate_concurrently(&engine).await;
        for outcome in outcomes {
            assert_eq!(outcome.input_price, Money::from_units(31));
            assert!(outcome.discount_fraction >= 0.10 && outcome.discount_fraction < 0.15);
        }
    }

    async fn negotiate_concurrently(engine: &Engine) -> Vec<NegotiationOutcome> {
        let (a, b, c) = tokio::join!(
            engine.negotiate(Money::from_units(31)),
            engine.negotiate(Money::from_units(31)),
            engine.negotiate(Money::from_units(31)),
        );

        vec![assert_ok!(a), assert_ok!(b), assert_ok!(c)]
    }
}
