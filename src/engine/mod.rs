mod fare_api;
mod negotiation_api;
mod payment_api;
mod subscription_api;

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::Mutex;

use crate::{
    api::API,
    config::{PricingConfig, Settings},
    error::Error,
};

pub struct Engine {
    config: PricingConfig,
    negotiation_delay: Duration,
    rng: Mutex<StdRng>,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub fn new(config: PricingConfig, settings: &Settings) -> Self {
        let rng = match settings.rng_seed {
            Some(seed) => {
                tracing::info!("seeding negotiation rng with {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };

        Self {
            config,
            negotiation_delay: settings.negotiation_delay,
            rng: Mutex::new(rng),
        }
    }

    #[tracing::instrument(name = "Engine::from_settings", skip_all)]
    pub fn from_settings(settings: &Settings) -> Result<Self, Error> {
        let config = settings.load_pricing_config()?;

        Ok(Self::new(config, settings))
    }
}

impl API for Engine {}
