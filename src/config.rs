use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::entities::{
    BasisPoints, Money, PaymentMethodId, SubscriptionTier, SubscriptionTierId, VehicleClass,
};
use crate::error::{config_file_error, config_parse_error, invalid_setting_error, Error};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VehicleRate {
    pub display_name: String,
    pub class_factor: BasisPoints,
    pub markup: BasisPoints,
    pub reward_accrual_rate: BasisPoints,
    pub eta_minutes: u32,
    pub seats: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompetitorRate {
    pub name: String,
    pub markup: BasisPoints,
    pub booking_fee: Money,
    pub service_fee: Money,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiscountRange {
    // inclusive
    pub min: f64,
    // exclusive
    pub max: f64,
}

impl DiscountRange {
    pub fn contains(&self, fraction: f64) -> bool {
        fraction >= self.min && fraction < self.max
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub default_distance_km: f64,
    /// Longer trips are priced at this distance.
    pub max_distance_km: f64,
    pub flag_fall: Money,
    pub per_km_rate: Money,
    pub minimum_reference_fare: Money,
    pub price_factor_distance_km: f64,
    pub min_price_factor: f64,
    pub max_price_factor: f64,
    pub vehicles: BTreeMap<VehicleClass, VehicleRate>,
    // the first entry anchors the headline savings percentage
    pub competitors: Vec<CompetitorRate>,
    pub max_surge_multiplier: f64,
    pub negotiation_discount: DiscountRange,
    pub payment_discounts: BTreeMap<PaymentMethodId, u32>,
    pub payment_reward_rate: BasisPoints,
    pub subscription_tiers: Vec<SubscriptionTier>,
    pub subscription_period_days: i64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        let vehicle = |name: &str, factor, markup, reward, eta, seats| VehicleRate {
            display_name: name.into(),
            class_factor: BasisPoints::new(factor),
            markup: BasisPoints::new(markup),
            reward_accrual_rate: BasisPoints::new(reward),
            eta_minutes: eta,
            seats,
        };

        let vehicles = BTreeMap::from([
            (
                VehicleClass::Economy,
                vehicle("NexEconomy", 8_000, 12_500, 2_500, 4, 4),
            ),
            (
                VehicleClass::Comfort,
                vehicle("NexComfort", 12_000, 12_200, 2_500, 6, 4),
            ),
            (
                VehicleClass::Luxury,
                vehicle("NexLuxury", 25_000, 12_900, 2_300, 8, 4),
            ),
            (
                VehicleClass::Xl,
                vehicle("NexXL", 15_000, 12_700, 2_500, 5, 6),
            ),
        ]);

        let competitors = vec![
            CompetitorRate {
                name: "uber".into(),
                markup: BasisPoints::new(11_000),
                booking_fee: Money::ZERO,
                service_fee: Money::ZERO,
            },
            CompetitorRate {
                name: "careem".into(),
                markup: BasisPoints::new(11_500),
                booking_fee: Money::ZERO,
                service_fee: Money::ZERO,
            },
        ];

        let payment_discounts = BTreeMap::from([
            (PaymentMethodId::CryptoWallet, 5),
            (PaymentMethodId::CashWallet, 0),
            (PaymentMethodId::CreditCard, 0),
            (PaymentMethodId::DebitCard, 0),
            (PaymentMethodId::ApplePay, 0),
            (PaymentMethodId::GooglePay, 0),
        ]);

        let subscription_tiers = vec![
            SubscriptionTier {
                id: SubscriptionTierId::Comfort,
                name: "Comfort".into(),
                monthly_price: Money::from_units(5),
                token_price: Money::from_units(10),
                popular: false,
                benefits: vec![
                    "10% discount on all rides".into(),
                    "Minimum Comfort vehicles".into(),
                    "VR in-ride experiences".into(),
                    "Priority drivers".into(),
                ],
            },
            SubscriptionTier {
                id: SubscriptionTierId::Ultra,
                name: "Ultra".into(),
                monthly_price: Money::from_units(15),
                token_price: Money::from_units(30),
                popular: true,
                benefits: vec![
                    "20% discount on all rides".into(),
                    "All Comfort benefits included".into(),
                    "Exclusive premium vehicles".into(),
                    "AI negotiation boost".into(),
                    "No cancellation fees".into(),
                    "Priority luxury drivers".into(),
                ],
            },
        ];

        Self {
            default_distance_km: 12.5,
            max_distance_km: 1_000.0,
            flag_fall: Money::from_units(5),
            per_km_rate: Money::from_cents(80),
            minimum_reference_fare: Money::from_units(8),
            price_factor_distance_km: 15.0,
            min_price_factor: 0.8,
            max_price_factor: 1.5,
            vehicles,
            competitors,
            max_surge_multiplier: 5.0,
            negotiation_discount: DiscountRange {
                min: 0.10,
                max: 0.15,
            },
            payment_discounts,
            payment_reward_rate: BasisPoints::new(2_500),
            subscription_tiers,
            subscription_period_days: 30,
        }
    }
}

impl PricingConfig {
    #[tracing::instrument]
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let raw = fs::read_to_string(path).map_err(config_file_error)?;
        let config: PricingConfig = serde_json::from_str(&raw)?;

        config.validate()?;

        tracing::info!("loaded pricing config from {}", path.display());

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if !(self.default_distance_km.is_finite() && self.default_distance_km > 0.0) {
            return Err(config_parse_error("default_distance_km must be positive"));
        }

        if !(self.max_distance_km.is_finite() && self.max_distance_km >= self.default_distance_km) {
            return Err(config_parse_error("max_distance_km must cover the default distance"));
        }

        if !(self.price_factor_distance_km.is_finite() && self.price_factor_distance_km > 0.0) {
            return Err(config_parse_error("price_factor_distance_km must be positive"));
        }

        if !(self.min_price_factor > 0.0 && self.min_price_factor <= self.max_price_factor) {
            return Err(config_parse_error("price factor bounds are inverted"));
        }

        if VehicleClass::ALL
            .iter()
            .any(|class| self.vehicle(*class).is_none())
        {
            return Err(config_parse_error("every vehicle class needs a rate"));
        }

        if self.vehicles.values().any(|v| v.markup < BasisPoints::ONE) {
            return Err(config_parse_error("vehicle markup below 1.0"));
        }

        if self.competitors.is_empty() {
            return Err(config_parse_error("at least one competitor is required"));
        }

        if !(self.max_surge_multiplier.is_finite() && self.max_surge_multiplier >= 1.0) {
            return Err(config_parse_error("max_surge_multiplier must be at least 1.0"));
        }

        let range = self.negotiation_discount;
        if !(range.min > 0.0 && range.min < range.max && range.max < 1.0) {
            return Err(config_parse_error("negotiation discount range must lie in (0, 1)"));
        }

        if self.payment_discounts.values().any(|percent| *percent > 100) {
            return Err(config_parse_error("payment discount above 100%"));
        }

        if self.subscription_period_days <= 0 {
            return Err(config_parse_error("subscription period must be positive"));
        }

        Ok(())
    }

    pub fn vehicle(&self, vehicle_class: VehicleClass) -> Option<&VehicleRate> {
        self.vehicles.get(&vehicle_class)
    }

    pub fn subscription_tier(&self, id: SubscriptionTierId) -> Option<&SubscriptionTier> {
        self.subscription_tiers.iter().find(|t| t.id == id)
    }
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub addr: SocketAddr,
    pub negotiation_delay: Duration,
    pub rng_seed: Option<u64>,
    pub pricing_config: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            negotiation_delay: Duration::from_secs(2),
            rng_seed: None,
            pricing_config: None,
        }
    }
}

impl Settings {
    #[tracing::instrument(name = "Settings::from_env")]
    pub fn from_env() -> Result<Self, Error> {
        dotenv::dotenv().ok();

        let mut settings = Self::default();

        if let Some(addr) = read_var("NEXRIDE_ADDR")? {
            settings.addr = addr
                .parse()
                .map_err(|_| invalid_setting_error("NEXRIDE_ADDR"))?;
        }

        if let Some(millis) = read_var("NEXRIDE_NEGOTIATION_DELAY_MS")? {
            let millis: u64 = millis
                .parse()
                .map_err(|_| invalid_setting_error("NEXRIDE_NEGOTIATION_DELAY_MS"))?;
            settings.negotiation_delay = Duration::from_millis(millis);
        }

        if let Some(seed) = read_var("NEXRIDE_RNG_SEED")? {
            let seed: u64 = seed
                .parse()
                .map_err(|_| invalid_setting_error("NEXRIDE_RNG_SEED"))?;
            settings.rng_seed = Some(seed);
        }

        settings.pricing_config = read_var("NEXRIDE_PRICING_CONFIG")?.map(PathBuf::from);

        Ok(settings)
    }

    pub fn load_pricing_config(&self) -> Result<PricingConfig, Error> {
        match &self.pricing_config {
            Some(path) => PricingConfig::from_file(path),
            None => Ok(PricingConfig::default()),
        }
    }
}

fn read_var(name: &str) -> Result<Option<String>, Error> {
    match env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(err.into()),
    }
}
