use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::entities::Money;

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PaymentMethodId {
    CryptoWallet,
    CashWallet,
    CreditCard,
    DebitCard,
    ApplePay,
    GooglePay,
    Unknown(String),
}

impl PaymentMethodId {
    pub fn from_name(name: &str) -> Self {
        match name {
            "crypto_wallet" => Self::CryptoWallet,
            "cash_wallet" => Self::CashWallet,
            "credit_card" => Self::CreditCard,
            "debit_card" => Self::DebitCard,
            "apple_pay" => Self::ApplePay,
            "google_pay" => Self::GooglePay,
            other => Self::Unknown(other.into()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::CryptoWallet => "crypto_wallet",
            Self::CashWallet => "cash_wallet",
            Self::CreditCard => "credit_card",
            Self::DebitCard => "debit_card",
            Self::ApplePay => "apple_pay",
            Self::GooglePay => "google_pay",
            Self::Unknown(name) => name.as_str(),
        }
    }
}

impl Serialize for PaymentMethodId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for PaymentMethodId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: PaymentMethodId,
    pub display_name: String,
}

impl PaymentMethod {
    pub fn new(id: PaymentMethodId) -> Self {
        let display_name = match &id {
            PaymentMethodId::CryptoWallet => "GFEL Crypto Wallet",
            PaymentMethodId::CashWallet => "Cash Wallet",
            PaymentMethodId::CreditCard => "Credit Card",
            PaymentMethodId::DebitCard => "Debit Card",
            PaymentMethodId::ApplePay => "Apple Pay",
            PaymentMethodId::GooglePay => "Google Pay",
            PaymentMethodId::Unknown(_) => "Other",
        };

        Self {
            id,
            display_name: display_name.into(),
        }
    }
}

impl From<PaymentMethodId> for PaymentMethod {
    fn from(id: PaymentMethodId) -> Self {
        Self::new(id)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FinalCharge {
    pub base_amount: Money,
    pub payment_method: PaymentMethodId,
    pub payment_discount_percent: u32,
    pub discount_amount: Money,
    pub final_amount: Money,
    pub reward_tokens_earned: i64,
}
