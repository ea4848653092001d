mod competitor;
mod money;
mod negotiation;
mod payment;
mod quote;
mod savings;
mod subscription;
mod trip;

pub use competitor::{Comparison, CompetitorPrice, SavingsSummary};
pub use money::{BasisPoints, Money};
pub use negotiation::NegotiationOutcome;
pub use payment::{FinalCharge, PaymentMethod, PaymentMethodId};
pub use quote::{FareQuote, FareTable};
pub use savings::{RideReceipt, SavingsStats};
pub use subscription::{Subscription, SubscriptionCharge, SubscriptionTier, SubscriptionTierId};
pub use trip::{TripRequest, VehicleClass};
