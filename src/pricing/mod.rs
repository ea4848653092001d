mod competitor_comparator;
mod fare_calculator;
mod negotiation;
mod payment;

pub use competitor_comparator::{compare_to_competitors, compare_with_surge};
pub use fare_calculator::compute_fares;
pub use negotiation::{negotiate, settle};
pub use payment::{apply_payment, charge_subscription};
