pub mod fares;
pub mod negotiations;
pub mod payments;
pub mod subscriptions;
