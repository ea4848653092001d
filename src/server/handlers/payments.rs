use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::api::{DynAPI, PaymentAPI};
use crate::entities::{FinalCharge, Money, PaymentMethodId, RideReceipt, SavingsStats};
use crate::error::Error;

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    base_amount: Money,
    method: PaymentMethodId,
}

#[derive(Serialize, Deserialize)]
pub struct SavingsParams {
    receipts: Vec<RideReceipt>,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateParams>,
) -> Result<Json<FinalCharge>, Error> {
    let charge = api
        .apply_payment(params.base_amount, params.method.into())
        .await?;

    Ok(charge.into())
}

pub async fn savings(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<SavingsParams>,
) -> Result<Json<SavingsStats>, Error> {
    let stats = api.summarize_savings(params.receipts).await?;

    Ok(stats.into())
}
