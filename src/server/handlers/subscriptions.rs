use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::api::{DynAPI, SubscriptionAPI};
use crate::entities::{PaymentMethodId, SubscriptionCharge, SubscriptionTier, SubscriptionTierId};
use crate::error::Error;

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    tier: SubscriptionTierId,
    method: PaymentMethodId,
}

pub async fn list(
    Extension(api): Extension<DynAPI>,
) -> Result<Json<Vec<SubscriptionTier>>, Error> {
    let tiers = api.list_subscription_tiers().await?;

    Ok(tiers.into())
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateParams>,
) -> Result<Json<SubscriptionCharge>, Error> {
    let result = api.subscribe(params.tier, params.method.into()).await?;

    Ok(result.into())
}
