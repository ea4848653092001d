use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::api::{DynAPI, NegotiationAPI};
use crate::entities::{Money, NegotiationOutcome};
use crate::error::Error;

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    price: Money,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateParams>,
) -> Result<Json<NegotiationOutcome>, Error> {
    let outcome = api.negotiate(params.price).await?;

    Ok(outcome.into())
}
