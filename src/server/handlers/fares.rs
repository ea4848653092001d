use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::api::{DynAPI, FareAPI};
use crate::entities::{Comparison, FareQuote, FareTable, Money, TripRequest};
use crate::error::Error;

#[derive(Serialize, Deserialize)]
pub struct CompareParams {
    quote: FareQuote,
    current_price: Money,
    surge_multiplier: Option<f64>,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(trip): Json<TripRequest>,
) -> Result<Json<FareTable>, Error> {
    let table = api.compute_fares(trip).await?;

    Ok(table.into())
}

pub async fn compare(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CompareParams>,
) -> Result<Json<Comparison>, Error> {
    let comparison = api
        .compare_to_competitors(params.quote, params.current_price, params.surge_multiplier)
        .await?;

    Ok(comparison.into())
}
