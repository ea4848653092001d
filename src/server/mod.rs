mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};

use crate::api::{DynAPI, API};
use crate::error::{server_error, Error};
use crate::server::handlers::{fares, negotiations, payments, subscriptions};

pub fn router<T: API + Sync + Send + 'static>(api: T) -> Router {
    let api = Arc::new(api) as DynAPI;

    Router::new()
        .route("/fares", post(fares::create))
        .route("/comparisons", post(fares::compare))
        .route("/negotiations", post(negotiations::create))
        .route("/payments", post(payments::create))
        .route("/savings", post(payments::savings))
        .route(
            "/subscriptions",
            get(subscriptions::list).post(subscriptions::create),
        )
        .layer(Extension(api))
}

pub async fn serve<T: API + Sync + Send + 'static>(api: T, addr: SocketAddr) -> Result<(), Error> {
    let app = router(api);

    tracing::info!("listening on {}", addr);

    axum::Server::try_bind(&addr)
        .map_err(server_error)?
        .serve(app.into_make_service())
        .await
        .map_err(server_error)
}
