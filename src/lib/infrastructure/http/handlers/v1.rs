use axum::{
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    domain::notifications::NotificationService,
    infrastructure::http::{open_api::ApiDocs, state::AppState},
};

pub mod notifications;
pub mod stoplight;
pub mod uptime;

pub fn router<N: NotificationService>() -> Router<AppState<N>> {
    Router::new()
        .route("/", get(stoplight::handler))
        .route("/openapi.json", get(Json(ApiDocs::openapi())))
        .route("/uptime", get(uptime::handler))
        .route(
            "/notifications",
            post(notifications::send_notification::handler),
        )
}
