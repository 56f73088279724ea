//! OpenAPI module

use utoipa::OpenApi;

use crate::infrastructure::http::{errors::ErrorResponse, handlers::v1::*};

#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "QuizMaster Notifications"),
    paths(
        notifications::send_notification::handler,
        uptime::handler
    ),
    components(schemas(
        notifications::send_notification::SendNotificationBody,
        notifications::send_notification::SendNotificationResponse,
        uptime::UptimeResponse,
        ErrorResponse,
    ))
)]
pub struct ApiDocs;
