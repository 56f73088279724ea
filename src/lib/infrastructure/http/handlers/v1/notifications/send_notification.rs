//! Send notification handler

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderMap},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    domain::notifications::{DispatchOutcome, NotificationDraft, NotificationService},
    infrastructure::http::{errors::ApiError, state::AppState},
};

/// Send notification request body
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendNotificationBody {
    /// The target user's identifier in the identity service
    #[serde(default)]
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    user_id: Option<String>,

    /// The literal email subject
    #[serde(default)]
    #[schema(example = "Your mock test results")]
    subject: Option<String>,

    /// The body text; every `{name}` occurrence is replaced with the
    /// recipient's display name
    #[serde(default)]
    #[schema(example = "Hello {name}, your analysis is ready.")]
    message: Option<String>,

    /// Display name substituted into the placeholder
    #[serde(default)]
    #[schema(example = "Asha")]
    user_name: Option<String>,
}

impl From<SendNotificationBody> for NotificationDraft {
    fn from(body: SendNotificationBody) -> Self {
        Self {
            user_id: body.user_id,
            subject: body.subject,
            message: body.message,
            user_name: body.user_name,
        }
    }
}

/// Send notification response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendNotificationResponse {
    /// Whether an email was handed to the provider
    success: bool,

    /// The provider-assigned message identifier, on success
    #[serde(skip_serializing_if = "Option::is_none")]
    email_id: Option<String>,

    /// Why nothing was sent, when `success` is `false`
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl From<DispatchOutcome> for SendNotificationResponse {
    fn from(outcome: DispatchOutcome) -> Self {
        match outcome {
            DispatchOutcome::Dispatched { email_id } => Self {
                success: true,
                email_id: Some(email_id),
                error: None,
            },
            DispatchOutcome::NoRecipient { reason } => Self {
                success: false,
                email_id: None,
                error: Some(reason),
            },
        }
    }
}

/// Send a notification email to a user
#[utoipa::path(
    post,
    operation_id = "send_notification",
    tag = "Notifications",
    path = "/api/v1/notifications",
    request_body = SendNotificationBody,
    responses(
        (status = StatusCode::OK, description = "Dispatched, or no recipient on record", body = SendNotificationResponse),
        (status = StatusCode::BAD_REQUEST, description = "Authentication, authorization, or validation failure", body = ErrorResponse),
    )
)]
pub async fn handler<N: NotificationService>(
    State(state): State<AppState<N>>,
    headers: HeaderMap,
    request: Result<Json<SendNotificationBody>, JsonRejection>,
) -> Result<Json<SendNotificationResponse>, ApiError> {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| ApiError::new_400("No authorization header"))?;

    let token = authorization
        .strip_prefix("Bearer ")
        .unwrap_or(authorization);

    let Json(body) = request?;

    let outcome = state.notifications.dispatch(token, body.into()).await?;

    Ok(Json(outcome.into()))
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderValue, Method, StatusCode};
    use axum_test::TestServer;
    use mockall::predicate::eq;
    use testresult::TestResult;

    use crate::{
        domain::{
            communication::MailerError,
            notifications::{
                tests::MockNotificationService, DispatchError, DispatchOutcome, NotificationDraft,
                ValidateNotificationError,
            },
        },
        infrastructure::http::{
            errors::ErrorResponse,
            handlers::v1::notifications::send_notification::{
                SendNotificationBody, SendNotificationResponse,
            },
            router,
            state::test_state,
        },
    };

    impl SendNotificationBody {
        fn new(user_id: &str, subject: &str, message: &str, user_name: Option<&str>) -> Self {
            Self {
                user_id: Some(user_id.to_string()),
                subject: Some(subject.to_string()),
                message: Some(message.to_string()),
                user_name: user_name.map(str::to_string),
            }
        }
    }

    fn body() -> SendNotificationBody {
        SendNotificationBody::new(
            "target-user",
            "Hi",
            "Hello {name}, good luck!",
            Some("Asha"),
        )
    }

    fn bearer(token: &'static str) -> (axum::http::HeaderName, HeaderValue) {
        (
            axum::http::header::AUTHORIZATION,
            HeaderValue::from_static(token),
        )
    }

    #[tokio::test]
    async fn test_missing_authorization_header_is_rejected() -> TestResult {
        // The mock has no dispatch expectation: reaching the service would panic.
        let state = test_state(None);

        let response = TestServer::new(router(state))?
            .post("/api/v1/notifications")
            .json(&body())
            .await;

        let json = response.json::<ErrorResponse>();

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(json.error, "No authorization header");

        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_token_is_unauthorized() -> TestResult {
        let mut notifications = MockNotificationService::new();

        notifications
            .expect_dispatch()
            .with(eq("expired"), eq(NotificationDraft::from(body())))
            .returning(|_, _| Err(DispatchError::Unauthorized));

        let (name, value) = bearer("Bearer expired");
        let response = TestServer::new(router(test_state(Some(notifications))))?
            .post("/api/v1/notifications")
            .add_header(name, value)
            .json(&body())
            .await;

        let json = response.json::<ErrorResponse>();

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(json.error, "Unauthorized");

        Ok(())
    }

    #[tokio::test]
    async fn test_non_admin_caller_is_refused() -> TestResult {
        let mut notifications = MockNotificationService::new();

        notifications
            .expect_dispatch()
            .returning(|_, _| Err(DispatchError::AdminRequired));

        let (name, value) = bearer("Bearer member-token");
        let response = TestServer::new(router(test_state(Some(notifications))))?
            .post("/api/v1/notifications")
            .add_header(name, value)
            .json(&body())
            .await;

        let json = response.json::<ErrorResponse>();

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(json.error, "Unauthorized - Admin access required");

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_fields_name_the_required_trio() -> TestResult {
        let mut notifications = MockNotificationService::new();

        notifications.expect_dispatch().returning(|_, _| {
            Err(DispatchError::Validation(
                ValidateNotificationError::MissingFields(vec!["subject", "message"]),
            ))
        });

        let (name, value) = bearer("Bearer admin-token");
        let response = TestServer::new(router(test_state(Some(notifications))))?
            .post("/api/v1/notifications")
            .add_header(name, value)
            .json(&serde_json::json!({ "userId": "target-user" }))
            .await;

        let json = response.json::<ErrorResponse>();

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(json.error, "Missing required fields: userId, subject, message");

        Ok(())
    }

    #[tokio::test]
    async fn test_no_recipient_is_a_successful_response() -> TestResult {
        let mut notifications = MockNotificationService::new();

        notifications.expect_dispatch().returning(|_, _| {
            Ok(DispatchOutcome::NoRecipient {
                reason: "No email found for user".to_string(),
            })
        });

        let (name, value) = bearer("Bearer admin-token");
        let response = TestServer::new(router(test_state(Some(notifications))))?
            .post("/api/v1/notifications")
            .add_header(name, value)
            .json(&body())
            .await;

        let json = response.json::<SendNotificationResponse>();

        assert_eq!(response.status_code(), StatusCode::OK);
        assert!(!json.success);
        assert_eq!(json.error.as_deref(), Some("No email found for user"));
        assert_eq!(json.email_id, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_send_success_returns_the_provider_id() -> TestResult {
        let mut notifications = MockNotificationService::new();

        notifications
            .expect_dispatch()
            .withf(|token, draft| {
                token == "admin-token" && draft == &NotificationDraft::from(body())
            })
            .returning(|_, _| {
                Ok(DispatchOutcome::Dispatched {
                    email_id: "email-id-1".to_string(),
                })
            });

        let (name, value) = bearer("Bearer admin-token");
        let response = TestServer::new(router(test_state(Some(notifications))))?
            .post("/api/v1/notifications")
            .add_header(name, value)
            .json(&body())
            .await;

        let json = response.json::<SendNotificationResponse>();

        assert_eq!(response.status_code(), StatusCode::OK);
        assert!(json.success);
        assert_eq!(json.email_id.as_deref(), Some("email-id-1"));
        assert_eq!(json.error, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_mail_sink_fault_is_a_bad_request() -> TestResult {
        let mut notifications = MockNotificationService::new();

        notifications.expect_dispatch().returning(|_, _| {
            Err(DispatchError::Mailer(MailerError::Rejected(
                "daily quota exceeded".to_string(),
            )))
        });

        let (name, value) = bearer("Bearer admin-token");
        let response = TestServer::new(router(test_state(Some(notifications))))?
            .post("/api/v1/notifications")
            .add_header(name, value)
            .json(&body())
            .await;

        let json = response.json::<ErrorResponse>();

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(json.error, "daily quota exceeded");

        Ok(())
    }

    #[tokio::test]
    async fn test_malformed_json_is_a_bad_request() -> TestResult {
        let state = test_state(None);

        let (name, value) = bearer("Bearer admin-token");
        let response = TestServer::new(router(state))?
            .post("/api/v1/notifications")
            .add_header(name, value)
            .text("not json")
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    #[tokio::test]
    async fn test_preflight_bypasses_every_gate() -> TestResult {
        // No dispatch expectation: the CORS layer must answer before the
        // handler ever runs, even without an authorization header.
        let state = test_state(None);

        let response = TestServer::new(router(state))?
            .method(Method::OPTIONS, "/api/v1/notifications")
            .add_header(
                axum::http::header::ORIGIN,
                HeaderValue::from_static("https://app.example.com"),
            )
            .add_header(
                axum::http::header::ACCESS_CONTROL_REQUEST_METHOD,
                HeaderValue::from_static("POST"),
            )
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(
            response.header("access-control-allow-origin"),
            HeaderValue::from_static("*")
        );
        assert_eq!(response.text(), "");

        Ok(())
    }

    #[tokio::test]
    async fn test_responses_carry_permissive_cors_headers() -> TestResult {
        let state = test_state(None);

        let response = TestServer::new(router(state))?
            .post("/api/v1/notifications")
            .add_header(
                axum::http::header::ORIGIN,
                HeaderValue::from_static("https://app.example.com"),
            )
            .json(&body())
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.header("access-control-allow-origin"),
            HeaderValue::from_static("*")
        );

        Ok(())
    }
}
