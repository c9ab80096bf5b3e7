use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use weagle_enquiry::EnquiryPayload;

use crate::routes::AppState;

pub const SUCCESS_MESSAGE: &str = "Email sent successfully";
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

/// POST /api/send-email - relay an enquiry to the business inbox
pub async fn action(
    State(app): State<AppState>,
    payload: Result<Json<EnquiryPayload>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::warn!(err = %rejection, "Rejected enquiry body");
            return error_response(StatusCode::BAD_REQUEST, INVALID_BODY_MESSAGE);
        }
    };

    match app.enquiry_command.submit(payload).await {
        Ok(receipt) => (
            StatusCode::OK,
            Json(json!({ "message": SUCCESS_MESSAGE, "id": receipt.id })),
        )
            .into_response(),
        Err(err) if err.is_validation() => {
            tracing::debug!(err = %err, "Enquiry failed validation");
            error_response(StatusCode::BAD_REQUEST, err.public_message())
        }
        Err(err) => {
            tracing::error!(err = %err, "Error sending email");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, err.public_message())
        }
    }
}
