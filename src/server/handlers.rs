use super::types::{ConversationRequest, ErrorResponse, ModelOutput, StatusMessage};
use crate::adapter::InferenceAdapter;
use axum::{extract::State, http::StatusCode, response::Json};
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub adapter: InferenceAdapter,
}

pub async fn endpoint_1() -> Json<StatusMessage> {
    Json(StatusMessage {
        message: "FastAPI Endpoint 1 Active!".to_string(),
    })
}

pub async fn endpoint_2() -> Json<StatusMessage> {
    Json(StatusMessage {
        message: "FastAPI Endpoint 2 Active!".to_string(),
    })
}

pub async fn converse(
    State(state): State<AppState>,
    Json(request): Json<ConversationRequest>,
) -> Result<Json<ModelOutput>, (StatusCode, Json<ErrorResponse>)> {
    info!(
        "Received conversation request ({} bytes)",
        request.user_message.len()
    );

    match state.adapter.generate(&request.user_message).await {
        Ok(model_output) => Ok(Json(ModelOutput { model_output })),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                detail: e.to_string(),
            }),
        )),
    }
}
