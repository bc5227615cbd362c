use super::types::{AnalyzeRequest, AnalyzeResponse, ErrorResponse};
use crate::{Error, llm::GenerativeClient, prompt};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn GenerativeClient>,
}

/// Analyzes one diary entry through the generative upstream.
pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, Error> {
    // Anything the request layer cannot turn into AnalyzeRequest (absent
    // body, invalid JSON, non-string content) gets the same answer as a
    // missing diary entry.
    let content = payload
        .ok()
        .and_then(|Json(request)| request.content)
        .filter(|content| !content.is_empty());

    let Some(content) = content else {
        warn!("Rejected analysis request without diary content");
        return Err(Error::MissingContent);
    };

    info!(
        "Received analysis request ({} bytes of diary content)",
        content.len()
    );

    let prompt = prompt::build_analysis_prompt(&content);

    match state.client.generate(&prompt).await {
        Ok(analysis) => {
            info!("Successfully analyzed diary entry");
            Ok(Json(AnalyzeResponse {
                success: true,
                analysis,
            }))
        }
        Err(e) => {
            error!("Diary analysis failed: {}", e);
            Err(e)
        }
    }
}

/// JSON 405 for non-POST methods; axum's own method fallback answers with
/// an empty body.
pub async fn method_not_allowed() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse {
            error: "Method Not Allowed".to_string(),
        }),
    )
}
