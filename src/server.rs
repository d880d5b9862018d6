use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
};
use metrics::counter;
use std::sync::Arc;

use crate::engine::EmotionDetector;
use crate::error::DetectorError;
use crate::types::{
    AnalysisResult, AnalyzeParams, AnalyzeResponse, Emotion, EmotionScores, ErrorResponse,
    HealthResponse,
};

pub const INVALID_TEXT_MESSAGE: &str = "Invalid text! Please try again!";

#[derive(Clone)]
pub struct AppState {
    detector: Arc<dyn EmotionDetector>,
}

impl AppState {
    pub fn new(detector: Arc<dyn EmotionDetector>) -> Self {
        Self { detector }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/emotionDetector", get(emotion_detector_handler))
        .route("/emotionScores", get(emotion_scores_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Sentence returned to callers for a scored statement.
pub fn format_response(scores: &EmotionScores, dominant: Emotion) -> String {
    format!(
        "For the given statement, the system response is 'anger': {}, 'disgust': {}, \
         'fear': {}, 'joy': {} and 'sadness': {}. The dominant emotion is {}.",
        scores.anger, scores.disgust, scores.fear, scores.joy, scores.sadness, dominant
    )
}

/// Remote failures surface as gateway errors, never as "invalid text".
#[derive(Debug)]
pub struct ApiError(DetectorError);

impl From<DetectorError> for ApiError {
    fn from(err: DetectorError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        counter!("emotion_service_errors_total").increment(1);
        tracing::error!(error = %self.0, "Emotion service call failed");

        let status = if self.0.is_timeout() {
            StatusCode::GATEWAY_TIMEOUT
        } else {
            StatusCode::BAD_GATEWAY
        };
        let body = ErrorResponse {
            error: self.0.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

fn non_blank(params: &AnalyzeParams) -> Option<&str> {
    params
        .text_to_analyze
        .as_deref()
        .filter(|text| !text.trim().is_empty())
}

#[tracing::instrument(skip(state, pairs))]
async fn emotion_detector_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    counter!("emotion_requests_total").increment(1);
    let params = AnalyzeParams::from(pairs);

    let Some(text) = non_blank(&params) else {
        counter!("emotion_invalid_input_total").increment(1);
        tracing::info!("Blank input, skipping emotion service");
        return Ok(Json(AnalyzeResponse {
            response: INVALID_TEXT_MESSAGE.to_string(),
        }));
    };

    let response = match state.detector.detect(text).await? {
        AnalysisResult::Detected {
            scores,
            dominant_emotion,
        } => {
            tracing::info!(dominant_emotion = %dominant_emotion, "Emotion detected");
            format_response(&scores, dominant_emotion)
        }
        AnalysisResult::Rejected => {
            counter!("emotion_invalid_input_total").increment(1);
            INVALID_TEXT_MESSAGE.to_string()
        }
    };

    Ok(Json(AnalyzeResponse { response }))
}

#[tracing::instrument(skip(state, pairs))]
async fn emotion_scores_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<AnalysisResult>, ApiError> {
    counter!("emotion_requests_total").increment(1);
    let params = AnalyzeParams::from(pairs);

    let Some(text) = non_blank(&params) else {
        counter!("emotion_invalid_input_total").increment(1);
        return Ok(Json(AnalysisResult::Rejected));
    };

    let result = state.detector.detect(text).await?;
    if result.is_rejected() {
        counter!("emotion_invalid_input_total").increment(1);
    }

    Ok(Json(result))
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
