use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::config::WatsonConfig;
use crate::engine::EmotionDetector;
use crate::error::{DetectorError, DetectorResult};
use crate::scores::{dominant_emotion, extract_scores};
use crate::types::{AnalysisResult, InferenceRequest, RawInferenceResponse};

pub const MODEL_ID_HEADER: &str = "grpc-metadata-mm-model-id";

/// Client for the Watson NLP EmotionPredict endpoint. One attempt per call,
/// bounded by the configured timeout.
pub struct WatsonEmotionClient {
    http: Client,
    config: WatsonConfig,
}

impl WatsonEmotionClient {
    #[tracing::instrument(skip(config), fields(url = %config.url, model_id = %config.model_id))]
    pub fn new(config: WatsonConfig) -> DetectorResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(DetectorError::Request)?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &WatsonConfig {
        &self.config
    }
}

#[async_trait]
impl EmotionDetector for WatsonEmotionClient {
    #[tracing::instrument(skip(self, text), fields(text_len = text.len()))]
    async fn detect(&self, text: &str) -> DetectorResult<AnalysisResult> {
        let timeout = self.config.timeout;

        let response = self
            .http
            .post(&self.config.url)
            .header(MODEL_ID_HEADER, &self.config.model_id)
            .json(&InferenceRequest::new(text))
            .send()
            .await
            .map_err(|e| DetectorError::from_reqwest(e, timeout))?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "Emotion service responded");

        // 400 is how the service rejects text it cannot score, usually blank input
        if status == StatusCode::BAD_REQUEST {
            tracing::info!("Emotion service rejected the input");
            return Ok(AnalysisResult::Rejected);
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| DetectorError::from_reqwest(e, timeout))?;

        if !status.is_success() {
            return Err(DetectorError::UnexpectedStatus {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        let raw: RawInferenceResponse = serde_json::from_slice(&body)?;
        let scores = extract_scores(&raw);
        let dominant = dominant_emotion(&scores);
        tracing::debug!(dominant_emotion = %dominant, "Emotion scores extracted");

        Ok(AnalysisResult::Detected {
            scores,
            dominant_emotion: dominant,
        })
    }
}
