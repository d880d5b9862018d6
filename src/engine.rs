use crate::error::DetectorResult;
use crate::types::AnalysisResult;
use async_trait::async_trait;

/// Anything that can score a piece of text. The HTTP layer only sees this
/// trait, so tests can swap the remote client for a fake.
#[async_trait]
pub trait EmotionDetector: Send + Sync {
    async fn detect(&self, text: &str) -> DetectorResult<AnalysisResult>;
}
