pub mod config;
pub mod engine;
pub mod error;
pub mod scores;
pub mod server;
pub mod types;
pub mod watson_engine;

pub use engine::EmotionDetector;
pub use error::{DetectorError, DetectorResult};
pub use types::{AnalysisResult, Emotion, EmotionScores, Score};
pub use watson_engine::WatsonEmotionClient;
