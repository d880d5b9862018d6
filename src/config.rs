use clap::Parser;
use std::time::Duration;

pub const DEFAULT_SERVICE_URL: &str = "https://sn-watson-emotion.labs.skills.network/v1/watson.runtime.nlp.v1/NlpService/EmotionPredict";
pub const DEFAULT_MODEL_ID: &str = "emotion_aggregated-workflow_lang_en_stock";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Server host to bind to
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Server port to bind to
    #[arg(long, env = "PORT", default_value = "5000")]
    pub port: u16,

    /// EmotionPredict endpoint of the remote service
    #[arg(long, env = "EMOTION_SERVICE_URL", default_value = DEFAULT_SERVICE_URL)]
    pub service_url: String,

    /// Model routed to via the grpc-metadata-mm-model-id header
    #[arg(long, env = "EMOTION_MODEL_ID", default_value = DEFAULT_MODEL_ID)]
    pub model_id: String,

    /// Timeout in seconds for each call to the remote service
    #[arg(long, env = "EMOTION_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Emit logs as JSON
    #[arg(long, env = "LOG_JSON")]
    pub log_json: bool,
}

impl Config {
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone)]
pub struct WatsonConfig {
    pub url: String,
    pub model_id: String,
    pub timeout: Duration,
}

impl Default for WatsonConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SERVICE_URL.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl From<&Config> for WatsonConfig {
    fn from(config: &Config) -> Self {
        Self {
            url: config.service_url.clone(),
            model_id: config.model_id.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }
}
