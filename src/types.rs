use serde::{Deserialize, Serialize};
use std::fmt;

/// The five emotions reported by the remote classifier, in their fixed
/// declared order. Tie-breaks between equal scores follow this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Anger,
    Disgust,
    Fear,
    Joy,
    Sadness,
}

impl Emotion {
    pub const ALL: [Emotion; 5] = [
        Emotion::Anger,
        Emotion::Disgust,
        Emotion::Fear,
        Emotion::Joy,
        Emotion::Sadness,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Emotion::Anger => "anger",
            Emotion::Disgust => "disgust",
            Emotion::Fear => "fear",
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single score as the remote service sent it.
///
/// JSON integers stay integers so they print without a fractional part, the
/// way the service's own clients render them. A missing score is `Int(0)`.
/// `null` and non-numeric values fail to decode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Score {
    Int(i64),
    Float(f64),
}

impl Score {
    pub fn value(self) -> f64 {
        match self {
            Score::Int(v) => v as f64,
            Score::Float(v) => v,
        }
    }
}

impl Default for Score {
    fn default() -> Self {
        Score::Int(0)
    }
}

impl From<f64> for Score {
    fn from(value: f64) -> Self {
        Score::Float(value)
    }
}

impl From<i64> for Score {
    fn from(value: i64) -> Self {
        Score::Int(value)
    }
}

impl PartialEq<f64> for Score {
    fn eq(&self, other: &f64) -> bool {
        self.value() == *other
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Int(v) => write!(f, "{v}"),
            Score::Float(v) => f.write_str(&float_repr(*v)),
        }
    }
}

/// Shortest round-trip rendering of a float: fixed notation for decimal
/// exponents in `-4..16` with a trailing `.0` on whole numbers, scientific
/// notation with a signed two-digit exponent otherwise.
fn float_repr(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    let scientific = format!("{value:e}");
    let (mantissa, exponent) = scientific
        .split_once('e')
        .and_then(|(m, e)| Some((m, e.parse::<i32>().ok()?)))
        .unwrap_or((scientific.as_str(), 0));

    if (-4..16).contains(&exponent) {
        let fixed = value.to_string();
        if fixed.contains('.') {
            fixed
        } else {
            format!("{fixed}.0")
        }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.abs())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct EmotionScores {
    pub anger: Score,
    pub disgust: Score,
    pub fear: Score,
    pub joy: Score,
    pub sadness: Score,
}

impl EmotionScores {
    pub fn get(&self, emotion: Emotion) -> Score {
        match emotion {
            Emotion::Anger => self.anger,
            Emotion::Disgust => self.disgust,
            Emotion::Fear => self.fear,
            Emotion::Joy => self.joy,
            Emotion::Sadness => self.sadness,
        }
    }

    /// Scores paired with their emotion, in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (Emotion, Score)> + '_ {
        Emotion::ALL
            .into_iter()
            .map(move |emotion| (emotion, self.get(emotion)))
    }
}

/// Outcome of analysing one piece of text.
///
/// `Rejected` is the sentinel for input the remote service refused to
/// score: it carries neither scores nor a dominant emotion.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "FlatAnalysisResult")]
pub enum AnalysisResult {
    Detected {
        scores: EmotionScores,
        dominant_emotion: Emotion,
    },
    Rejected,
}

impl AnalysisResult {
    pub fn dominant_emotion(&self) -> Option<Emotion> {
        match self {
            AnalysisResult::Detected {
                dominant_emotion, ..
            } => Some(*dominant_emotion),
            AnalysisResult::Rejected => None,
        }
    }

    pub fn scores(&self) -> Option<&EmotionScores> {
        match self {
            AnalysisResult::Detected { scores, .. } => Some(scores),
            AnalysisResult::Rejected => None,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, AnalysisResult::Rejected)
    }
}

/// Wire shape of [`AnalysisResult`]: six flat keys, all `null` when rejected.
#[derive(Debug, Serialize)]
struct FlatAnalysisResult {
    anger: Option<Score>,
    disgust: Option<Score>,
    fear: Option<Score>,
    joy: Option<Score>,
    sadness: Option<Score>,
    dominant_emotion: Option<Emotion>,
}

impl From<AnalysisResult> for FlatAnalysisResult {
    fn from(result: AnalysisResult) -> Self {
        let scores = result.scores().copied();
        Self {
            anger: scores.map(|s| s.anger),
            disgust: scores.map(|s| s.disgust),
            fear: scores.map(|s| s.fear),
            joy: scores.map(|s| s.joy),
            sadness: scores.map(|s| s.sadness),
            dominant_emotion: result.dominant_emotion(),
        }
    }
}

/// Outbound body for the EmotionPredict call.
#[derive(Debug, Clone, Serialize)]
pub struct InferenceRequest<'a> {
    pub raw_document: RawDocument<'a>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RawDocument<'a> {
    pub text: &'a str,
}

impl<'a> InferenceRequest<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            raw_document: RawDocument { text },
        }
    }
}

/// Body returned by the remote service. Every level may be missing; only
/// the first prediction is ever consulted.
#[derive(Debug, Default, Deserialize)]
pub struct RawInferenceResponse {
    #[serde(rename = "emotionPredictions", default)]
    pub emotion_predictions: Vec<RawPrediction>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawPrediction {
    #[serde(default)]
    pub emotion: RawEmotionScores,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawEmotionScores {
    #[serde(default)]
    pub anger: Score,
    #[serde(default)]
    pub disgust: Score,
    #[serde(default)]
    pub fear: Score,
    #[serde(default)]
    pub joy: Score,
    #[serde(default)]
    pub sadness: Score,
}

impl RawEmotionScores {
    pub fn get(&self, emotion: Emotion) -> Score {
        match emotion {
            Emotion::Anger => self.anger,
            Emotion::Disgust => self.disgust,
            Emotion::Fear => self.fear,
            Emotion::Joy => self.joy,
            Emotion::Sadness => self.sadness,
        }
    }
}

pub const TEXT_PARAM: &str = "textToAnalyze";

#[derive(Debug, Default)]
pub struct AnalyzeParams {
    pub text_to_analyze: Option<String>,
}

impl From<Vec<(String, String)>> for AnalyzeParams {
    /// A repeated `textToAnalyze` resolves to its first occurrence.
    fn from(pairs: Vec<(String, String)>) -> Self {
        let text_to_analyze = pairs
            .into_iter()
            .find(|(key, _)| key == TEXT_PARAM)
            .map(|(_, value)| value);
        Self { text_to_analyze }
    }
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub response: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}
