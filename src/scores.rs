use crate::types::{Emotion, EmotionScores, RawInferenceResponse};

/// Pull the five scores out of the first prediction of a decoded response.
///
/// A missing prediction list, a missing `emotion` object or a missing score
/// all count as integer zero for the affected emotions.
pub fn extract_scores(response: &RawInferenceResponse) -> EmotionScores {
    let Some(prediction) = response.emotion_predictions.first() else {
        return EmotionScores::default();
    };
    let raw = &prediction.emotion;
    let score = |emotion: Emotion| raw.get(emotion);

    EmotionScores {
        anger: score(Emotion::Anger),
        disgust: score(Emotion::Disgust),
        fear: score(Emotion::Fear),
        joy: score(Emotion::Joy),
        sadness: score(Emotion::Sadness),
    }
}

/// The emotion with the highest score. Ties go to the earliest emotion in
/// declared order, since the running maximum only moves on a strictly
/// greater score.
pub fn dominant_emotion(scores: &EmotionScores) -> Emotion {
    let mut best = Emotion::Anger;
    let mut best_score = scores.get(best).value();

    for (emotion, score) in scores.iter().skip(1) {
        let score = score.value();
        if score > best_score {
            best = emotion;
            best_score = score;
        }
    }

    best
}
