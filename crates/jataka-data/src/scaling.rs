//! Emotion score scaling for display
//!
//! Raw scores are probability distributions over the eight emotions and sit
//! close to the uniform 0.125, so charts rescale them to make differences
//! visible.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Score of each emotion under a uniform distribution.
pub const UNIFORM_BASELINE: f64 = 0.125;

/// Largest observed deviation above the baseline.
const MAX_DEVIATION_ABOVE: f64 = 0.052;

/// Largest observed deviation below the baseline.
const MAX_DEVIATION_BELOW: f64 = 0.021;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalingMethod {
    /// Min-max within one chapter.
    #[default]
    MinMax,
    /// Deviation from the uniform baseline.
    Baseline,
    Raw,
}

impl ScalingMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalingMethod::MinMax => "minmax",
            ScalingMethod::Baseline => "baseline",
            ScalingMethod::Raw => "raw",
        }
    }

    /// Help text for the scaling selector.
    pub fn description(&self) -> &'static str {
        match self {
            ScalingMethod::MinMax => {
                "Highlight Differences (Min-Max): scales emotions within each chapter so the \
                 highest emotion is 1.0 and the lowest is 0.0."
            }
            ScalingMethod::Baseline => {
                "Above/Below Baseline: shows how far each emotion deviates from the uniform \
                 12.5%. Values near 0.5 are close to baseline, 1.0 is highly over-represented, \
                 0.0 highly under-represented."
            }
            ScalingMethod::Raw => {
                "Raw Scores: original probabilities as predicted by the model. All emotions \
                 sum to 1.0."
            }
        }
    }
}

/// Unknown names fall back to raw scores.
impl FromStr for ScalingMethod {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "minmax" => ScalingMethod::MinMax,
            "baseline" => ScalingMethod::Baseline,
            _ => ScalingMethod::Raw,
        })
    }
}

impl fmt::Display for ScalingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One emotion's scaled and raw score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaledScore {
    pub emotion: String,
    pub scaled: f64,
    pub raw: f64,
}

/// Scale a chapter's emotion scores, keeping input order.
pub fn scale_emotion_scores(scores: &[(&str, f64)], method: ScalingMethod) -> Vec<ScaledScore> {
    let min = scores.iter().map(|&(_, s)| s).fold(f64::INFINITY, f64::min);
    let max = scores
        .iter()
        .map(|&(_, s)| s)
        .fold(f64::NEG_INFINITY, f64::max);

    scores
        .iter()
        .map(|&(emotion, raw)| {
            let scaled = match method {
                ScalingMethod::Raw => raw,
                ScalingMethod::MinMax if max == min => 0.5,
                ScalingMethod::MinMax => (raw - min) / (max - min),
                ScalingMethod::Baseline => baseline_scale(raw),
            };
            ScaledScore {
                emotion: emotion.to_string(),
                scaled,
                raw,
            }
        })
        .collect()
}

fn baseline_scale(raw: f64) -> f64 {
    let deviation = raw - UNIFORM_BASELINE;
    if deviation >= 0.0 {
        (deviation / MAX_DEVIATION_ABOVE).min(1.0)
    } else {
        (0.5 + deviation / MAX_DEVIATION_BELOW * 0.5).max(0.0)
    }
}

/// Hover label, e.g. `Joy: 0.500 (raw: 0.1250)`.
pub fn format_score(emotion: &str, scaled: f64, raw: f64, method: ScalingMethod) -> String {
    let name = title_case(emotion);
    match method {
        ScalingMethod::Raw => format!("{name}: {raw:.4}"),
        _ => format!("{name}: {scaled:.3} (raw: {raw:.4})"),
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
