//! Classification result container.
//!
//! [`Scores`] wraps the raw probability vector produced by the model and
//! provides label-keyed access, top-1 lookup, and the NSFW verdict used by
//! downstream moderation callers.

use ndarray::Array1;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Number, Value};

use crate::label::Label;

/// Confidence scores over the fixed label set.
#[derive(Debug, Clone)]
pub struct Scores {
    /// Raw probability data with shape (`num_labels`,).
    pub data: Array1<f32>,
}

impl Scores {
    /// Create a new `Scores` instance from a raw probability vector.
    ///
    /// # Panics
    ///
    /// Panics if `data` does not have exactly one entry per label.
    #[must_use]
    pub fn new(data: Array1<f32>) -> Self {
        assert_eq!(
            data.len(),
            Label::ALL.len(),
            "expected {} scores, got {}",
            Label::ALL.len(),
            data.len()
        );
        Self { data }
    }

    /// Get the confidence score for a single label.
    #[must_use]
    pub fn get(&self, label: Label) -> f32 {
        self.data[label.index()]
    }

    /// Get the label with the highest confidence.
    #[must_use]
    pub fn top1(&self) -> Label {
        let idx = self
            .data
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
            .map_or(0, |(i, _)| i);
        Label::try_from(idx).unwrap_or(Label::Neutral)
    }

    /// Get the confidence of the top-1 label.
    #[must_use]
    pub fn top1conf(&self) -> f32 {
        self.get(self.top1())
    }

    /// Combined probability of the explicit labels (hentai, porn, sexy).
    #[must_use]
    pub fn nsfw_score(&self) -> f32 {
        Label::ALL
            .iter()
            .filter(|l| l.is_explicit())
            .map(|l| self.get(*l))
            .sum()
    }

    /// Whether the combined explicit probability reaches `threshold`.
    #[must_use]
    pub fn is_nsfw(&self, threshold: f32) -> bool {
        self.nsfw_score() >= threshold
    }

    /// Convert the scores into a label-keyed JSON object.
    ///
    /// Keys appear in model output order, matching the mapping the
    /// underlying classifier reports.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut map = Map::with_capacity(Label::ALL.len());
        for label in Label::ALL {
            let score = f64::from(self.get(label));
            let number = Number::from_f64(score).unwrap_or_else(|| Number::from(0));
            map.insert(label.as_str().to_string(), Value::Number(number));
        }
        Value::Object(map)
    }
}

impl Serialize for Scores {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Label::ALL.len()))?;
        for label in Label::ALL {
            map.serialize_entry(label.as_str(), &self.get(label))?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn sample() -> Scores {
        // drawings, hentai, neutral, porn, sexy
        Scores::new(array![0.02, 0.05, 0.80, 0.10, 0.03])
    }

    #[test]
    fn test_get_by_label() {
        let scores = sample();
        assert!((scores.get(Label::Neutral) - 0.80).abs() < f32::EPSILON);
        assert!((scores.get(Label::Porn) - 0.10).abs() < f32::EPSILON);
    }

    #[test]
    fn test_top1() {
        let scores = sample();
        assert_eq!(scores.top1(), Label::Neutral);
        assert!((scores.top1conf() - 0.80).abs() < f32::EPSILON);
    }

    #[test]
    fn test_nsfw_score_sums_explicit_labels() {
        let scores = sample();
        // hentai + porn + sexy
        assert!((scores.nsfw_score() - 0.18).abs() < 1e-6);
        assert!(!scores.is_nsfw(0.7));

        let explicit = Scores::new(array![0.01, 0.30, 0.04, 0.60, 0.05]);
        assert!(explicit.is_nsfw(0.7));
    }

    #[test]
    fn test_to_json_has_all_labels() {
        let json = sample().to_json();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 5);
        for label in Label::ALL {
            let value = obj.get(label.as_str()).unwrap().as_f64().unwrap();
            assert!((0.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn test_serialize_matches_to_json() {
        let scores = sample();
        let via_serde: Value = serde_json::to_value(&scores).unwrap();
        assert_eq!(via_serde, scores.to_json());
    }

    #[test]
    #[should_panic(expected = "expected 5 scores")]
    fn test_wrong_length_panics() {
        let _ = Scores::new(array![0.5, 0.5]);
    }
}
