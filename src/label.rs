//! Label definitions for the NSFW classification model.
//!
//! The label set is fixed by the pretrained model's output head and is not
//! configurable at runtime.

use std::fmt;
use std::str::FromStr;

/// Categories predicted by the NSFW classification model.
///
/// The discriminant order matches the model's output vector, which is
/// alphabetical over the label names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// Safe-for-work drawings and illustrations.
    Drawings,
    /// Sexually explicit drawings and animations.
    Hentai,
    /// Safe-for-work photographic content.
    Neutral,
    /// Sexually explicit photographic content.
    Porn,
    /// Sexually suggestive but not explicit content.
    Sexy,
}

impl Label {
    /// All labels, in model output order.
    pub const ALL: [Self; 5] = [
        Self::Drawings,
        Self::Hentai,
        Self::Neutral,
        Self::Porn,
        Self::Sexy,
    ];

    /// Returns the label name as it appears in the JSON output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Drawings => "drawings",
            Self::Hentai => "hentai",
            Self::Neutral => "neutral",
            Self::Porn => "porn",
            Self::Sexy => "sexy",
        }
    }

    /// Returns the label's index in the model output vector.
    #[must_use]
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Returns whether this label counts toward the NSFW verdict.
    #[must_use]
    pub const fn is_explicit(&self) -> bool {
        matches!(self, Self::Hentai | Self::Porn | Self::Sexy)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Label {
    type Err = LabelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "drawings" | "drawing" => Ok(Self::Drawings),
            "hentai" => Ok(Self::Hentai),
            "neutral" => Ok(Self::Neutral),
            "porn" => Ok(Self::Porn),
            "sexy" => Ok(Self::Sexy),
            _ => Err(LabelParseError(s.to_string())),
        }
    }
}

impl TryFrom<usize> for Label {
    type Error = LabelParseError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value)
            .copied()
            .ok_or_else(|| LabelParseError(value.to_string()))
    }
}

/// Error returned when parsing an invalid label string or index.
#[derive(Debug, Clone)]
pub struct LabelParseError(String);

impl fmt::Display for LabelParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid label '{}', expected one of: drawings, hentai, neutral, porn, sexy",
            self.0
        )
    }
}

impl std::error::Error for LabelParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_from_str() {
        assert_eq!("drawings".parse::<Label>().unwrap(), Label::Drawings);
        assert_eq!("hentai".parse::<Label>().unwrap(), Label::Hentai);
        assert_eq!("neutral".parse::<Label>().unwrap(), Label::Neutral);
        assert_eq!("porn".parse::<Label>().unwrap(), Label::Porn);
        assert_eq!("sexy".parse::<Label>().unwrap(), Label::Sexy);

        assert_eq!("NEUTRAL".parse::<Label>().unwrap(), Label::Neutral);
        assert!("unknown".parse::<Label>().is_err());
    }

    #[test]
    fn test_label_index_roundtrip() {
        for (i, label) in Label::ALL.iter().enumerate() {
            assert_eq!(label.index(), i);
            assert_eq!(Label::try_from(i).unwrap(), *label);
        }
        assert!(Label::try_from(5).is_err());
    }

    #[test]
    fn test_label_display() {
        assert_eq!(Label::Porn.to_string(), "porn");
        assert_eq!(Label::Drawings.to_string(), "drawings");
    }

    #[test]
    fn test_explicit_labels() {
        assert!(Label::Hentai.is_explicit());
        assert!(Label::Porn.is_explicit());
        assert!(Label::Sexy.is_explicit());
        assert!(!Label::Neutral.is_explicit());
        assert!(!Label::Drawings.is_explicit());
    }
}
