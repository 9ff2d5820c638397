//! Typewriter configuration.
//!
//! Every field has a default, so a configuration document only needs the
//! keys it wants to change:
//!
//! ```json
//! { "words": ["Tech Enthusiast", "Hobbyist"], "betweenWordsDelay": 100, "loop": false }
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default delay between characters while typing.
pub const DEFAULT_TYPING_SPEED: Duration = Duration::from_millis(70);
/// Default delay between characters while deleting.
pub const DEFAULT_DELETING_SPEED: Duration = Duration::from_millis(40);
/// Default delay before the first character is typed.
pub const DEFAULT_START_DELAY: Duration = Duration::from_millis(400);
/// Default hold time of a fully typed phrase.
pub const DEFAULT_BETWEEN_WORDS_DELAY: Duration = Duration::from_millis(1000);

/// Configuration for a [`Typewriter`](super::Typewriter).
///
/// Reconfiguring a running engine is not supported; build a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypewriterConfig {
    /// Phrases to cycle through. Empty strings are dropped.
    pub words: Vec<String>,
    /// Delay between characters while typing.
    #[serde(with = "millis")]
    pub typing_speed: Duration,
    /// Delay between characters while deleting.
    #[serde(with = "millis")]
    pub deleting_speed: Duration,
    /// Delay before the first character is typed.
    #[serde(with = "millis")]
    pub start_delay: Duration,
    /// How long a fully typed phrase is held before deletion starts.
    #[serde(with = "millis")]
    pub between_words_delay: Duration,
    /// Cycle forever. When false, stop with the last phrase fully typed.
    #[serde(rename = "loop")]
    pub looping: bool,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            words: Vec::new(),
            typing_speed: DEFAULT_TYPING_SPEED,
            deleting_speed: DEFAULT_DELETING_SPEED,
            start_delay: DEFAULT_START_DELAY,
            between_words_delay: DEFAULT_BETWEEN_WORDS_DELAY,
            looping: true,
        }
    }
}

impl TypewriterConfig {
    /// Create a configuration for the given phrases with default timings.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Parse a JSON configuration document.
    ///
    /// Missing keys keep their defaults. Negative delays clamp to zero.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builder-style setter for [`Self::looping`].
    #[must_use]
    pub fn with_loop(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Builder-style setter for all four delays at once.
    #[must_use]
    pub fn with_timing(
        mut self,
        typing_speed: Duration,
        deleting_speed: Duration,
        start_delay: Duration,
        between_words_delay: Duration,
    ) -> Self {
        self.typing_speed = typing_speed;
        self.deleting_speed = deleting_speed;
        self.start_delay = start_delay;
        self.between_words_delay = between_words_delay;
        self
    }
}

/// Convert a millisecond count from a configuration document into a delay.
///
/// Negative and NaN values become zero; huge values saturate at
/// `u64::MAX` milliseconds. Fractions are kept to the nanosecond.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn clamp_millis(ms: f64) -> Duration {
    if ms.is_nan() || ms <= 0.0 {
        return Duration::ZERO;
    }
    let whole = ms.trunc();
    let nanos = ((ms - whole) * 1_000_000.0).round();
    // `as` saturates for out-of-range floats
    Duration::from_millis(whole as u64).saturating_add(Duration::from_nanos(nanos as u64))
}

/// Serde adapter writing a `Duration` as whole milliseconds.
mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(delay: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(delay.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let ms = f64::deserialize(deserializer)?;
        Ok(super::clamp_millis(ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TypewriterConfig::default();
        assert!(config.words.is_empty());
        assert_eq!(config.typing_speed, Duration::from_millis(70));
        assert_eq!(config.deleting_speed, Duration::from_millis(40));
        assert_eq!(config.start_delay, Duration::from_millis(400));
        assert_eq!(config.between_words_delay, Duration::from_millis(1000));
        assert!(config.looping);
    }

    #[test]
    fn test_from_json_partial() {
        let config = TypewriterConfig::from_json(
            r#"{ "words": ["Tech Enthusiast", "Hobbyist"], "betweenWordsDelay": 100, "loop": false }"#,
        )
        .unwrap();

        assert_eq!(config.words, vec!["Tech Enthusiast", "Hobbyist"]);
        assert_eq!(config.between_words_delay, Duration::from_millis(100));
        assert_eq!(config.typing_speed, DEFAULT_TYPING_SPEED);
        assert!(!config.looping);
    }

    #[test]
    fn test_negative_delays_clamp_to_zero() {
        let config =
            TypewriterConfig::from_json(r#"{ "typingSpeed": -20, "deletingSpeed": -0.5 }"#).unwrap();
        assert_eq!(config.typing_speed, Duration::ZERO);
        assert_eq!(config.deleting_speed, Duration::ZERO);
    }

    #[test]
    fn test_non_numeric_delay_is_rejected() {
        let err = TypewriterConfig::from_json(r#"{ "typingSpeed": "fast" }"#).unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_clamp_millis() {
        assert_eq!(clamp_millis(f64::NAN), Duration::ZERO);
        assert_eq!(clamp_millis(f64::NEG_INFINITY), Duration::ZERO);
        assert_eq!(clamp_millis(f64::INFINITY), Duration::from_millis(u64::MAX));
        assert_eq!(clamp_millis(12.0), Duration::from_millis(12));
        assert_eq!(clamp_millis(0.5), Duration::from_micros(500));
    }

    #[test]
    fn test_json_uses_original_keys() {
        let config = TypewriterConfig::new(["Go"]).with_loop(false);
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["typingSpeed"], 70);
        assert_eq!(json["betweenWordsDelay"], 1000);
        assert_eq!(json["loop"], false);
        assert_eq!(TypewriterConfig::from_json(&json.to_string()).unwrap(), config);
    }
}
