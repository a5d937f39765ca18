// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Decode-time knobs, persisted as JSON by the config service.

use serde::{Deserialize, Serialize};

/// Default bound on the number of points in one trajectory.
pub const DEFAULT_MAX_POINTS: usize = 1_000_000;

/// What to do when the encoded byte count differs from the pre-computed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeMismatchPolicy {
    /// Abort the decode with [`crate::DecodeError::SizeMismatch`].
    #[default]
    Fail,
    /// Log a warning and keep the shorter record.
    Warn,
}

/// Options for [`crate::decode_with`] and [`crate::encode_sequence`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Handling of size mismatches in the sequence encoder.
    pub size_mismatch: SizeMismatchPolicy,
    /// Largest accepted point count.
    pub max_points: usize,
    /// Accept intervals whose start lies after their end.
    pub allow_inverted_interval: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            size_mismatch: SizeMismatchPolicy::Fail,
            max_points: DEFAULT_MAX_POINTS,
            allow_inverted_interval: false,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: CodecConfig = serde_json::from_str(r#"{ "size_mismatch": "warn" }"#).unwrap();
        assert_eq!(cfg.size_mismatch, SizeMismatchPolicy::Warn);
        assert_eq!(cfg.max_points, DEFAULT_MAX_POINTS);
        assert!(!cfg.allow_inverted_interval);
    }

    #[test]
    fn json_round_trip() {
        let cfg = CodecConfig {
            size_mismatch: SizeMismatchPolicy::Warn,
            max_points: 7,
            allow_inverted_interval: true,
        };
        let text = serde_json::to_string(&cfg).unwrap();
        assert_eq!(
            text,
            r#"{"size_mismatch":"warn","max_points":7,"allow_inverted_interval":true}"#
        );
        assert_eq!(serde_json::from_str::<CodecConfig>(&text).unwrap(), cfg);
    }
}
