//! Display profiles: per-device output configuration, persisted as JSON.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Output configuration for one physical display: channel ceilings and the
/// optional per-sample dwell delay for slow-responding scopes.
///
/// The bit depth of the DAC is a runtime value here, not a compile-time
/// switch, so one binary can drive both 10-bit and 12-bit hardware.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayProfile {
    pub max_x: i32,
    pub max_y: i32,
    /// Microseconds to dwell after each emitted sample. 0 disables pacing.
    #[serde(default)]
    pub sample_delay_us: u64,
}

impl DisplayProfile {
    /// Profile for a 12-bit DAC pair (0..=4095 per channel).
    pub fn dac_12bit() -> Self {
        Self {
            max_x: crate::sink::DAC_MAX_12BIT,
            max_y: crate::sink::DAC_MAX_12BIT,
            sample_delay_us: 0,
        }
    }

    /// Profile for a 10-bit DAC pair (0..=1023 per channel).
    pub fn dac_10bit() -> Self {
        Self {
            max_x: crate::sink::DAC_MAX_10BIT,
            max_y: crate::sink::DAC_MAX_10BIT,
            sample_delay_us: 0,
        }
    }

    /// Save profile to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        fs::write(path, json).map_err(|e| e.to_string())
    }

    /// Load profile from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let json = fs::read_to_string(path).map_err(|e| e.to_string())?;
        serde_json::from_str(&json).map_err(|e| e.to_string())
    }
}

impl Default for DisplayProfile {
    fn default() -> Self {
        Self::dac_12bit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let p = DisplayProfile::dac_12bit();
        assert_eq!(p.max_x, 4095);
        assert_eq!(p.max_y, 4095);
        assert_eq!(p.sample_delay_us, 0);
        assert_eq!(DisplayProfile::dac_10bit().max_x, 1023);
    }

    #[test]
    fn test_json_round_trip() {
        let p = DisplayProfile {
            max_x: 2047,
            max_y: 4095,
            sample_delay_us: 5,
        };
        let json = serde_json::to_string(&p).unwrap();
        let q: DisplayProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(q.max_x, 2047);
        assert_eq!(q.max_y, 4095);
        assert_eq!(q.sample_delay_us, 5);
    }

    #[test]
    fn test_missing_delay_defaults_to_zero() {
        let q: DisplayProfile = serde_json::from_str(r#"{"max_x":1023,"max_y":1023}"#).unwrap();
        assert_eq!(q.sample_delay_us, 0);
    }
}
