use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AncError, AncResult};
use crate::fixed_point::scale_for_fraction_bits;
use crate::rom::validate_module_name;
use crate::signal::SignalOptions;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoldenModelConfig {
    /// Number of adaptive filter taps, N.
    pub taps: usize,
    /// Step size, μ.
    pub mu: f64,
    /// Length of the generated input sequences, L. Must exceed `taps`.
    pub num_samples: usize,
    /// Fractional bits of the 16 bit fixed point format.
    pub fraction_bits: u32,
    /// Seed for the reference noise.
    pub seed: u64,
    pub rom_module_name: String,
    pub signal: SignalOptions,
}

impl Default for GoldenModelConfig {
    fn default() -> Self {
        Self {
            taps: 8,
            mu: 0.02,
            num_samples: 1024,
            fraction_bits: 8,
            seed: 0,
            rom_module_name: "rom_data".into(),
            signal: SignalOptions::default(),
        }
    }
}

impl GoldenModelConfig {
    /// Reads a JSON config. Missing fields keep their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> AncResult<Self> {
        let reader = BufReader::new(File::open(path)?);
        let config: Self = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    pub fn scale(&self) -> f64 {
        scale_for_fraction_bits(self.fraction_bits)
    }

    pub fn validate(&self) -> AncResult<()> {
        if self.taps == 0 {
            return Err(AncError::InvalidTapCount(self.taps));
        }
        if !self.mu.is_finite() || self.mu <= 0.0 {
            return Err(AncError::InvalidStepSize(self.mu));
        }
        if self.num_samples <= self.taps {
            return Err(AncError::TooFewSamples {
                len: self.num_samples,
                taps: self.taps,
            });
        }
        if self.fraction_bits > 15 {
            return Err(AncError::InvalidFractionBits(self.fraction_bits));
        }
        validate_module_name(&self.rom_module_name)?;
        self.signal.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GoldenModelConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.scale(), 256.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: GoldenModelConfig =
            serde_json::from_str(r#"{ "taps": 16, "signal": { "amplitude": 0.5 } }"#).unwrap();
        assert_eq!(config.taps, 16);
        assert_eq!(config.mu, 0.02);
        assert_eq!(config.signal.amplitude, 0.5);
        assert_eq!(config.signal.noise_deviation, 0.4);
    }

    #[test]
    fn test_validate() {
        let config = GoldenModelConfig {
            num_samples: 8,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(AncError::TooFewSamples { len: 8, taps: 8 })
        ));
        let config = GoldenModelConfig {
            mu: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(AncError::InvalidStepSize(_))));
        let config = GoldenModelConfig {
            fraction_bits: 16,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(AncError::InvalidFractionBits(16))
        ));
        let config = GoldenModelConfig {
            rom_module_name: "1rom".into(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(AncError::InvalidModuleName(_))
        ));
        let mut config = GoldenModelConfig::default();
        config.signal.noise_deviation = -1.0;
        assert!(matches!(
            config.validate(),
            Err(AncError::InvalidNoiseDeviation(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            GoldenModelConfig::from_json_file("/nonexistent/anc.json"),
            Err(AncError::Io(_))
        ));
    }
}
