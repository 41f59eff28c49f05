//! Synthetic noise cancellation scenario.
//!
//! A clean sine is buried in noise that reached the primary sensor through an
//! unknown FIR path. The reference sensor picks up the noise alone:
//!
//! ```text
//! x(n) = v(n)                   v ~ Normal(0, σ)
//! d(n) = s(n) + (h * v)(n)      s(n) = A sin(2π f n)
//! ```
//!
//! Generation is seeded, so the same seed always gives the same sequences.

use core::f64::consts::PI;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::common::fir_filter;
use crate::error::{AncError, AncResult};
use crate::logging::debug;

/// Interference path from the noise source to the primary sensor.
pub const DEFAULT_INTERFERENCE_PATH: [f64; 8] = [0.5, -0.3, 0.1, -0.05, 0.02, -0.01, 0.0, 0.0];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalOptions {
    /// Amplitude of the clean sine.
    pub amplitude: f64,
    /// Frequency of the clean sine in cycles per sample.
    pub normalized_frequency: f64,
    /// Standard deviation of the reference noise.
    pub noise_deviation: f64,
    /// FIR coefficients of the interference path.
    pub interference_path: Vec<f64>,
}

impl SignalOptions {
    /// Checks every option before any sample is generated.
    pub fn validate(&self) -> AncResult<()> {
        if !self.noise_deviation.is_finite() || self.noise_deviation < 0.0 {
            return Err(AncError::InvalidNoiseDeviation(self.noise_deviation));
        }
        if !self.amplitude.is_finite() {
            return Err(AncError::InvalidSignalOption("amplitude", self.amplitude));
        }
        if !self.normalized_frequency.is_finite() {
            return Err(AncError::InvalidSignalOption(
                "normalized_frequency",
                self.normalized_frequency,
            ));
        }
        if let Some(coeff) = self.interference_path.iter().find(|c| !c.is_finite()) {
            return Err(AncError::InvalidSignalOption("interference_path", *coeff));
        }
        Ok(())
    }
}

impl Default for SignalOptions {
    fn default() -> Self {
        Self {
            amplitude: 0.8,
            normalized_frequency: 0.02,
            noise_deviation: 0.4,
            interference_path: DEFAULT_INTERFERENCE_PATH.to_vec(),
        }
    }
}

/// The input pair for the filter plus the components it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseCancellationSignals {
    /// Reference input, the noise as seen by the reference sensor.
    pub x: Vec<f64>,
    /// Primary input, clean signal plus filtered noise.
    pub d: Vec<f64>,
    /// The clean signal the canceller should recover.
    pub clean: Vec<f64>,
    /// The noise component of `d`.
    pub primary_noise: Vec<f64>,
}

impl NoiseCancellationSignals {
    pub fn generate(num_samples: usize, seed: u64) -> AncResult<Self> {
        Self::from_options(num_samples, seed, &SignalOptions::default())
    }

    pub fn from_options(num_samples: usize, seed: u64, options: &SignalOptions) -> AncResult<Self> {
        if num_samples == 0 {
            return Err(AncError::EmptySignal);
        }
        options.validate()?;
        let noise = Normal::new(0.0, options.noise_deviation)
            .map_err(|_| AncError::InvalidNoiseDeviation(options.noise_deviation))?;
        debug!(
            "generating {} samples, seed {}, {:?}",
            num_samples, seed, options
        );

        let clean: Vec<f64> = (0..num_samples)
            .map(|n| {
                options.amplitude * (2.0 * PI * options.normalized_frequency * n as f64).sin()
            })
            .collect();

        let mut rng = StdRng::seed_from_u64(seed);
        let x: Vec<f64> = (0..num_samples).map(|_| noise.sample(&mut rng)).collect();

        let primary_noise = fir_filter(&options.interference_path, &x);
        let d = clean
            .iter()
            .zip(primary_noise.iter())
            .map(|(s, v)| s + v)
            .collect();

        Ok(NoiseCancellationSignals {
            x,
            d,
            clean,
            primary_noise,
        })
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}
