//! The expected response of the hardware block.
//!
//! The stimulus table carries the raw `x`/`d` inputs, never the filter output.
//! The hardware computes its own error signal from that stimulus, which is then
//! compared index for index against the error stored here, for `n >= taps`.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::sign_lms::FilterOutput;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationOracle {
    pub taps: usize,
    pub mu: f64,
    pub scale: f64,
    /// The first index with a computed output. Equal to `taps`.
    pub first_valid_index: usize,
    /// e(n), the cleaned signal.
    pub error: Vec<f64>,
    /// y(n), the filter's estimate of the noise in d(n).
    pub output: Vec<f64>,
    pub final_weights: Vec<f64>,
}

impl VerificationOracle {
    pub fn new(filter: &FilterOutput, mu: f64, scale: f64) -> Self {
        let taps = filter.weights.len();
        VerificationOracle {
            taps,
            mu,
            scale,
            first_valid_index: taps,
            error: filter.e.clone(),
            output: filter.y.clone(),
            final_weights: filter.weights.clone(),
        }
    }

    /// The part of the error signal a hardware run is checked against.
    pub fn valid_error(&self) -> &[f64] {
        &self.error[self.first_valid_index.min(self.error.len())..]
    }

    pub fn write_json<W: Write>(&self, writer: W) -> serde_json::Result<()> {
        serde_json::to_writer_pretty(writer, self)
    }
}
