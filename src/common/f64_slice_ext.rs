//! Level measurements on `[f64]` sequences.

/// Level measurements used for the convergence figures.
pub trait F64SliceExt {
    /// Returns the [root mean square](https://en.wikipedia.org/wiki/Root_mean_square)
    /// of the sequence, or 0 if it is empty.
    fn rms_level(&self) -> f64;
    /// Returns [`rms_level`](F64SliceExt::rms_level) in dB full scale, where a level
    /// of 1 is 0 dB. An all zero sequence gives negative infinity.
    fn rms_level_db(&self) -> f64;
}

impl F64SliceExt for [f64] {
    fn rms_level(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let energy: f64 = self.iter().map(|v| v * v).sum();
        (energy / self.len() as f64).sqrt()
    }

    fn rms_level_db(&self) -> f64 {
        20.0 * self.rms_level().log10()
    }
}
