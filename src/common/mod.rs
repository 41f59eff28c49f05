//! Common algorithms and utilities.

mod f64_slice_ext;
mod fir;

pub use f64_slice_ext::F64SliceExt;
pub use fir::fir_filter;

use crate::error::{AncError, AncResult, Signal};

/// Fails on the first NaN or infinite sample.
pub fn ensure_finite(samples: &[f64], signal: Signal) -> AncResult<()> {
    match samples.iter().position(|s| !s.is_finite()) {
        Some(index) => Err(AncError::NonFiniteSample { signal, index }),
        None => Ok(()),
    }
}

/// Checks that `x` and `d` are index aligned and free of non-finite samples.
pub fn ensure_signal_pair(x: &[f64], d: &[f64]) -> AncResult<()> {
    if x.len() != d.len() {
        return Err(AncError::LengthMismatch {
            x: x.len(),
            d: d.len(),
        });
    }
    ensure_finite(x, Signal::Reference)?;
    ensure_finite(d, Signal::Primary)
}
