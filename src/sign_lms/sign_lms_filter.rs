use crate::common::ensure_signal_pair;
use crate::error::{AncError, AncResult};
use crate::logging::trace;

/// Three way sign. Exact zero, including `-0.0`, maps to zero.
pub fn sign(e: f64) -> f64 {
    if e > 0.0 {
        1.0
    } else if e < 0.0 {
        -1.0
    } else {
        0.0
    }
}

fn validate_options(taps: usize, mu: f64) -> AncResult<()> {
    if taps == 0 {
        return Err(AncError::InvalidTapCount(taps));
    }
    if !mu.is_finite() || mu <= 0.0 {
        return Err(AncError::InvalidStepSize(mu));
    }
    Ok(())
}

/// An adaptive [sign-error LMS filter](https://en.wikipedia.org/wiki/Least_mean_squares_filter).
/// Using the same notation as in the linked description.
#[derive(Debug, Clone)]
pub struct SignLmsFilter {
    /// FIR filter coefficients. Coefficient `i` weights the input sample `i` steps back.
    w: Vec<f64>,
    /// Step size
    μ: f64,
}

impl SignLmsFilter {
    pub fn new(taps: usize, mu: f64) -> AncResult<Self> {
        validate_options(taps, mu)?;
        Ok(SignLmsFilter {
            w: vec![0.0; taps],
            μ: mu,
        })
    }

    pub fn weights(&self) -> &[f64] {
        &self.w
    }

    pub fn taps(&self) -> usize {
        self.w.len()
    }

    pub fn mu(&self) -> f64 {
        self.μ
    }

    /// Filters one tap vector, most recent sample first, against the desired
    /// sample `d` and adapts the weights. Returns `(y, e)`.
    ///
    /// The weights only move by `±μ` times the tap input, and not at all when
    /// the error is exactly zero.
    pub fn update(&mut self, tap_input: &[f64], d: f64) -> (f64, f64) {
        assert_eq!(tap_input.len(), self.taps());

        // Compute filter output y = w applied to x.
        let mut y = 0.0;
        for (w, x) in self.w.iter().zip(tap_input.iter()) {
            y += w * x;
        }

        let e = d - y;
        let step = self.μ * sign(e);
        for (w, x) in self.w.iter_mut().zip(tap_input.iter()) {
            *w += step * x;
        }

        (y, e)
    }

    pub fn reset(&mut self) {
        for w in self.w.iter_mut() {
            *w = 0.0;
        }
    }
}

/// The result of filtering a full pair of input sequences.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutput {
    /// Filtered estimate, zero for `n < taps`.
    pub y: Vec<f64>,
    /// Error, i.e the cleaned signal, zero for `n < taps`.
    pub e: Vec<f64>,
    /// Tap weights after the last sample.
    pub weights: Vec<f64>,
}

/// Runs a freshly created sign-error LMS filter over `x` and `d`.
///
/// Only indices `n >= taps` are filtered. Each tap vector is
/// `[x[n], x[n - 1], ..., x[n - taps + 1]]`. Every precondition is checked
/// before the first sample is processed.
pub fn run(x: &[f64], d: &[f64], taps: usize, mu: f64) -> AncResult<FilterOutput> {
    validate_options(taps, mu)?;
    ensure_signal_pair(x, d)?;
    let len = x.len();
    if len <= taps {
        return Err(AncError::TooFewSamples { len, taps });
    }

    let mut filter = SignLmsFilter::new(taps, mu)?;
    let mut y = vec![0.0; len];
    let mut e = vec![0.0; len];
    let mut tap_input = vec![0.0; taps];

    for n in taps..len {
        for (i, value) in tap_input.iter_mut().enumerate() {
            *value = x[n - i];
        }
        let (y_n, e_n) = filter.update(&tap_input, d[n]);
        trace!("n = {}, y = {}, e = {}", n, y_n, e_n);
        y[n] = y_n;
        e[n] = e_n;
    }

    Ok(FilterOutput {
        y,
        e,
        weights: filter.w,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_signals(len: usize) -> (Vec<f64>, Vec<f64>) {
        let x: Vec<f64> = (0..len)
            .map(|i| ((i * 7919) % 101) as f64 / 50.0 - 1.0)
            .collect();
        let d: Vec<f64> = (0..len)
            .map(|i| {
                let past = if i > 0 { x[i - 1] } else { 0.0 };
                0.5 * x[i] - 0.3 * past + 0.1 * (i as f64 * 0.2).sin()
            })
            .collect();
        (x, d)
    }

    #[test]
    fn test_sign() {
        assert_eq!(sign(0.3), 1.0);
        assert_eq!(sign(-1e-300), -1.0);
        assert_eq!(sign(0.0), 0.0);
        assert_eq!(sign(-0.0), 0.0);
    }

    #[test]
    fn test_single_update() {
        let mut filter = SignLmsFilter::new(2, 0.5).unwrap();
        let (y, e) = filter.update(&[1.0, 2.0], 1.0);
        assert_eq!((y, e), (0.0, 1.0));
        assert_eq!(filter.weights(), &[0.5, 1.0]);

        // y = 0.5 * 2 + 1 * -1 = 0
        let (y, e) = filter.update(&[2.0, -1.0], -3.0);
        assert_eq!((y, e), (0.0, -3.0));
        assert_eq!(filter.weights(), &[-0.5, 1.5]);

        filter.reset();
        assert_eq!(filter.weights(), &[0.0, 0.0]);
    }

    #[test]
    fn test_zero_error_leaves_weights_unchanged() {
        let mut filter = SignLmsFilter::new(3, 0.1).unwrap();
        filter.update(&[1.0, -1.0, 0.5], 2.0);
        let before = filter.weights().to_vec();
        // Only the first tap is non-zero, so d == y exactly.
        let tap_input = [2.0, 0.0, 0.0];
        let y: f64 = before[0] * 2.0;
        let (_, e) = filter.update(&tap_input, y);
        assert_eq!(e, 0.0);
        assert_eq!(filter.weights(), &before[..]);
    }

    #[test]
    fn test_prefix_is_zero() {
        let (x, d) = test_signals(64);
        let taps = 8;
        let output = run(&x, &d, taps, 0.02).unwrap();
        for n in 0..taps {
            assert_eq!(output.y[n], 0.0);
            assert_eq!(output.e[n], 0.0);
        }
    }

    #[test]
    fn test_error_is_difference() {
        let (x, d) = test_signals(256);
        let output = run(&x, &d, 8, 0.02).unwrap();
        assert_eq!(output.y.len(), x.len());
        assert_eq!(output.e.len(), x.len());
        assert_eq!(output.weights.len(), 8);
        for n in 8..x.len() {
            assert_eq!(output.e[n], d[n] - output.y[n]);
        }
    }

    #[test]
    fn test_matches_manual_loop() {
        let (x, d) = test_signals(40);
        let taps = 4;
        let mu = 0.05;
        let output = run(&x, &d, taps, mu).unwrap();

        let mut w = vec![0.0; taps];
        for n in taps..x.len() {
            let x_vec: Vec<f64> = (0..taps).map(|i| x[n - i]).collect();
            let mut y = 0.0;
            for k in 0..taps {
                y += w[k] * x_vec[k];
            }
            let e = d[n] - y;
            let s = if e > 0.0 {
                1.0
            } else if e < 0.0 {
                -1.0
            } else {
                0.0
            };
            for k in 0..taps {
                w[k] = w[k] + mu * s * x_vec[k];
            }
            assert_eq!(output.y[n], y);
            assert_eq!(output.e[n], e);
        }
        assert_eq!(output.weights, w);
    }

    #[test]
    fn test_silent_primary_input_never_adapts() {
        let x = vec![0.0; 32];
        let d = vec![0.0; 32];
        let output = run(&x, &d, 4, 0.1).unwrap();
        assert!(output.weights.iter().all(|w| *w == 0.0));
        assert!(output.e.iter().all(|e| *e == 0.0));
    }

    #[test]
    fn test_deterministic() {
        let (x, d) = test_signals(512);
        let first = run(&x, &d, 8, 0.02).unwrap();
        let second = run(&x, &d, 8, 0.02).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_preconditions() {
        let (x, d) = test_signals(16);
        assert!(matches!(
            run(&x, &d[..15], 4, 0.1),
            Err(AncError::LengthMismatch { x: 16, d: 15 })
        ));
        assert!(matches!(
            run(&x, &d, 0, 0.1),
            Err(AncError::InvalidTapCount(0))
        ));
        assert!(matches!(
            run(&x, &d, 4, 0.0),
            Err(AncError::InvalidStepSize(_))
        ));
        assert!(matches!(
            run(&x, &d, 4, -0.1),
            Err(AncError::InvalidStepSize(_))
        ));
        assert!(matches!(
            run(&x, &d, 16, 0.1),
            Err(AncError::TooFewSamples { len: 16, taps: 16 })
        ));
        let mut bad = x.clone();
        bad[3] = f64::INFINITY;
        assert!(matches!(
            run(&bad, &d, 4, 0.1),
            Err(AncError::NonFiniteSample { index: 3, .. })
        ));
    }
}
