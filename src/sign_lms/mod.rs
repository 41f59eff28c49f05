//! [Sign-error least mean squares](https://en.wikipedia.org/wiki/Least_mean_squares_filter)
//! adaptive filter, matching the update rule of the hardware noise canceller:
//!
//! ```text
//! y(n) = w · x(n)
//! e(n) = d(n) - y(n)
//! w    = w + μ sgn(e(n)) x(n)
//! ```
//!
//! where `x(n) = [x[n], x[n - 1], ..., x[n - N + 1]]`. Only the sign of the error
//! is used, so the hardware needs no multiplier in the update path.
//!
//! # Examples
//! ## Noise cancellation
//!
//! The primary input is the reference noise passed through a short FIR path.
//! The filter learns that path, so the error goes towards zero.
//!
//! ```
//! use anc_golden::common::{fir_filter, F64SliceExt};
//! use anc_golden::sign_lms;
//! use rand::{rngs::StdRng, Rng, SeedableRng};
//!
//! // Generate noise signal
//! let sample_count = 20000;
//! let mut rng = StdRng::seed_from_u64(123);
//! let x: Vec<f64> = (0..sample_count).map(|_| rng.gen_range(-1.0..=1.0)).collect();
//! let d = fir_filter(&[0.5, -0.3, 0.1], &x);
//!
//! let output = sign_lms::run(&x, &d, 4, 0.001).unwrap();
//!
//! // The residual at the end is a small fraction of the primary input.
//! let tail = sample_count - 1000;
//! assert!(output.e[tail..].rms_level() < 0.2 * d[tail..].rms_level());
//! assert!((output.weights[0] - 0.5).abs() < 0.05);
//! ```

mod sign_lms_filter;

pub use sign_lms_filter::{run, sign, FilterOutput, SignLmsFilter};
