//! A bit-exact golden reference model for a hardware adaptive noise cancellation
//! block built around a [sign-error LMS](https://en.wikipedia.org/wiki/Least_mean_squares_filter) filter.
//!
//! The model produces two things from one pair of input sequences, a reference
//! input `x` and a primary input `d`:
//! * The stimulus table. `x` and `d` are quantized to signed 16 bit fixed point
//! (truncating, saturating) and packed into one 32 bit word per sample, `d` in the
//! upper half word. This is the ROM content the hardware testbench reads.
//! * The verification oracle. The floating point sign-error LMS filter is run over
//! `x` and `d`, and its error signal `e` is what the hardware output is checked against.
//!
//! The two paths share only their inputs. The table never contains filter output.
//!
//! # Examples
//!
//! ```
//! use anc_golden::config::GoldenModelConfig;
//! use anc_golden::golden_model::GoldenModel;
//!
//! let model = GoldenModel::new(GoldenModelConfig::default()).unwrap();
//! let run = model.run().unwrap();
//!
//! assert_eq!(run.table.len(), 1024);
//! // Nothing is computed before the filter has seen N samples.
//! assert!(run.filter.e[..8].iter().all(|e| *e == 0.0));
//! println!("cleaned signal: {:?}", run.oracle().valid_error());
//! ```

pub mod common;
pub mod config;
pub mod error;
pub mod fixed_point;
pub mod golden_model;
pub mod logging;
pub mod oracle;
pub mod rom;
pub mod sign_lms;
pub mod signal;

pub use error::{AncError, AncResult};
