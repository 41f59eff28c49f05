//! Conversion of real valued samples to the signed 16 bit
//! [fixed point](https://en.wikipedia.org/wiki/Fixed-point_arithmetic) format consumed
//! by the hardware, and packing of sample pairs into 32 bit lookup table words.
//!
//! Quantization truncates toward zero and saturates to `[-32768, 32767]`.
//!
//! # Examples
//!
//! ```
//! use anc_golden::fixed_point::{pack, quantize, DEFAULT_SCALE};
//!
//! // 128 * 256 overflows the positive range and saturates.
//! assert_eq!(quantize(128.0, DEFAULT_SCALE).unwrap().value(), 32767);
//! assert_eq!(quantize(-128.1, DEFAULT_SCALE).unwrap().value(), -32768);
//!
//! // d goes to the upper half word, x to the lower.
//! let table = pack(&[0.5], &[-0.25], DEFAULT_SCALE).unwrap();
//! assert_eq!(table[0].value(), 0xFFC0_0080);
//! ```

mod packer;
mod quantizer;

pub use packer::{pack, PackedWord};
pub use quantizer::{quantize, quantize_all, scale_for_fraction_bits, QuantizedSample, DEFAULT_SCALE};
