use core::fmt;

use crate::common::ensure_signal_pair;
use crate::error::{AncResult, Signal};
use crate::fixed_point::quantizer::{quantize_all, QuantizedSample};

/// One lookup table word, laid out as `{d[15:0], x[15:0]}` from high to low bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PackedWord(u32);

impl PackedWord {
    pub fn from_samples(d: QuantizedSample, x: QuantizedSample) -> Self {
        PackedWord((u32::from(d.bits()) << 16) | u32::from(x.bits()))
    }

    pub fn from_value(value: u32) -> Self {
        PackedWord(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// The upper 16 bits, holding the quantized primary input.
    pub fn d_bits(&self) -> u16 {
        (self.0 >> 16) as u16
    }

    /// The lower 16 bits, holding the quantized reference input.
    pub fn x_bits(&self) -> u16 {
        (self.0 & 0xFFFF) as u16
    }

    pub fn d_sample(&self) -> QuantizedSample {
        QuantizedSample::from_bits(self.d_bits())
    }

    pub fn x_sample(&self) -> QuantizedSample {
        QuantizedSample::from_bits(self.x_bits())
    }
}

impl fmt::Display for PackedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

/// Quantizes `x` and `d` and packs them into one word per index, in address order.
///
/// Inputs are checked in full before anything is packed, so a failure never
/// leaves a partial table behind.
pub fn pack(x: &[f64], d: &[f64], scale: f64) -> AncResult<Vec<PackedWord>> {
    ensure_signal_pair(x, d)?;
    let x_quantized = quantize_all(x, scale, Signal::Reference)?;
    let d_quantized = quantize_all(d, scale, Signal::Primary)?;
    Ok(d_quantized
        .iter()
        .zip(x_quantized.iter())
        .map(|(d, x)| PackedWord::from_samples(*d, *x))
        .collect())
}
