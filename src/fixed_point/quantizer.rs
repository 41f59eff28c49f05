use crate::error::{AncError, AncResult, Signal};

/// The scale used by the hardware block: Q8.8, i.e 8 fractional bits.
pub const DEFAULT_SCALE: f64 = 256.0;

/// Returns the scale factor `2^fraction_bits`.
pub fn scale_for_fraction_bits(fraction_bits: u32) -> f64 {
    2f64.powi(fraction_bits as i32)
}

/// A signed 16 bit two's complement fixed point sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct QuantizedSample(i16);

impl QuantizedSample {
    pub fn new(value: i16) -> Self {
        QuantizedSample(value)
    }

    pub fn from_bits(bits: u16) -> Self {
        QuantizedSample(bits as i16)
    }

    /// The signed integer value.
    pub fn value(&self) -> i16 {
        self.0
    }

    /// The 16 bit two's complement pattern, i.e the value masked with `0xFFFF`.
    pub fn bits(&self) -> u16 {
        self.0 as u16
    }

    /// The real value this sample represents at a given scale.
    pub fn to_f64(&self, scale: f64) -> f64 {
        f64::from(self.0) / scale
    }
}

fn validate_scale(scale: f64) -> AncResult<()> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(AncError::InvalidScale(scale));
    }
    Ok(())
}

/// Truncates `value * scale` toward zero and saturates the result to the
/// signed 16 bit range.
///
/// Rounding is truncation, not round to nearest. Saturation is applied to the
/// truncated value, before it is narrowed to 16 bits, so out of range values
/// never wrap.
pub fn quantize(value: f64, scale: f64) -> AncResult<QuantizedSample> {
    validate_scale(scale)?;
    if !value.is_finite() {
        return Err(AncError::NonFiniteValue(value));
    }
    Ok(saturate(value, scale))
}

/// Quantizes a whole sequence, reporting the position of the first
/// non-finite sample as belonging to `signal`.
pub fn quantize_all(
    samples: &[f64],
    scale: f64,
    signal: Signal,
) -> AncResult<Vec<QuantizedSample>> {
    validate_scale(scale)?;
    samples
        .iter()
        .enumerate()
        .map(|(index, value)| {
            if value.is_finite() {
                Ok(saturate(*value, scale))
            } else {
                Err(AncError::NonFiniteSample { signal, index })
            }
        })
        .collect()
}

// A finite product that overflows to +-inf still saturates here.
fn saturate(value: f64, scale: f64) -> QuantizedSample {
    let raw = (value * scale).trunc();
    let clamped = if raw > f64::from(i16::MAX) {
        i16::MAX
    } else if raw < f64::from(i16::MIN) {
        i16::MIN
    } else {
        raw as i16
    };
    QuantizedSample(clamped)
}
