use thiserror::Error;

/// Identifies which input sequence a sample belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// The reference input, x(n).
    Reference,
    /// The primary input, d(n).
    Primary,
}

impl core::fmt::Display for Signal {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Signal::Reference => write!(f, "x"),
            Signal::Primary => write!(f, "d"),
        }
    }
}

#[derive(Error, Debug)]
pub enum AncError {
    #[error("input lengths differ: len(x) = {x}, len(d) = {d}")]
    LengthMismatch { x: usize, d: usize },
    #[error("tap count must be at least 1, got {0}")]
    InvalidTapCount(usize),
    #[error("step size must be positive and finite, got {0}")]
    InvalidStepSize(f64),
    #[error("need more samples than taps: {len} samples, {taps} taps")]
    TooFewSamples { len: usize, taps: usize },
    #[error("non-finite sample {signal}[{index}]")]
    NonFiniteSample { signal: Signal, index: usize },
    #[error("cannot quantize non-finite value {0}")]
    NonFiniteValue(f64),
    #[error("quantization scale must be positive and finite, got {0}")]
    InvalidScale(f64),
    #[error("a signed 16 bit sample holds at most 15 fraction bits, got {0}")]
    InvalidFractionBits(u32),
    #[error("noise deviation must be non-negative and finite, got {0}")]
    InvalidNoiseDeviation(f64),
    #[error("signal option {0} must be finite, got {1}")]
    InvalidSignalOption(&'static str, f64),
    #[error("signal must contain at least one sample")]
    EmptySignal,
    #[error("{len} words do not fit a {width} bit address")]
    AddressWidth { len: usize, width: u32 },
    #[error("invalid module name {0:?}")]
    InvalidModuleName(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AncResult<T> = Result<T, AncError>;
