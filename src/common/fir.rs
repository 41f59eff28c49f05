/// Applies a causal [FIR](https://en.wikipedia.org/wiki/Finite_impulse_response) filter
/// with coefficients `b` to `input`, assuming zero initial state.
///
/// `output[n] = b[0] * input[n] + b[1] * input[n - 1] + ...`, with the sum running
/// from the first coefficient to the last. The output has the same length as the input.
pub fn fir_filter(b: &[f64], input: &[f64]) -> Vec<f64> {
    (0..input.len())
        .map(|n| {
            let mut acc = 0.0;
            for (k, coeff) in b.iter().enumerate().take(n + 1) {
                acc += coeff * input[n - k];
            }
            acc
        })
        .collect()
}
