//! Synthetic images shared by the integration tests.

/// Deterministic `|sin(i)|` image in row-major scan order, the pattern the
/// reference fixtures were generated from.
pub fn sin_image(width: usize, height: usize) -> Vec<f64> {
    (0..width * height).map(|i| (i as f64).sin().abs()).collect()
}

/// Deterministic pseudo-random 8-bit image (xorshift64, no `rand` needed).
pub fn noise_image_u8(width: usize, height: usize, seed: u64) -> Vec<u8> {
    let mut state = seed.max(1);
    (0..width * height)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state >> 24) as u8
        })
        .collect()
}

/// Largest absolute element-wise difference between two vectors.
pub fn max_abs_diff(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "vectors must have equal length");
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}
