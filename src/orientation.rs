//! Per-pixel gradient orientation binning and magnitude.
//!
//! Gradient direction is axial: a gradient and its negation describe the same
//! edge, so `atan2(gy, gx)` in `(-π, π]` is mapped to the doubled range
//! `[0, 2*orientations]` and folded modulo `orientations`. The raw doubled
//! index is truncated into a `u8` vote buffer before folding, which is why
//! the configuration requires `orientations * 2 <= u8::MAX`.

use std::f64::consts::PI;

/// Computes the per-pixel orientation vote index and gradient magnitude.
///
/// `bins[i]` receives `floor(atan2(gy, gx) * orientations/π + orientations)`
/// folded into `[0, orientations)`; `magnitude[i]` receives
/// `sqrt(gx^2 + gy^2)`.
pub fn bin_and_magnitude_into(
    grad_x: &[f64],
    grad_y: &[f64],
    orientations: usize,
    bins: &mut [u8],
    magnitude: &mut [f64],
) {
    let n = grad_x.len();
    debug_assert_eq!(grad_y.len(), n);
    debug_assert!(bins.len() >= n && magnitude.len() >= n);
    debug_assert!(orientations >= 1 && orientations * 2 <= u8::MAX as usize);

    let scale = orientations as f64 / PI;
    let offset = orientations as f64;
    let fold = orientations as u8;

    for i in 0..n {
        let dx = grad_x[i];
        let dy = grad_y[i];

        // (-π, π] -> [0, 2*orientations]; never negative, so truncation is a
        // plain floor. atan2 returning exactly π lands on 2*orientations and
        // is handled by the fold loop below.
        let raw = dy.atan2(dx) * scale + offset;
        let mut bin = raw as u8;
        while bin >= fold {
            bin -= fold;
        }
        bins[i] = bin;

        magnitude[i] = (dx * dx + dy * dy).sqrt();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(dx: f64, dy: f64, orientations: usize) -> (u8, f64) {
        let mut bins = [0u8; 1];
        let mut mag = [0.0f64; 1];
        bin_and_magnitude_into(&[dx], &[dy], orientations, &mut bins, &mut mag);
        (bins[0], mag[0])
    }

    #[test]
    fn opposite_gradients_share_a_bin() {
        for &(dx, dy) in &[(1.0, 0.3), (-0.7, 2.1), (0.0, 1.0), (3.0, -0.2)] {
            let (bin_pos, _) = single(dx, dy, 9);
            let (bin_neg, _) = single(-dx, -dy, 9);
            assert_eq!(bin_pos, bin_neg, "axial symmetry for ({dx},{dy})");
        }
    }

    #[test]
    fn bins_stay_in_range() {
        let orientations = 9;
        for k in 0..64 {
            let angle = -PI + (k as f64 + 0.5) * (2.0 * PI / 64.0);
            let (bin, _) = single(angle.cos(), angle.sin(), orientations);
            assert!((bin as usize) < orientations, "bin {bin} for angle {angle}");
        }
    }

    #[test]
    fn exactly_pi_folds_to_bin_zero() {
        // atan2(0, -1) = π -> raw = 2*orientations -> folds to 0.
        let (bin, _) = single(-1.0, 0.0, 9);
        assert_eq!(bin, 0);
    }

    #[test]
    fn zero_gradient_votes_bin_zero_with_zero_weight() {
        let (bin, mag) = single(0.0, 0.0, 9);
        assert_eq!(bin, 0);
        assert_eq!(mag, 0.0);
    }

    #[test]
    fn magnitude_is_euclidean() {
        let (_, mag) = single(3.0, 4.0, 9);
        assert!((mag - 5.0).abs() < 1e-12);
    }

    #[test]
    fn horizontal_and_vertical_edges_land_in_distinct_bins() {
        let (horizontal, _) = single(0.0, 1.0, 9); // gradient along y
        let (vertical, _) = single(1.0, 0.0, 9); // gradient along x
        assert_ne!(horizontal, vertical);
    }
}
