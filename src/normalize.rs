//! Block assembly and normalization.
//!
//! A block is a `block_h × block_w` window of adjacent cell histograms,
//! slid over the cell grid with stride one, copied out flat and normalized
//! independently. Overlapping blocks read the same cells, so the copy is
//! mandatory: normalization must never write back into the shared grid.

use crate::params::Normalization;

/// Additive constant guarding the norms against all-zero blocks. Must stay at
/// exactly `1e-5` for numeric parity with the scikit-image reference.
pub const NORM_EPS: f64 = 1e-5;

/// Copies every sliding block out of the cell histogram grid into `out` and
/// normalizes it in place.
///
/// `histograms` is the flattened `[num_cells_y, num_cells_x, orientations]`
/// grid; `out` receives `[num_blocks_y, num_blocks_x, block_h, block_w,
/// orientations]` flattened row-major with no padding.
#[allow(clippy::too_many_arguments)]
pub fn normalize_blocks_into(
    histograms: &[f64],
    orientations: usize,
    num_cells_x: usize,
    block_size: (usize, usize),
    num_blocks: (usize, usize),
    method: Normalization,
    out: &mut [f64],
) {
    let (block_w, block_h) = block_size;
    let (num_blocks_x, num_blocks_y) = num_blocks;
    let block_len = block_h * block_w * orientations;
    let row_len = block_w * orientations;
    debug_assert!(out.len() >= num_blocks_y * num_blocks_x * block_len);

    let out = &mut out[..num_blocks_y * num_blocks_x * block_len];
    for (block_idx, block) in out.chunks_exact_mut(block_len).enumerate() {
        let by = block_idx / num_blocks_x;
        let bx = block_idx % num_blocks_x;

        for r in 0..block_h {
            let src = ((by + r) * num_cells_x + bx) * orientations;
            block[r * row_len..(r + 1) * row_len]
                .copy_from_slice(&histograms[src..src + row_len]);
        }

        apply_norm(block, method);
    }
}

/// Normalizes one flattened block in place.
pub fn apply_norm(block: &mut [f64], method: Normalization) {
    match method {
        Normalization::L1 => {
            let sum = l1_sum(block) + NORM_EPS;
            for v in block.iter_mut() {
                *v /= sum;
            }
        }
        Normalization::L1Sqrt => {
            let sum = l1_sum(block) + NORM_EPS;
            // Histogram entries are sums of magnitudes, hence non-negative.
            for v in block.iter_mut() {
                *v = (*v / sum).sqrt();
            }
        }
        Normalization::L2 => {
            let norm = l2_norm(block);
            for v in block.iter_mut() {
                *v /= norm;
            }
        }
        Normalization::L2Hys => {
            let norm = l2_norm(block);
            for v in block.iter_mut() {
                *v = (*v / norm).clamp(0.0, 0.2);
            }
            let renorm = l2_norm(block);
            for v in block.iter_mut() {
                *v /= renorm;
            }
        }
    }
}

fn l1_sum(block: &[f64]) -> f64 {
    block.iter().map(|v| v.abs()).sum()
}

fn l2_norm(block: &[f64]) -> f64 {
    (block.iter().map(|v| v * v).sum::<f64>() + NORM_EPS * NORM_EPS).sqrt()
}
