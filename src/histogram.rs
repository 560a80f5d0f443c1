//! Cell histogram accumulation: the weighted orientation vote.
//!
//! Every pixel votes its gradient magnitude into the orientation histogram of
//! the cell that owns it. Pixels in trailing partial cells (image extent not
//! a multiple of the cell extent) are dropped, matching the floor-division
//! cell grid of [`crate::descriptor::HogDescriptor::descriptor_size`].

/// Accumulates per-pixel magnitudes into the cell histogram grid.
///
/// `histograms` is the flattened `[num_cells_y, num_cells_x, orientations]`
/// grid and must be zeroed by the caller. After accumulation every bin is
/// divided by the cell pixel area (arithmetic mean rather than raw sum); the
/// block norms divide out any uniform positive scalar, so this only matters
/// for bit parity with the scikit-image reference, where the same scaling
/// feeds the `eps` term.
#[allow(clippy::too_many_arguments)]
pub fn accumulate_cells_into(
    magnitude: &[f64],
    bins: &[u8],
    width: usize,
    height: usize,
    cell_size: (usize, usize),
    orientations: usize,
    num_cells: (usize, usize),
    histograms: &mut [f64],
) {
    let (cell_w, cell_h) = cell_size;
    let (num_cells_x, num_cells_y) = num_cells;
    let n = width * height;
    debug_assert!(magnitude.len() >= n && bins.len() >= n);
    debug_assert!(histograms.len() >= num_cells_y * num_cells_x * orientations);

    for y in 0..height {
        let cell_y = y / cell_h;
        if cell_y >= num_cells_y {
            break; // rows below the last full cell row never vote
        }
        let row = y * width;
        let cell_row_head = cell_y * num_cells_x * orientations;
        for x in 0..width {
            let cell_x = x / cell_w;
            if cell_x >= num_cells_x {
                break;
            }
            let i = row + x;
            histograms[cell_row_head + cell_x * orientations + bins[i] as usize] += magnitude[i];
        }
    }

    let area = (cell_w * cell_h) as f64;
    for v in &mut histograms[..num_cells_y * num_cells_x * orientations] {
        *v /= area;
    }
}
