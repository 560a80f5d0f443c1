//! Size arithmetic shared by every pipeline stage.
//!
//! All grid dimensions derive from `(width, height, params)` alone, so the
//! exact descriptor and workspace lengths are known before any buffer is
//! touched. Trailing pixels that do not fill a whole cell, and trailing cells
//! that do not fill a whole block, are discarded (floor division and
//! saturating subtraction respectively).

use crate::params::HogParams;

/// Derived geometry for one `(width, height, params)` combination.
#[derive(Clone, Copy, Debug)]
pub(crate) struct HogLayout {
    pub num_cells_x: usize,
    pub num_cells_y: usize,
    pub num_blocks_x: usize,
    pub num_blocks_y: usize,
    /// Flattened length of one block: `block_h * block_w * orientations`.
    pub block_len: usize,
    /// Flattened length of the cell histogram grid.
    pub histograms_len: usize,
    /// Total output feature-vector length.
    pub descriptor_len: usize,
}

impl HogLayout {
    pub(crate) fn new(width: usize, height: usize, params: &HogParams) -> Self {
        let (cell_w, cell_h) = params.cell_size;
        let (block_w, block_h) = params.block_size;

        let num_cells_x = width / cell_w;
        let num_cells_y = height / cell_h;

        // Stride-1 sliding window; too few cells means zero blocks, which is
        // a valid empty-descriptor geometry rather than an error.
        let num_blocks_x = (num_cells_x + 1).saturating_sub(block_w);
        let num_blocks_y = (num_cells_y + 1).saturating_sub(block_h);

        let block_len = block_h * block_w * params.orientations;
        let histograms_len = num_cells_y * num_cells_x * params.orientations;
        let descriptor_len = num_blocks_y * num_blocks_x * block_len;

        Self {
            num_cells_x,
            num_cells_y,
            num_blocks_x,
            num_blocks_y,
            block_len,
            histograms_len,
            descriptor_len,
        }
    }
}
