//! Parameter types configuring the descriptor pipeline.
//!
//! Defaults follow the common HOG setup (9 bins, 8×8-pixel cells, 3×3-cell
//! blocks, L1 norm). All fields are plain data; validation happens when a
//! [`crate::HogDescriptor`] is constructed.

use serde::{Deserialize, Serialize};

/// Block normalization law applied to every assembled block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Normalization {
    /// `v / (sum(|v|) + eps)`
    L1,
    /// L1 followed by element-wise square root.
    L1Sqrt,
    /// `v / sqrt(sum(v^2) + eps^2)`
    L2,
    /// L2, clip to `[0, 0.2]`, then L2 again.
    L2Hys,
}

/// Descriptor-wide parameters, immutable once a descriptor is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HogParams {
    /// Number of orientation bins partitioning the axial (mod-π) gradient
    /// direction. Must satisfy `orientations * 2 <= u8::MAX`: vote indices
    /// are staged in a `u8` buffer over the doubled range.
    pub orientations: usize,
    /// Cell extent in pixels as `(width, height)`.
    pub cell_size: (usize, usize),
    /// Block extent in cells as `(width, height)`.
    pub block_size: (usize, usize),
    /// Block normalization law.
    pub normalization: Normalization,
    /// Apply square-root compression to pixel intensities before the
    /// gradient pass.
    pub transform_sqrt: bool,
}

impl Default for HogParams {
    fn default() -> Self {
        Self {
            orientations: 9,
            cell_size: (8, 8),
            block_size: (3, 3),
            normalization: Normalization::L1,
            transform_sqrt: false,
        }
    }
}

impl HogParams {
    /// Convenience constructor for square cells and blocks.
    pub fn square(
        orientations: usize,
        cell_span: usize,
        block_span: usize,
        normalization: Normalization,
        transform_sqrt: bool,
    ) -> Self {
        Self {
            orientations,
            cell_size: (cell_span, cell_span),
            block_size: (block_span, block_span),
            normalization,
            transform_sqrt,
        }
    }

    /// Checks the construction invariants, panicking on violation.
    ///
    /// Called by [`crate::HogDescriptor::new`]; invalid configuration is a
    /// programmer error caught at construction time, never during compute.
    pub(crate) fn validate(&self) {
        assert!(
            self.orientations >= 1,
            "orientations must be at least 1, got {}",
            self.orientations
        );
        assert!(
            self.orientations * 2 <= u8::MAX as usize,
            "orientations * 2 must fit a u8 vote index, got {}",
            self.orientations
        );
        assert!(
            self.cell_size.0 >= 1 && self.cell_size.1 >= 1,
            "cell_size must be at least 1x1, got {:?}",
            self.cell_size
        );
        assert!(
            self.block_size.0 >= 1 && self.block_size.1 >= 1,
            "block_size must be at least 1x1, got {:?}",
            self.block_size
        );
    }
}
