//! Caller-owned scratch memory for repeated descriptor computation.
//!
//! The pipeline reuses one float arena across its stages, following the
//! lifetime windows of the intermediates:
//!
//! 1. `[staged pixels, grad_y, grad_x]`
//! 2. `[magnitude,     grad_y, grad_x]`
//! 3. `[magnitude,     histograms ...]`
//!
//! so the arena needs `max(3*g, g + histograms_len)` floats where
//! `g = width * height`, plus `g` bytes for the `u8` orientation votes.
//! Buffers grow on demand and are fully overwritten on every call; no state
//! survives between calls.

use crate::layout::HogLayout;

/// Minimum scratch lengths for one `(width, height, params)` combination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkspaceSize {
    /// Required length of the `f64` arena.
    pub floats: usize,
    /// Required length of the `u8` vote arena.
    pub bins: usize,
}

impl WorkspaceSize {
    pub(crate) fn for_layout(width: usize, height: usize, layout: &HogLayout) -> Self {
        let g = width * height;
        Self {
            floats: (3 * g).max(g + layout.histograms_len),
            bins: g,
        }
    }
}

/// Reusable scratch buffers for [`crate::HogDescriptor`] computations.
///
/// A workspace is not shared between concurrent callers: for multi-threaded
/// use, give each thread its own workspace (the descriptor itself is
/// read-only and freely shared).
#[derive(Clone, Debug, Default)]
pub struct HogWorkspace {
    pub(crate) floats: Vec<f64>,
    pub(crate) bins: Vec<u8>,
}

impl HogWorkspace {
    /// Creates an empty workspace; buffers are allocated on first use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a workspace pre-sized for `width × height` images under the
    /// descriptor's configuration, so the first compute call allocates
    /// nothing.
    pub fn for_image(descriptor: &crate::HogDescriptor, width: usize, height: usize) -> Self {
        let size = descriptor.workspace_size(width, height);
        Self {
            floats: vec![0.0; size.floats],
            bins: vec![0u8; size.bins],
        }
    }

    /// Grows the buffers to `size` if they are smaller. Contents are
    /// unspecified afterwards; every stage overwrites its region.
    pub(crate) fn ensure(&mut self, size: WorkspaceSize) {
        if self.floats.len() < size.floats {
            log::debug!(
                "hog workspace: growing float arena {} -> {}",
                self.floats.len(),
                size.floats
            );
            self.floats.resize(size.floats, 0.0);
        }
        if self.bins.len() < size.bins {
            self.bins.resize(size.bins, 0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::HogParams;

    #[test]
    fn size_covers_gradient_and_histogram_phases() {
        // 8x8 px, 2x2 cells, 9 bins: histograms (144) dominate 2*g (128).
        let params = HogParams {
            cell_size: (2, 2),
            block_size: (2, 2),
            ..Default::default()
        };
        let layout = HogLayout::new(8, 8, &params);
        let size = WorkspaceSize::for_layout(8, 8, &layout);
        assert_eq!(size.bins, 64);
        assert_eq!(size.floats, 64 + 144);

        // 64x64 px, 8x8 cells: the three gradient buffers dominate.
        let params = HogParams::default();
        let layout = HogLayout::new(64, 64, &params);
        let size = WorkspaceSize::for_layout(64, 64, &layout);
        assert_eq!(size.floats, 3 * 64 * 64);
    }

    #[test]
    fn ensure_grows_but_never_shrinks() {
        let mut ws = HogWorkspace::new();
        ws.ensure(WorkspaceSize { floats: 10, bins: 4 });
        assert_eq!(ws.floats.len(), 10);
        ws.ensure(WorkspaceSize { floats: 5, bins: 2 });
        assert_eq!(ws.floats.len(), 10);
        assert_eq!(ws.bins.len(), 4);
    }
}
