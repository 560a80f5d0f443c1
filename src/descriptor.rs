//! Public entry points orchestrating the four pipeline stages.
//!
//! A [`HogDescriptor`] is an immutable configuration; every compute call is
//! independent and reentrant. The stages run strictly forward over one scratch
//! arena (see [`crate::workspace`]):
//!
//! 1. centered-difference gradients,
//! 2. orientation vote index + magnitude per pixel,
//! 3. cell histogram accumulation,
//! 4. sliding-block copy + normalization into the output vector.

use log::debug;

use crate::gradient;
use crate::histogram;
use crate::layout::HogLayout;
use crate::normalize;
use crate::orientation;
use crate::params::HogParams;
use crate::workspace::{HogWorkspace, WorkspaceSize};

/// Computes HOG feature vectors for grayscale images under one fixed
/// configuration.
///
/// Safe to share read-only across threads; concurrent callers must each bring
/// their own [`HogWorkspace`] and output buffer.
#[derive(Clone, Debug)]
pub struct HogDescriptor {
    params: HogParams,
}

/// Input pixel buffer, either pre-widened floats or raw 8-bit samples.
#[derive(Clone, Copy)]
enum Pixels<'a> {
    F64(&'a [f64]),
    U8(&'a [u8]),
}

impl Pixels<'_> {
    fn len(&self) -> usize {
        match self {
            Pixels::F64(d) => d.len(),
            Pixels::U8(d) => d.len(),
        }
    }
}

impl Default for HogDescriptor {
    fn default() -> Self {
        Self::new(HogParams::default())
    }
}

impl HogDescriptor {
    /// Builds a descriptor, validating the configuration.
    ///
    /// # Panics
    /// If `orientations` is zero or cannot be doubled in a `u8`, or if any
    /// cell/block dimension is zero.
    pub fn new(params: HogParams) -> Self {
        params.validate();
        Self { params }
    }

    /// The immutable configuration.
    pub fn params(&self) -> &HogParams {
        &self.params
    }

    /// Exact output length for a `width × height` image.
    ///
    /// Zero when the image is too small for one full cell or one full block;
    /// computing on such an image yields an empty vector, not an error.
    pub fn descriptor_size(&self, width: usize, height: usize) -> usize {
        HogLayout::new(width, height, &self.params).descriptor_len
    }

    /// Minimum scratch lengths the pipeline needs for a `width × height`
    /// image. [`HogWorkspace`] sizes itself by this contract.
    pub fn workspace_size(&self, width: usize, height: usize) -> WorkspaceSize {
        let layout = HogLayout::new(width, height, &self.params);
        WorkspaceSize::for_layout(width, height, &layout)
    }

    /// Computes the feature vector for a row-major float image, allocating
    /// the output and scratch buffers.
    ///
    /// # Panics
    /// If `data.len() != width * height`.
    pub fn compute(&self, data: &[f64], width: usize, height: usize) -> Vec<f64> {
        let mut out = vec![0.0; self.descriptor_size(width, height)];
        let mut workspace = HogWorkspace::new();
        self.compute_impl(Pixels::F64(data), width, height, &mut out, &mut workspace);
        out
    }

    /// Computes the feature vector for a row-major 8-bit image.
    ///
    /// Samples are widened to `f64` as-is (no implicit `/255`); the block
    /// norms make the result invariant to uniform intensity scale anyway.
    ///
    /// # Panics
    /// If `data.len() != width * height`.
    pub fn compute_u8(&self, data: &[u8], width: usize, height: usize) -> Vec<f64> {
        let mut out = vec![0.0; self.descriptor_size(width, height)];
        let mut workspace = HogWorkspace::new();
        self.compute_impl(Pixels::U8(data), width, height, &mut out, &mut workspace);
        out
    }

    /// Zero-allocation variant of [`Self::compute`] writing into a
    /// caller-owned buffer and reusing a caller-owned workspace.
    ///
    /// The first `descriptor_size(width, height)` elements of `descriptor`
    /// are overwritten; the rest is untouched.
    ///
    /// # Panics
    /// If `data.len() != width * height` or `descriptor` is shorter than
    /// [`Self::descriptor_size`].
    pub fn compute_into(
        &self,
        data: &[f64],
        width: usize,
        height: usize,
        descriptor: &mut [f64],
        workspace: &mut HogWorkspace,
    ) {
        self.compute_impl(Pixels::F64(data), width, height, descriptor, workspace);
    }

    /// Zero-allocation variant of [`Self::compute_u8`].
    ///
    /// # Panics
    /// If `data.len() != width * height` or `descriptor` is shorter than
    /// [`Self::descriptor_size`].
    pub fn compute_u8_into(
        &self,
        data: &[u8],
        width: usize,
        height: usize,
        descriptor: &mut [f64],
        workspace: &mut HogWorkspace,
    ) {
        self.compute_impl(Pixels::U8(data), width, height, descriptor, workspace);
    }

    fn compute_impl(
        &self,
        pixels: Pixels<'_>,
        width: usize,
        height: usize,
        descriptor: &mut [f64],
        workspace: &mut HogWorkspace,
    ) {
        let n = width * height;
        let layout = HogLayout::new(width, height, &self.params);

        // All length preconditions checked before any memory is touched.
        assert!(
            pixels.len() == n,
            "pixel buffer length {} does not match width*height = {}",
            pixels.len(),
            n
        );
        assert!(
            descriptor.len() >= layout.descriptor_len,
            "descriptor buffer length {} below required {}",
            descriptor.len(),
            layout.descriptor_len
        );

        if layout.descriptor_len == 0 {
            debug!("hog: {width}x{height} px too small for one block, empty descriptor");
            return;
        }

        workspace.ensure(WorkspaceSize::for_layout(width, height, &layout));
        debug!(
            "hog: {width}x{height} px -> {}x{} cells, {}x{} blocks, descriptor len {}",
            layout.num_cells_x,
            layout.num_cells_y,
            layout.num_blocks_x,
            layout.num_blocks_y,
            layout.descriptor_len
        );

        let HogWorkspace { floats, bins } = workspace;

        // 8-bit input and square-root compression both need the pixels in the
        // arena head; plain float input is read from the caller's slice.
        let staged = self.params.transform_sqrt || matches!(pixels, Pixels::U8(_));

        // Stage 1: gradients. Arena regions: [0,n) pixels (if staged),
        // [n,2n) grad-y, [2n,3n) grad-x.
        {
            let (head, tail) = floats.split_at_mut(n);
            if staged {
                match pixels {
                    Pixels::F64(data) => {
                        for (dst, &v) in head.iter_mut().zip(data) {
                            *dst = v.sqrt();
                        }
                    }
                    Pixels::U8(data) => {
                        if self.params.transform_sqrt {
                            for (dst, &v) in head.iter_mut().zip(data) {
                                *dst = f64::from(v).sqrt();
                            }
                        } else {
                            for (dst, &v) in head.iter_mut().zip(data) {
                                *dst = f64::from(v);
                            }
                        }
                    }
                }
            }
            let source: &[f64] = if staged {
                head
            } else {
                match pixels {
                    Pixels::F64(data) => data,
                    Pixels::U8(_) => unreachable!("u8 input is always staged"),
                }
            };
            let (grad_y, grad_x) = tail.split_at_mut(n);
            gradient::centered_gradients_into(source, width, height, &mut grad_x[..n], grad_y);
        }

        // Stage 2: vote index + magnitude. The staged pixels are dead, so the
        // magnitude overwrites the head region.
        {
            let (head, tail) = floats.split_at_mut(n);
            let (grad_y, grad_x) = tail.split_at_mut(n);
            orientation::bin_and_magnitude_into(
                &grad_x[..n],
                grad_y,
                self.params.orientations,
                &mut bins[..n],
                head,
            );
        }

        // Stage 3: cell histograms at [n, n+histograms_len); the gradient
        // regions are dead and may be overlapped.
        {
            let (magnitude, tail) = floats.split_at_mut(n);
            let histograms = &mut tail[..layout.histograms_len];
            histograms.fill(0.0);
            histogram::accumulate_cells_into(
                magnitude,
                bins,
                width,
                height,
                self.params.cell_size,
                self.params.orientations,
                (layout.num_cells_x, layout.num_cells_y),
                histograms,
            );
        }

        // Stage 4: sliding blocks, normalized into the output. The histogram
        // grid is read-only here so overlapping blocks stay independent.
        let histograms = &floats[n..n + layout.histograms_len];
        normalize::normalize_blocks_into(
            histograms,
            self.params.orientations,
            layout.num_cells_x,
            self.params.block_size,
            (layout.num_blocks_x, layout.num_blocks_y),
            self.params.normalization,
            &mut descriptor[..layout.descriptor_len],
        );
    }
}
