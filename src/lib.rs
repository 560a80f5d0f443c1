#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod descriptor;
pub mod params;
pub mod workspace;

// “Expert” modules – still public, but considered unstable internals.
pub mod gradient;
pub mod histogram;
pub mod normalize;
pub mod orientation;

mod layout;

// --- High-level re-exports -------------------------------------------------

pub use crate::descriptor::HogDescriptor;
pub use crate::params::{HogParams, Normalization};
pub use crate::workspace::{HogWorkspace, WorkspaceSize};

/// Small prelude for quick experiments.
///
/// ```
/// use hog_descriptor::prelude::*;
///
/// let (w, h) = (32usize, 32usize);
/// let gray = vec![0u8; w * h];
///
/// let hog = HogDescriptor::new(HogParams {
///     cell_size: (4, 4),
///     block_size: (2, 2),
///     ..Default::default()
/// });
/// let feature = hog.compute_u8(&gray, w, h);
/// assert_eq!(feature.len(), hog.descriptor_size(w, h));
/// ```
pub mod prelude {
    pub use crate::{HogDescriptor, HogParams, HogWorkspace, Normalization};
}
