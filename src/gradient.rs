//! Centered first-difference gradients on a single-channel image.
//!
//! - `gx[y][x] = image[y][x+1] - image[y][x-1]` for interior columns.
//! - `gy[y][x] = image[y+1][x] - image[y-1][x]` for interior rows.
//! - Border rows/columns are exactly zero: centered differencing needs both
//!   neighbours, so the first and last row/column carry no gradient. This is
//!   the scikit-image boundary policy, not an oversight.
//!
//! Deliberately Sobel-free; the descriptor's reference behaviour is defined
//! on plain first differences.

/// Computes centered-difference gradients into caller-owned buffers.
///
/// Both output slices are zero-filled first, so border values read back as
/// zero without being written by the difference loops.
///
/// # Panics
/// If `image`, `grad_x` or `grad_y` are shorter than `width * height`.
pub fn centered_gradients_into(
    image: &[f64],
    width: usize,
    height: usize,
    grad_x: &mut [f64],
    grad_y: &mut [f64],
) {
    let n = width * height;
    assert!(image.len() >= n, "image buffer shorter than width*height");
    assert!(grad_x.len() >= n, "grad_x buffer shorter than width*height");
    assert!(grad_y.len() >= n, "grad_y buffer shorter than width*height");

    grad_x[..n].fill(0.0);
    grad_y[..n].fill(0.0);

    if width >= 3 {
        for y in 0..height {
            let row = y * width;
            for x in 1..width - 1 {
                grad_x[row + x] = image[row + x + 1] - image[row + x - 1];
            }
        }
    }

    if height >= 3 {
        for y in 1..height - 1 {
            let above = (y - 1) * width;
            let below = (y + 1) * width;
            let row = y * width;
            for x in 0..width {
                grad_y[row + x] = image[below + x] - image[above + x];
            }
        }
    }
}
