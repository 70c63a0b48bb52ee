//! Pixel-wise matching cost.

use log::debug;
use ndarray::parallel::prelude::*;
use ndarray::{Array3, Axis};

use crate::error::{Error, Result};
use crate::image::GrayImageF32;
use crate::params::SgmParams;
use crate::volume::CostVolume;

/// Absolute difference between `left[row][col]` and `right[row][col - d]`.
///
/// Disparities that would reach past the left edge of the right image get
/// `params.invalid_cost` instead.
pub fn compute_cost_volume(
    left: &GrayImageF32,
    right: &GrayImageF32,
    params: &SgmParams,
) -> Result<CostVolume> {
    params.validate()?;
    if left.dims() != right.dims() {
        return Err(Error::DimensionMismatch {
            left: left.dims(),
            right: right.dims(),
        });
    }
    let (rows, cols) = left.dims();
    let d_range = params.max_disparity;
    let invalid = params.invalid_cost;

    let mut cost = Array3::<f32>::zeros((rows, cols, d_range));
    cost.axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(row, mut plane)| {
            let row_l = left.row(row);
            let row_r = right.row(row);
            for col in 0..cols {
                for d in 0..d_range {
                    plane[(col, d)] = if col >= d {
                        (row_l[col] - row_r[col - d]).abs()
                    } else {
                        invalid
                    };
                }
            }
        });

    debug!("cost volume built: {}x{}x{}", rows, cols, d_range);
    Ok(CostVolume::from_array(cost))
}
