//! Directional cost aggregation.
//!
//! Each scan direction produces its own volume. For a pixel `p` with
//! predecessor `p - r` on the path:
//!
//! ```text
//! L_r(p, d) = C(p, d) + min(L_r(p-r, d),
//!                           L_r(p-r, d-1) + P1,
//!                           L_r(p-r, d+1) + P1,
//!                           min_k L_r(p-r, k) + P2) - min_k L_r(p-r, k)
//! ```
//!
//! The first pixel of every path copies its raw cost.

use log::debug;
use ndarray::parallel::prelude::*;
use ndarray::{Array3, ArrayView2, ArrayViewMut2, Axis};

use crate::error::{Error, Result};
use crate::params::SgmParams;
use crate::volume::{AggregatedVolume, CostVolume, VolumeShape};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    LeftToRight,
    RightToLeft,
    TopToBottom,
    BottomToTop,
}

impl Direction {
    /// Summation order used by the selector.
    pub const ALL: [Direction; 4] = [
        Direction::LeftToRight,
        Direction::RightToLeft,
        Direction::TopToBottom,
        Direction::BottomToTop,
    ];

    /// `(dy, dx)`; the predecessor of `(row, col)` is `(row - dy, col - dx)`.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::LeftToRight => (0, 1),
            Direction::RightToLeft => (0, -1),
            Direction::TopToBottom => (1, 0),
            Direction::BottomToTop => (-1, 0),
        }
    }

    pub fn from_delta(dy: i32, dx: i32) -> Result<Self> {
        match (dy, dx) {
            (0, 1) => Ok(Direction::LeftToRight),
            (0, -1) => Ok(Direction::RightToLeft),
            (1, 0) => Ok(Direction::TopToBottom),
            (-1, 0) => Ok(Direction::BottomToTop),
            _ => Err(Error::InvalidDirection { dy, dx }),
        }
    }

    // Axis whose indices are independent paths. Horizontal scans run one
    // path per row, vertical scans one per column.
    fn lane_axis(self) -> Axis {
        match self {
            Direction::LeftToRight | Direction::RightToLeft => Axis(0),
            Direction::TopToBottom | Direction::BottomToTop => Axis(1),
        }
    }

    fn descending(self) -> bool {
        let (dy, dx) = self.delta();
        dy + dx < 0
    }
}

/// Aggregate `cost` along one direction. Paths are processed in parallel.
pub fn aggregate_path(
    cost: &CostVolume,
    direction: Direction,
    params: &SgmParams,
) -> Result<AggregatedVolume> {
    params.validate()?;
    let shape = cost.shape();
    VolumeShape::new(shape.height, shape.width, params.max_disparity).ensure_matches(shape)?;

    let mut out = Array3::<f32>::zeros(shape.dim());
    let axis = direction.lane_axis();
    let descending = direction.descending();
    cost.data()
        .axis_iter(axis)
        .into_par_iter()
        .zip(out.axis_iter_mut(axis).into_par_iter())
        .for_each(|(lane_cost, lane_out)| {
            aggregate_lane(lane_cost, lane_out, descending, params);
        });

    debug!("aggregated {:?}: {:?}", direction, shape);
    Ok(AggregatedVolume::from_array(direction, out))
}

// `cost` and `out` are `(path position, disparity)`.
fn aggregate_lane(
    cost: ArrayView2<'_, f32>,
    mut out: ArrayViewMut2<'_, f32>,
    descending: bool,
    params: &SgmParams,
) {
    let (len, d_range) = cost.dim();
    let mut prev = vec![0.0f32; d_range];

    for step in 0..len {
        let pos = if descending { len - 1 - step } else { step };
        let raw = cost.row(pos);
        let mut cur = out.row_mut(pos);

        if step == 0 {
            cur.assign(&raw);
        } else {
            let min_prev = prev.iter().copied().fold(f32::INFINITY, f32::min);
            let jump = min_prev + params.p2;
            for d in 0..d_range {
                let down = if d > 0 {
                    prev[d - 1] + params.p1
                } else {
                    params.unreachable_cost
                };
                let up = if d + 1 < d_range {
                    prev[d + 1] + params.p1
                } else {
                    params.unreachable_cost
                };
                let transition = prev[d].min(down).min(up).min(jump);
                cur[d] = raw[d] + (transition - min_prev);
            }
        }

        for (p, &c) in prev.iter_mut().zip(cur.iter()) {
            *p = c;
        }
    }
}
