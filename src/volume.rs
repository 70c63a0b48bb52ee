//! Cost volumes indexed by `(row, col, disparity)`.

use ndarray::{Array3, ArrayView1};

use crate::aggregate::Direction;
use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VolumeShape {
    pub height: usize,
    pub width: usize,
    pub max_disparity: usize,
}

impl VolumeShape {
    pub fn new(height: usize, width: usize, max_disparity: usize) -> Self {
        Self {
            height,
            width,
            max_disparity,
        }
    }

    fn of(data: &Array3<f32>) -> Self {
        let (h, w, d) = data.dim();
        Self::new(h, w, d)
    }

    pub(crate) fn dim(&self) -> (usize, usize, usize) {
        (self.height, self.width, self.max_disparity)
    }

    pub(crate) fn ensure_matches(&self, actual: VolumeShape) -> Result<()> {
        if *self != actual {
            return Err(Error::ShapeMismatch {
                expected: *self,
                actual,
            });
        }
        Ok(())
    }
}

/// Raw per-pixel matching cost. Read-only once built.
#[derive(Clone, Debug)]
pub struct CostVolume {
    data: Array3<f32>,
}

impl CostVolume {
    pub(crate) fn from_array(data: Array3<f32>) -> Self {
        Self { data }
    }

    pub fn shape(&self) -> VolumeShape {
        VolumeShape::of(&self.data)
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize, d: usize) -> f32 {
        self.data[(row, col, d)]
    }

    /// Costs of every disparity at one pixel.
    pub fn costs_at(&self, row: usize, col: usize) -> ArrayView1<'_, f32> {
        self.data.slice(ndarray::s![row, col, ..])
    }

    pub fn data(&self) -> &Array3<f32> {
        &self.data
    }
}

/// Path costs accumulated along a single scan direction.
#[derive(Clone, Debug)]
pub struct AggregatedVolume {
    direction: Direction,
    data: Array3<f32>,
}

impl AggregatedVolume {
    pub(crate) fn from_array(direction: Direction, data: Array3<f32>) -> Self {
        Self { direction, data }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn shape(&self) -> VolumeShape {
        VolumeShape::of(&self.data)
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize, d: usize) -> f32 {
        self.data[(row, col, d)]
    }

    pub fn costs_at(&self, row: usize, col: usize) -> ArrayView1<'_, f32> {
        self.data.slice(ndarray::s![row, col, ..])
    }

    pub fn data(&self) -> &Array3<f32> {
        &self.data
    }
}
