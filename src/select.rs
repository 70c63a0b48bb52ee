//! Winner-take-all disparity selection over summed path costs.

use image::{GrayImage, Luma};
use log::debug;
use ndarray::parallel::prelude::*;
use ndarray::{Array2, Axis};

use crate::error::{Error, Result};
use crate::volume::AggregatedVolume;

/// Integer disparity per pixel, indexed by `(row, col)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisparityMap {
    data: Array2<u32>,
    max_disparity: usize,
}

impl DisparityMap {
    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    /// Size of the disparity range the map was selected from.
    pub fn max_disparity(&self) -> usize {
        self.max_disparity
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.data[(row, col)]
    }

    pub fn data(&self) -> &Array2<u32> {
        &self.data
    }

    /// Row-major copy of the map.
    pub fn to_vec(&self) -> Vec<u32> {
        self.data.iter().copied().collect()
    }

    /// Render for viewing, with the largest possible disparity mapped to 255.
    pub fn to_luma_normalised(&self) -> GrayImage {
        let top = self.max_disparity.saturating_sub(1).max(1) as f32;
        let mut img = GrayImage::new(self.width() as u32, self.height() as u32);
        for ((row, col), &d) in self.data.indexed_iter() {
            let v = (d as f32 / top * 255.0).min(255.0);
            img.put_pixel(col as u32, row as u32, Luma([v as u8]));
        }
        img
    }
}

/// Sum `volumes` per pixel and pick the disparity with the lowest total.
///
/// Volumes are summed in slice order, so a fixed order gives bit-identical
/// totals. Ties go to the smallest disparity.
pub fn select_disparities(volumes: &[AggregatedVolume]) -> Result<DisparityMap> {
    let first = volumes.first().ok_or(Error::NoVolumes)?;
    let shape = first.shape();
    for v in &volumes[1..] {
        shape.ensure_matches(v.shape())?;
    }

    let mut data = Array2::<u32>::zeros((shape.height, shape.width));
    data.axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(row, mut line)| {
            for col in 0..shape.width {
                let mut best = 0u32;
                let mut min_total = f32::INFINITY;
                for d in 0..shape.max_disparity {
                    let total = volumes.iter().fold(0.0f32, |acc, v| acc + v.get(row, col, d));
                    if total < min_total {
                        min_total = total;
                        best = d as u32;
                    }
                }
                line[col] = best;
            }
        });

    debug!("selected disparities over {} volumes: {:?}", volumes.len(), shape);
    Ok(DisparityMap {
        data,
        max_disparity: shape.max_disparity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::Direction;
    use ndarray::{arr3, Array3};

    fn volume(dir: Direction, data: Array3<f32>) -> AggregatedVolume {
        AggregatedVolume::from_array(dir, data)
    }

    #[test]
    fn picks_minimum_of_summed_costs() {
        let a = volume(Direction::LeftToRight, arr3(&[[[5.0, 1.0, 3.0], [0.0, 2.0, 2.0]]]));
        let b = volume(Direction::RightToLeft, arr3(&[[[0.0, 1.0, 0.0], [9.0, 2.0, 2.5]]]));
        let map = select_disparities(&[a, b]).unwrap();
        // totals: [5, 2, 3] and [9, 4, 4.5]
        assert_eq!(map.to_vec(), vec![1, 1]);
        assert_eq!(map.max_disparity(), 3);
    }

    #[test]
    fn ties_go_to_smallest_disparity() {
        let a = volume(Direction::LeftToRight, arr3(&[[[3.0, 1.0, 1.0, 1.0]]]));
        let b = volume(Direction::TopToBottom, arr3(&[[[0.0, 2.0, 1.0, 2.0]]]));
        // totals: [3, 3, 2, 3]
        let map = select_disparities(&[a.clone(), b]).unwrap();
        assert_eq!(map.get(0, 0), 2);

        let flat = volume(Direction::LeftToRight, Array3::from_elem((2, 2, 5), 7.0));
        let map = select_disparities(&[flat]).unwrap();
        assert!(map.data().iter().all(|&d| d == 0));

        let map = select_disparities(&[a]).unwrap();
        assert_eq!(map.get(0, 0), 1);
    }

    #[test]
    fn shape_mismatch_is_rejected() {
        let a = volume(Direction::LeftToRight, Array3::zeros((2, 3, 4)));
        let b = volume(Direction::RightToLeft, Array3::zeros((2, 3, 5)));
        assert!(matches!(
            select_disparities(&[a, b]),
            Err(Error::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(select_disparities(&[]), Err(Error::NoVolumes)));
    }

    #[test]
    fn luma_rendering_scales_to_full_range() {
        let data = Array3::from_shape_fn((1, 3, 3), |(_, c, d)| if c == d { 0.0 } else { 1.0 });
        let map = select_disparities(&[volume(Direction::LeftToRight, data)]).unwrap();
        assert_eq!(map.to_vec(), vec![0, 1, 2]);
        let img = map.to_luma_normalised();
        assert_eq!(img.get_pixel(0, 0)[0], 0);
        assert_eq!(img.get_pixel(1, 0)[0], 127);
        assert_eq!(img.get_pixel(2, 0)[0], 255);
    }
}
