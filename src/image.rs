//! Grayscale input frames.

use image::GrayImage;
use ndarray::{Array2, ArrayView1};

use crate::error::{Error, Result};

/// Immutable single-channel intensity grid indexed by `(row, col)`.
#[derive(Clone, Debug, PartialEq)]
pub struct GrayImageF32 {
    data: Array2<f32>,
}

impl GrayImageF32 {
    /// Build from a row-major buffer of `height * width` samples.
    pub fn from_vec(height: usize, width: usize, data: Vec<f32>) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(Error::EmptyImage);
        }
        if let Some(i) = data.iter().position(|v| !v.is_finite()) {
            return Err(Error::NonFiniteSample {
                row: i / width,
                col: i % width,
            });
        }
        let expected = height * width;
        let actual = data.len();
        let data = Array2::from_shape_vec((height, width), data)
            .map_err(|_| Error::BufferSize { expected, actual })?;
        Ok(Self { data })
    }

    /// Image filled with a single intensity.
    pub fn new(height: usize, width: usize, value: f32) -> Result<Self> {
        Self::from_vec(height, width, vec![value; height * width])
    }

    pub fn from_gray(img: &GrayImage) -> Result<Self> {
        let (w, h) = img.dimensions();
        let data = img.as_raw().iter().map(|&v| v as f32).collect();
        Self::from_vec(h as usize, w as usize, data)
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    /// `(height, width)`
    pub fn dims(&self) -> (usize, usize) {
        self.data.dim()
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[(row, col)]
    }

    #[inline]
    pub fn row(&self, row: usize) -> ArrayView1<'_, f32> {
        self.data.row(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_vec_is_row_major() {
        let img = GrayImageF32::from_vec(2, 3, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(img.dims(), (2, 3));
        assert_eq!(img.get(1, 0), 3.0);
        assert_eq!(img.get(0, 2), 2.0);
    }

    #[test]
    fn from_vec_checks_length() {
        let err = GrayImageF32::from_vec(2, 2, vec![0.0; 3]).unwrap_err();
        assert!(matches!(err, Error::BufferSize { expected: 4, actual: 3 }));
    }

    #[test]
    fn non_finite_samples_are_rejected() {
        let mut data = vec![10.0; 8];
        data[4] = f32::INFINITY;
        let err = GrayImageF32::from_vec(2, 4, data).unwrap_err();
        assert!(matches!(err, Error::NonFiniteSample { row: 1, col: 0 }));

        let err = GrayImageF32::from_vec(1, 3, vec![1.0, f32::NAN, 2.0]).unwrap_err();
        assert!(matches!(err, Error::NonFiniteSample { row: 0, col: 1 }));

        assert!(GrayImageF32::new(2, 2, f32::NEG_INFINITY).is_err());
    }

    #[test]
    fn empty_is_rejected() {
        assert!(matches!(
            GrayImageF32::from_vec(0, 4, Vec::new()),
            Err(Error::EmptyImage)
        ));
    }

    #[test]
    fn converts_from_luma8() {
        let mut gray = GrayImage::new(3, 2);
        gray.put_pixel(2, 1, image::Luma([200]));
        let img = GrayImageF32::from_gray(&gray).unwrap();
        assert_eq!(img.dims(), (2, 3));
        assert_eq!(img.get(1, 2), 200.0);
        assert_eq!(img.get(0, 0), 0.0);
    }
}
