//! End-to-end matcher: cost, four-path aggregation, selection.

use std::time::Instant;

use image::GrayImage;
use log::debug;
use rayon::prelude::*;

use crate::aggregate::{aggregate_path, Direction};
use crate::cost::compute_cost_volume;
use crate::error::Result;
use crate::image::GrayImageF32;
use crate::params::SgmParams;
use crate::select::{select_disparities, DisparityMap};
use crate::volume::{AggregatedVolume, CostVolume};

/// Intermediate volumes of one run, for inspection.
#[derive(Clone, Debug)]
pub struct SgmVolumes {
    pub cost: CostVolume,
    /// One volume per direction, in `Direction::ALL` order.
    pub aggregated: Vec<AggregatedVolume>,
}

/// Four-path semi-global matcher.
#[derive(Clone, Debug)]
pub struct Sgm {
    params: SgmParams,
}

impl Sgm {
    pub fn new(params: SgmParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &SgmParams {
        &self.params
    }

    /// Disparity of every pixel in `left` (the reference view).
    pub fn compute(&self, left: &GrayImageF32, right: &GrayImageF32) -> Result<DisparityMap> {
        let start = Instant::now();
        let volumes = self.compute_volumes(left, right)?;
        let disp = select_disparities(&volumes.aggregated)?;
        debug!(
            "sgm {}x{} d={}: {:.3} ms",
            left.height(),
            left.width(),
            self.params.max_disparity,
            start.elapsed().as_secs_f64() * 1e3
        );
        Ok(disp)
    }

    /// Cost volume and the four directional volumes, without selection.
    pub fn compute_volumes(
        &self,
        left: &GrayImageF32,
        right: &GrayImageF32,
    ) -> Result<SgmVolumes> {
        let cost = compute_cost_volume(left, right, &self.params)?;
        let aggregated = Direction::ALL
            .par_iter()
            .map(|&dir| aggregate_path(&cost, dir, &self.params))
            .collect::<Result<Vec<_>>>()?;
        Ok(SgmVolumes { cost, aggregated })
    }
}

/// Run the matcher on two row-major sample buffers of `height * width`.
pub fn compute_from_buffers(
    left: &[f32],
    right: &[f32],
    height: usize,
    width: usize,
    params: &SgmParams,
) -> Result<DisparityMap> {
    let sgm = Sgm::new(*params)?;
    let left = GrayImageF32::from_vec(height, width, left.to_vec())?;
    let right = GrayImageF32::from_vec(height, width, right.to_vec())?;
    sgm.compute(&left, &right)
}

/// Run the matcher on an 8-bit grayscale pair.
pub fn compute_disp(
    left: &GrayImage,
    right: &GrayImage,
    params: &SgmParams,
) -> Result<DisparityMap> {
    let sgm = Sgm::new(*params)?;
    let left = GrayImageF32::from_gray(left)?;
    let right = GrayImageF32::from_gray(right)?;
    sgm.compute(&left, &right)
}
