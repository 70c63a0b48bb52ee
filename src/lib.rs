//! Semi-global matching for rectified grayscale stereo pairs.
//!
//! The pipeline has three stages:
//!
//! 1. [`cost::compute_cost_volume`]: absolute difference per pixel and disparity.
//! 2. [`aggregate::aggregate_path`]: 1D path aggregation, once per [`Direction`].
//! 3. [`select::select_disparities`]: sum the four volumes and take the arg-min.
//!
//! [`Sgm`] runs all of them, with the four directions in parallel.
//!
//! ```no_run
//! use sgm_core::{GrayImageF32, Sgm, SgmParams};
//!
//! let left = GrayImageF32::new(4, 4, 10.0).unwrap();
//! let right = GrayImageF32::new(4, 4, 10.0).unwrap();
//! let sgm = Sgm::new(SgmParams::new(2, 1.0, 4.0)).unwrap();
//! let disp = sgm.compute(&left, &right).unwrap();
//! assert_eq!(disp.get(0, 0), 0);
//! ```

pub mod aggregate;
pub mod cost;
pub mod error;
pub mod image;
pub mod io;
pub mod params;
pub mod select;
pub mod sgm;
pub mod volume;

pub use crate::aggregate::{aggregate_path, Direction};
pub use crate::cost::compute_cost_volume;
pub use crate::error::{Error, Result};
pub use crate::image::GrayImageF32;
pub use crate::params::SgmParams;
pub use crate::select::{select_disparities, DisparityMap};
pub use crate::sgm::{compute_disp, compute_from_buffers, Sgm, SgmVolumes};
pub use crate::volume::{AggregatedVolume, CostVolume, VolumeShape};
