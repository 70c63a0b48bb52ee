//! Matcher configuration.
//!
//! Penalties and sentinels are plain cost units, the same units as the
//! absolute intensity difference produced by the cost stage.

use std::fs;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SgmParams {
    /// Number of disparity hypotheses, `d` ranges over `0..max_disparity`.
    pub max_disparity: usize,
    /// Penalty for a disparity change of one between path neighbours.
    pub p1: f32,
    /// Penalty for any larger disparity jump.
    pub p2: f32,
    /// Raw cost for `col < d`, where the right-image pixel falls off the frame.
    pub invalid_cost: f32,
    /// Stand-in for the missing `d - 1` / `d + 1` neighbour at the range edges.
    ///
    /// Must stay above any aggregated cost a path can reach, roughly the
    /// largest raw cost plus `p2`. The default suits 8-bit input; raise it
    /// for 16-bit or other high-range samples.
    pub unreachable_cost: f32,
}

impl Default for SgmParams {
    fn default() -> Self {
        Self {
            max_disparity: 16,
            p1: 8.0,
            p2: 128.0,
            invalid_cost: 1000.0,
            unreachable_cost: 2000.0,
        }
    }
}

impl SgmParams {
    pub fn new(max_disparity: usize, p1: f32, p2: f32) -> Self {
        Self {
            max_disparity,
            p1,
            p2,
            ..Default::default()
        }
    }

    /// Check the configuration before any volume is allocated.
    pub fn validate(&self) -> Result<()> {
        if self.max_disparity == 0 {
            return Err(Error::InvalidParams(
                "max_disparity must be at least 1".to_string(),
            ));
        }
        for (name, value) in [
            ("p1", self.p1),
            ("p2", self.p2),
            ("invalid_cost", self.invalid_cost),
            ("unreachable_cost", self.unreachable_cost),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidParams(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        if self.p2 < self.p1 {
            warn!(
                "p2 ({}) is smaller than p1 ({}); large jumps become cheaper than small ones",
                self.p2, self.p1
            );
        }
        Ok(())
    }

    /// Parse a JSON object; missing keys take their default values.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(s)?;
        params.validate()?;
        Ok(params)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}
