//! Plain-text pixel streams used to drive the matcher from recorded data.
//!
//! - `read_pixel_stream`: whitespace separated samples, row-major.
//! - `write_disparity_stream`: one disparity per line, row-major.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};
use crate::image::GrayImageF32;
use crate::select::DisparityMap;

/// Load exactly `height * width` samples from `path`.
pub fn read_pixel_stream(path: &Path, height: usize, width: usize) -> Result<GrayImageF32> {
    let reader = BufReader::new(File::open(path)?);
    let expected = height * width;
    let mut samples = Vec::with_capacity(expected);
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        for token in line.split_whitespace() {
            let v: f32 = token.parse().map_err(|e| Error::Parse {
                line: i + 1,
                message: format!("{token:?}: {e}"),
            })?;
            samples.push(v);
        }
    }
    debug!("read {} samples from {}", samples.len(), path.display());
    if samples.len() != expected {
        return Err(Error::BufferSize {
            expected,
            actual: samples.len(),
        });
    }
    GrayImageF32::from_vec(height, width, samples)
}

pub fn write_disparity_stream(path: &Path, disp: &DisparityMap) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for d in disp.data().iter() {
        writeln!(out, "{d}")?;
    }
    out.flush()?;
    Ok(())
}
