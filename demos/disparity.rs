//! Compute a disparity map from a stereo pair.
//!
//! Inputs are either images (anything the `image` crate reads) or plain-text
//! pixel streams, one sample per whitespace-separated token.
//!
//! Usage:
//!   cargo run --example disparity -- --left left.png --right right.png --png disp.png
//!   cargo run --example disparity -- --left left_pixels.txt --right right_pixels.txt \
//!       --size 240x272 --stream hls_disparity.txt

use std::path::{Path, PathBuf};

use clap::Parser;
use sgm_core::io::{read_pixel_stream, write_disparity_stream};
use sgm_core::{GrayImageF32, Sgm, SgmParams};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Reference (left) view
    #[arg(short, long)]
    left: PathBuf,

    /// Target (right) view
    #[arg(short, long)]
    right: PathBuf,

    /// `HEIGHTxWIDTH`; inputs are read as pixel streams when given
    #[arg(long)]
    size: Option<String>,

    /// JSON file with matcher parameters
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write one disparity per line here
    #[arg(long)]
    stream: Option<PathBuf>,

    /// Write a normalised grayscale rendering here
    #[arg(long)]
    png: Option<PathBuf>,
}

fn parse_size(s: &str) -> Result<(usize, usize), Box<dyn std::error::Error>> {
    let (h, w) = s
        .split_once('x')
        .ok_or_else(|| format!("expected HEIGHTxWIDTH, got {s:?}"))?;
    Ok((h.trim().parse()?, w.trim().parse()?))
}

fn load(
    path: &Path,
    size: Option<(usize, usize)>,
) -> Result<GrayImageF32, Box<dyn std::error::Error>> {
    let img = match size {
        Some((h, w)) => read_pixel_stream(path, h, w)?,
        None => GrayImageF32::from_gray(&image::open(path)?.to_luma8())?,
    };
    Ok(img)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let params = match &args.config {
        Some(path) => SgmParams::from_json_file(path)?,
        None => SgmParams::default(),
    };
    let size = args.size.as_deref().map(parse_size).transpose()?;

    let left = load(&args.left, size)?;
    let right = load(&args.right, size)?;
    println!(
        "matching {}x{} (HxW) with {} disparities (p1={}, p2={})",
        left.height(),
        left.width(),
        params.max_disparity,
        params.p1,
        params.p2
    );

    let disp = Sgm::new(params)?.compute(&left, &right)?;

    if let Some(path) = &args.stream {
        write_disparity_stream(path, &disp)?;
        println!("disparity stream saved to {}", path.display());
    }
    if let Some(path) = &args.png {
        disp.to_luma_normalised().save(path)?;
        println!("disparity image saved to {}", path.display());
    }
    Ok(())
}
