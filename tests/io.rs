use std::fs;

use sgm_core::io::{read_pixel_stream, write_disparity_stream};
use sgm_core::{Error, Sgm, SgmParams};
use tempfile::TempDir;

#[test]
fn pixel_stream_round_trip_through_matcher() {
    let dir = TempDir::new().unwrap();
    let left_path = dir.path().join("left_pixels.txt");
    let right_path = dir.path().join("right_pixels.txt");
    let out_path = dir.path().join("disparity.txt");

    // Mixed separators: one value per line and several per line both parse.
    let left: Vec<String> = (0..12).map(|_| "10".to_string()).collect();
    fs::write(&left_path, left.join("\n")).unwrap();
    fs::write(&right_path, "10 10 10 10\n10 50.0 10 10\n10 10 10 10\n").unwrap();

    let left = read_pixel_stream(&left_path, 3, 4).unwrap();
    let right = read_pixel_stream(&right_path, 3, 4).unwrap();
    assert_eq!(right.get(1, 1), 50.0);

    let disp = Sgm::new(SgmParams::new(2, 1.0, 4.0))
        .unwrap()
        .compute(&left, &right)
        .unwrap();
    write_disparity_stream(&out_path, &disp).unwrap();

    let written: Vec<u32> = fs::read_to_string(&out_path)
        .unwrap()
        .lines()
        .map(|l| l.parse().unwrap())
        .collect();
    assert_eq!(written.len(), 12);
    assert_eq!(written, disp.to_vec());
}

#[test]
fn short_stream_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("short.txt");
    fs::write(&path, "1 2 3\n").unwrap();
    let err = read_pixel_stream(&path, 2, 2).unwrap_err();
    assert!(matches!(err, Error::BufferSize { expected: 4, actual: 3 }));
}

#[test]
fn garbage_reports_line_number() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.txt");
    fs::write(&path, "1\n2\nthree\n4\n").unwrap();
    let err = read_pixel_stream(&path, 2, 2).unwrap_err();
    assert!(matches!(err, Error::Parse { line: 3, .. }));
}

#[test]
fn non_finite_samples_in_stream_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nan.txt");
    fs::write(&path, "1 NaN inf 4\n").unwrap();
    let err = read_pixel_stream(&path, 2, 2).unwrap_err();
    assert!(matches!(err, Error::NonFiniteSample { row: 0, col: 1 }));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let err = read_pixel_stream(&dir.path().join("nope.txt"), 1, 1).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn params_load_from_json_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sgm.json");
    fs::write(&path, r#"{ "max_disparity": 32, "p1": 4.0, "p2": 64.0 }"#).unwrap();
    let params = SgmParams::from_json_file(&path).unwrap();
    assert_eq!(params.max_disparity, 32);
    assert_eq!(params.p2, 64.0);
    assert_eq!(params.invalid_cost, 1000.0);
}
