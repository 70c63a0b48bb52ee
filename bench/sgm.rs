use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sgm_core::{aggregate_path, compute_cost_volume, Direction, GrayImageF32, Sgm, SgmParams};

fn textured(height: usize, width: usize, shift: usize) -> GrayImageF32 {
    let data = (0..height)
        .flat_map(|r| (0..width).map(move |c| (((c + shift) * 37 + r * 11) % 251) as f32))
        .collect();
    GrayImageF32::from_vec(height, width, data).unwrap()
}

fn sgm_bench(c: &mut Criterion) {
    // Same frame geometry as the accelerator build.
    let left = textured(240, 272, 0);
    let right = textured(240, 272, 4);
    let params = SgmParams::default();
    let sgm = Sgm::new(params).unwrap();

    c.bench_function("cost volume 240x272x16", |b| {
        b.iter(|| compute_cost_volume(black_box(&left), black_box(&right), &params))
    });

    let cost = compute_cost_volume(&left, &right, &params).unwrap();
    c.bench_function("aggregate left-to-right", |b| {
        b.iter(|| aggregate_path(black_box(&cost), Direction::LeftToRight, &params))
    });
    c.bench_function("aggregate top-to-bottom", |b| {
        b.iter(|| aggregate_path(black_box(&cost), Direction::TopToBottom, &params))
    });

    c.bench_function("sgm 240x272x16", |b| {
        b.iter(|| sgm.compute(black_box(&left), black_box(&right)))
    });
}

criterion_group!(benches, sgm_bench);
criterion_main!(benches);
