// Benchmarks for the descriptor hot paths: the allocating convenience entry
// point versus the workspace-reuse path a detector sweep would use.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use hog_descriptor::{HogDescriptor, HogParams, HogWorkspace, Normalization};

fn noise_image_u8(width: usize, height: usize, seed: u64) -> Vec<u8> {
    let mut state = seed.max(1);
    (0..width * height)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state >> 24) as u8
        })
        .collect()
}

fn bench_compute(c: &mut Criterion) {
    let hog = HogDescriptor::new(HogParams {
        orientations: 9,
        cell_size: (8, 8),
        block_size: (2, 2),
        normalization: Normalization::L2Hys,
        transform_sqrt: false,
    });

    let mut group = c.benchmark_group("hog");
    for &(w, h) in &[(64usize, 128usize), (128, 128), (256, 256)] {
        let image = noise_image_u8(w, h, 1);

        group.bench_with_input(
            BenchmarkId::new("allocating", format!("{w}x{h}")),
            &image,
            |b, image| b.iter(|| hog.compute_u8(image, w, h)),
        );

        let mut workspace = HogWorkspace::for_image(&hog, w, h);
        let mut out = vec![0.0; hog.descriptor_size(w, h)];
        group.bench_with_input(
            BenchmarkId::new("workspace_reuse", format!("{w}x{h}")),
            &image,
            |b, image| {
                b.iter(|| {
                    hog.compute_u8_into(image, w, h, &mut out, &mut workspace);
                    out[0]
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_compute);
criterion_main!(benches);
