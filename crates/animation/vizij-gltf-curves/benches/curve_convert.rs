use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hashbrown::HashMap;
use vizij_gltf_curves::{
    channel_to_curves, AnimationChannel, Config, Interpolation, NodeIndex, PathKind,
    SamplerCache, SamplerCacheEntry, SamplerIndex, SamplerOutput,
};

const SAMPLES: usize = 2048;
const MORPH_TARGETS: usize = 52;

fn build_cache() -> SamplerCache {
    let times: Vec<f32> = (0..SAMPLES).map(|i| i as f32 / 60.0).collect();
    let rotations: Vec<[f32; 4]> = (0..SAMPLES)
        .map(|i| {
            let a = i as f32 * 0.01;
            [0.0, a.sin(), 0.0, a.cos()]
        })
        .collect();
    let weights: Vec<f32> = (0..SAMPLES * MORPH_TARGETS)
        .map(|i| (i % 100) as f32 / 100.0)
        .collect();

    [
        (
            SamplerIndex(0),
            SamplerCacheEntry::new(
                times.clone(),
                SamplerOutput::vec4s(rotations),
                Interpolation::Linear,
            ),
        ),
        (
            SamplerIndex(1),
            SamplerCacheEntry::new(times, SamplerOutput::floats(weights), Interpolation::Linear),
        ),
    ]
    .into_iter()
    .collect()
}

fn bench_convert(c: &mut Criterion) {
    let cache = build_cache();
    let mut morphs = HashMap::new();
    morphs.insert(NodeIndex(0), MORPH_TARGETS);
    let rotation = AnimationChannel::new(NodeIndex(0), PathKind::Rotation, SamplerIndex(0));
    let weights = AnimationChannel::new(NodeIndex(0), PathKind::Weights, SamplerIndex(1));

    let plain = Config::default();
    let with_tangents = Config {
        apply_tangents: true,
        ..Config::default()
    };

    c.bench_function("rotation_2048", |b| {
        b.iter(|| channel_to_curves(black_box(&rotation), &cache, &morphs, &plain).unwrap())
    });
    c.bench_function("rotation_2048_tangents", |b| {
        b.iter(|| channel_to_curves(black_box(&rotation), &cache, &morphs, &with_tangents).unwrap())
    });
    c.bench_function("weights_2048x52", |b| {
        b.iter(|| channel_to_curves(black_box(&weights), &cache, &morphs, &plain).unwrap())
    });
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);
