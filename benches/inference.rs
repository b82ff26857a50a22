//! Model scoring benchmark: feature vector → fallback scorer and handle.

use alua_sentinel::config::ScoringConfig;
use alua_sentinel::features::{FeatureVector, FEATURE_DIM};
use alua_sentinel::model::{FallbackScorer, ModelHandle};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_fallback_scorer(c: &mut Criterion) {
    let scorer = FallbackScorer::default();
    let fv = FeatureVector::new(vec![0.4f32; FEATURE_DIM], 0);

    c.bench_function("fallback_score_10d", |b| b.iter(|| scorer.score(black_box(&fv))));
}

fn bench_handle_disabled(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let handle = ModelHandle::disabled(&ScoringConfig::default());
    let fv = FeatureVector::new(vec![0.4f32; FEATURE_DIM], 0);
    rt.block_on(handle.initialize());

    c.bench_function("handle_score_disabled", |b| {
        b.to_async(&rt).iter(|| handle.score(black_box(&fv)))
    });
}

criterion_group!(benches, bench_fallback_scorer, bench_handle_disabled);
criterion_main!(benches);
