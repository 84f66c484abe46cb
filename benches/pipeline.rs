use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};

use tendigit::{hash, reduce, source::RandomSource, Config};

fn pipeline_template(c: &mut Criterion, source: RandomSource) {
    let mut group = c.benchmark_group("pipeline");
    let config = Config::default();
    let mut rng = source.rng();

    group.bench_function(&format!("generate with {} source", source), |b| {
        b.iter(|| tendigit::generate(black_box(&config), &mut rng).unwrap())
    });

    group.finish();
}

fn pipeline(c: &mut Criterion) {
    pipeline_template(c, RandomSource::Secure);
    pipeline_template(c, RandomSource::Insecure);
    pipeline_template(c, RandomSource::Seeded([0; 32]));
}

fn stages(c: &mut Criterion) {
    let rng = &mut StdRng::seed_from_u64(0);
    let salted = hash::hash_with_salt("test", 6, rng);
    let digest = hash::double_hash_base64(&salted);
    let sum = reduce::calculate_character_sum(&digest);

    c.bench_function("salted hash", |b| {
        b.iter(|| hash::hash_with_salt(black_box("test"), 6, rng))
    });
    c.bench_function("double hash", |b| {
        b.iter(|| hash::double_hash_base64(black_box(&salted)))
    });
    c.bench_function("character sum", |b| {
        b.iter(|| reduce::calculate_character_sum(black_box(&digest)))
    });
    c.bench_function("reduce", |b| {
        b.iter(|| reduce::reduce_to_ten_digits(black_box(&sum)).unwrap())
    });
}

criterion_group!(benches, pipeline, stages);
criterion_main!(benches);
