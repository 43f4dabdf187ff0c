use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pure_html::{clean_html, CleanOptions};

pub fn bench(c: &mut Criterion) {
    let article = include_str!("../resources/tests/article.html").to_string();
    let landing = include_str!("../resources/tests/landing.html").to_string();
    let options = CleanOptions::default();

    c.bench_function("clean article", |b| {
        b.iter(|| clean_html(black_box(&article), &options))
    });
    c.bench_function("clean landing", |b| {
        b.iter(|| clean_html(black_box(&landing), &options))
    });

    let large = landing.repeat(200);
    c.bench_function("clean large page", |b| {
        b.iter(|| clean_html(black_box(&large), &options))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = bench
}
criterion_main!(benches);
