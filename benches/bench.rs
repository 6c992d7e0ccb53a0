use criterion::{criterion_group, criterion_main};

mod document_validation_benchmark {
    use criterion::{black_box, Criterion};
    use parkeo_core::{normalize, validate};

    pub fn criterion_benchmark(c: &mut Criterion) {
        let corpus = vec![
            "12345678Z",
            "X1234567L",
            "12345678A",
            "12.345.678-z",
            "not a document at all",
            "",
        ];

        c.bench_function("validate_documents", |b| {
            b.iter(|| {
                for raw in &corpus {
                    let normalized = normalize(raw);
                    black_box(validate(&normalized));
                }
            })
        });
    }
}

mod price_suggestion_benchmark {
    use criterion::{black_box, Criterion};
    use parkeo_core::{
        builtin_catalog, suggest, PRICE_SLIDER_MAX, PRICE_SLIDER_MIN, PRICE_SLIDER_STEP,
    };

    pub fn criterion_benchmark(c: &mut Criterion) {
        c.bench_function("suggest_across_slider", |b| {
            b.iter(|| {
                for zone in builtin_catalog().iter() {
                    let mut price = PRICE_SLIDER_MIN;
                    while price <= PRICE_SLIDER_MAX {
                        black_box(suggest(black_box(price), zone));
                        price += PRICE_SLIDER_STEP;
                    }
                }
            })
        });
    }
}

criterion_group!(
    document_benches,
    document_validation_benchmark::criterion_benchmark
);
criterion_group!(price_benches, price_suggestion_benchmark::criterion_benchmark);
criterion_main!(document_benches, price_benches);
