use criterion::{criterion_group, criterion_main, Criterion};

use cardseek::demo_data::synthetic_profiles;
use cardseek::SearchEngine;

fn bench_search(c: &mut Criterion) {
    let engine = SearchEngine::new(synthetic_profiles(10_000, 42));

    let queries = [
        ("single_word", "designer"),
        ("multi_word", "react developer"),
        ("synonym", "coder"),
        ("stop_words", "the developer for your business"),
        ("fuzzy_typo", "deisgner"),
        ("no_match", "qqqqzzzz"),
        ("empty", ""),
    ];

    let mut group = c.benchmark_group("search");
    for (name, query) in queries {
        group.bench_function(name, |b| b.iter(|| engine.search(query)));
    }
    group.finish();

    c.bench_function("suggestions", |b| b.iter(|| engine.suggestions("mi")));
    c.bench_function("trending", |b| b.iter(|| engine.trending()));
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
