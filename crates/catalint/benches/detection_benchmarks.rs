//! Detection and spellcheck performance benchmarks.
//!
//! Measures the pattern cascade on typical titles and the dictionary and brand
//! checks on description-length text.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use catalint::{Catalint, DetectionRequest, FieldType, MockOracle, PatternExtractor, SessionContext};

const TITLES: &[&str] = &[
    "LISA LARSON. Skulptur, stengods, Gustavsberg",
    "rolf lidberg papper litografi 1947 signerad",
    "FAT, stengods, Royal Copenhagen, Danmark. Niels Thorsson",
    "TAVLA, Pablo Picasso (1881-1973), olja på duk",
    "SKÅL, glas, Bertil Vallien, Kosta Boda, 1980-tal",
    "VAS, glas, kristall, Orrefors",
    "TAVLA, olja på duk, landskap med hus",
];

/// Build description text with a misspelling every few words.
fn generate_description(words: usize) -> String {
    let vocabulary = [
        "skål", "porsling", "med", "blå", "dekor", "singerad", "i", "botten",
        "orrefos", "glas", "tallrick", "stengods", "nagg", "vid", "kanten",
    ];
    (0..words)
        .map(|i| vocabulary[i % vocabulary.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

/// Benchmark the pattern cascade alone.
fn bench_pattern_cascade(c: &mut Criterion) {
    let mut group = c.benchmark_group("pattern_cascade");
    let extractor = PatternExtractor::new();

    for (i, title) in TITLES.iter().enumerate() {
        group.bench_with_input(BenchmarkId::new("extract", i), title, |b, title| {
            b.iter(|| black_box(extractor.extract(title)))
        });
    }

    group.finish();
}

/// Benchmark full detection, rules only and with the mock oracle.
fn bench_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("detection");
    let rules = Catalint::new();
    let mocked = Catalint::new().with_oracle(MockOracle::new());
    let requests: Vec<DetectionRequest> = TITLES.iter().map(|t| DetectionRequest::new(*t)).collect();

    group.bench_function("rules_only", |b| {
        b.iter(|| {
            for request in &requests {
                black_box(rules.detect_artist(request));
            }
        })
    });

    group.bench_function("mock_oracle", |b| {
        b.iter(|| {
            for request in &requests {
                black_box(mocked.detect_artist(request));
            }
        })
    });

    group.finish();
}

/// Benchmark spellchecking text of increasing length.
fn bench_spellcheck(c: &mut Criterion) {
    let mut group = c.benchmark_group("spellcheck");
    let catalint = Catalint::new();
    let session = SessionContext::new();

    for words in [10, 100, 1000].iter() {
        let text = generate_description(*words);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("words", words), &text, |b, text| {
            b.iter(|| black_box(catalint.spellcheck(text, FieldType::Description, &session)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pattern_cascade, bench_detection, bench_spellcheck);
criterion_main!(benches);
