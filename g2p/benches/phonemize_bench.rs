//! Benchmarks for the G2P engines and the notation mapper.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use phonik_g2p::{compact, create_phonemizer, G2PEngine, Language};

const SENTENCE: &str = "the quick brown fox jumps over the lazy dog";

fn bench_phonemize(c: &mut Criterion) {
    let mut group = c.benchmark_group("phonemize");

    for engine in [G2PEngine::Lexicon, G2PEngine::Rule] {
        let g2p = create_phonemizer(engine, Language::EnUs).unwrap();
        group.bench_function(format!("{engine:?}"), |b| {
            b.iter(|| g2p.phonemize(black_box(SENTENCE)).unwrap());
        });
    }

    group.finish();
}

fn bench_compact(c: &mut Criterion) {
    let g2p = create_phonemizer(G2PEngine::Rule, Language::EnUs).unwrap();
    let phonemes = g2p.phonemize(SENTENCE).unwrap();

    c.bench_function("compact", |b| {
        b.iter(|| compact(black_box(&phonemes), Language::EnUs));
    });
}

criterion_group!(benches, bench_phonemize, bench_compact);
criterion_main!(benches);
