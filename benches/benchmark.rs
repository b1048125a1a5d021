use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pseudolex::{scan, ScanOptions, Tokenizer};

const PROGRAM: &str = include_str!("../demos/moyenne.algo");

fn bench_scan_line(c: &mut Criterion) {
    c.bench_function("scan assignment line", |b| {
        b.iter(|| scan(black_box("        somme <- somme + notes[i] * 2.5")))
    });
}

fn bench_tokenize_program(c: &mut Criterion) {
    let plain = Tokenizer::new();
    let with_comments = Tokenizer::with_options(ScanOptions {
        recognize_comments: true,
    });

    c.bench_function("tokenize program", |b| {
        b.iter(|| plain.tokenize(black_box(PROGRAM)))
    });
    c.bench_function("tokenize program with comments", |b| {
        b.iter(|| with_comments.tokenize(black_box(PROGRAM)))
    });
}

criterion_group!(benches, bench_scan_line, bench_tokenize_program);
criterion_main!(benches);
