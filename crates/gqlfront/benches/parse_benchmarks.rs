mod fixtures;

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use gqlfront::ParseOptions;
use gqlfront::Source;

// ─── Group 1: Document Parsing ───────────────────────────

fn document_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("document_parse");

    let inputs: &[(&str, &str)] = &[
        ("schema", fixtures::SCHEMA),
        ("query", fixtures::QUERY),
        ("query (minified)", fixtures::MINIFIED_QUERY),
    ];

    for &(label, body) in inputs {
        let source = Source::anonymous(body);
        group.throughput(Throughput::Bytes(body.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("with_locations", label),
            &source,
            |b, source| {
                b.iter(|| {
                    black_box(gqlfront::parse(source, ParseOptions::default()))
                })
            },
        );
        group.bench_with_input(
            BenchmarkId::new("no_location", label),
            &source,
            |b, source| {
                let options = ParseOptions::default().with_no_location(true);
                b.iter(|| black_box(gqlfront::parse(source, options)))
            },
        );
    }

    group.finish();
}

// ─── Group 2: Generated Documents ────────────────────────

fn generated_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("generated_parse");

    let nested = Source::anonymous(fixtures::deeply_nested_query(30));
    group.bench_function("nested_depth_30", |b| {
        b.iter(|| black_box(gqlfront::parse(&nested, ParseOptions::default())))
    });

    let many_ops = Source::anonymous(fixtures::many_operations(50));
    group.bench_function("many_operations_50", |b| {
        b.iter(|| black_box(gqlfront::parse(&many_ops, ParseOptions::default())))
    });

    let many_types = Source::anonymous(fixtures::many_types(200));
    group.bench_function("many_types_200", |b| {
        b.iter(|| black_box(gqlfront::parse(&many_types, ParseOptions::default())))
    });

    group.finish();
}

// ─── Group 3: Lexer (Tokenization Only) ──────────────────

fn lexer(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    for &(label, body) in &[("schema", fixtures::SCHEMA), ("query", fixtures::QUERY)] {
        let source = Source::anonymous(body);
        group.throughput(Throughput::Bytes(body.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(label), &source, |b, source| {
            b.iter(|| black_box(gqlfront::tokenize(source)))
        });
    }

    group.finish();
}

// ─── Group 4: Error Reporting ────────────────────────────

fn error_reporting(c: &mut Criterion) {
    let mut group = c.benchmark_group("error_reporting");

    let broken = Source::anonymous(format!("{}\ntype Broken {{ f: }}", fixtures::SCHEMA));
    group.bench_function("parse_and_format_detailed", |b| {
        b.iter(|| {
            let err = gqlfront::parse(&broken, ParseOptions::default()).unwrap_err();
            black_box(err.format_detailed())
        })
    });

    group.finish();
}

// ─── Criterion Entrypoint ────────────────────────────────

criterion_group!(benches, document_parse, generated_parse, lexer, error_reporting);
criterion_main!(benches);
