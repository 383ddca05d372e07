//! Criterion benchmarks for schemalens.
//!
//! Covers the stages of the query pipeline:
//! - Spelling suggestions for single words
//! - Query variation generation
//! - TF-IDF table scoring as the schema grows
//! - End-to-end query processing

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use schemalens::relevance::RelevanceScorer;
use schemalens::schema::{ColumnSchema, Schema, TableSchema};
use schemalens::system::SchemaSystem;
use std::hint::black_box;

const SAMPLE_SCHEMA: &str = include_str!("../demos/sample_schema.json");

/// Generate a schema with `tables` tables of eight columns each.
fn generate_schema(tables: usize) -> Schema {
    let subjects = [
        "order", "user", "product", "invoice", "payment", "shipment", "category", "review",
    ];
    let attributes = [
        ("id", "integer", "Unique identifier"),
        ("name", "string", "Display name"),
        ("created_date", "date", "Date when the record was created"),
        ("total_amount", "decimal", "Total amount charged"),
        ("status", "string", "Current processing status"),
        ("owner_id", "integer", "Reference to the owning user"),
        ("notes", "string", "Free text notes"),
        ("price", "decimal", "Unit price"),
    ];

    let mut schema = Schema::new();
    for i in 0..tables {
        let subject = subjects[i % subjects.len()];
        let columns = attributes
            .iter()
            .map(|(suffix, column_type, description)| {
                ColumnSchema::new(format!("{subject}_{suffix}"), *column_type)
                    .with_description(format!("{description} of the {subject}"))
            })
            .collect();
        schema.insert_table(format!("{subject}s_{i}"), TableSchema::new(columns));
    }
    schema
}

/// Benchmark per-word suggestions.
fn bench_suggestions(c: &mut Criterion) {
    let mut group = c.benchmark_group("suggestions");
    group.sample_size(20);

    let schema = Schema::from_json_str(SAMPLE_SCHEMA).expect("sample schema parses");
    let system = SchemaSystem::new().expect("default system");
    let misspellings = vec!["custmer", "ordr", "adress", "emial", "prodcut"];

    // warm the vocabulary cache
    system.vocabulary(&schema);

    group.bench_function("suggest_single_word", |b| {
        b.iter(|| black_box(system.suggest(black_box("custmer"), &schema)))
    });

    group.throughput(Throughput::Elements(misspellings.len() as u64));
    group.bench_function("suggest_batch_words", |b| {
        b.iter(|| {
            for word in &misspellings {
                black_box(system.suggest(black_box(word), &schema));
            }
        })
    });

    group.bench_function("query_variations", |b| {
        b.iter(|| {
            black_box(system.suggest_query_corrections(black_box("custmer ordr adress"), &schema))
        })
    });

    group.finish();
}

/// Benchmark relevance scoring against growing schemas.
fn bench_relevance(c: &mut Criterion) {
    let mut group = c.benchmark_group("relevance");
    let scorer = RelevanceScorer::new().expect("default scorer");

    for tables in [3, 30, 300] {
        let schema = generate_schema(tables);
        group.throughput(Throughput::Elements(tables as u64));
        group.bench_with_input(BenchmarkId::new("score", tables), &schema, |b, schema| {
            b.iter(|| black_box(scorer.score(black_box("order total amount"), schema, 0.1)))
        });
    }

    group.finish();
}

/// Benchmark the full pipeline.
fn bench_process(c: &mut Criterion) {
    let mut group = c.benchmark_group("process");
    group.sample_size(20);

    let schema = Schema::from_json_str(SAMPLE_SCHEMA).expect("sample schema parses");
    let system = SchemaSystem::new().expect("default system");

    group.bench_function("process_sample_query", |b| {
        b.iter(|| black_box(system.process(black_box("custmer orders"), &schema)))
    });

    group.bench_function("process_cold_cache", |b| {
        b.iter(|| {
            system.reset();
            black_box(system.process(black_box("custmer orders"), &schema))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_suggestions, bench_relevance, bench_process);

criterion_main!(benches);
