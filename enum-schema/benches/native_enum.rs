//! Benchmarks for member extraction and schema selection.
//!
//! Run with: cargo bench -p enum-schema

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use enum_schema::{
    ComponentsObject, EnumLike, EnumMember, OpenApiVersion, build_schema, partition,
};
use std::hint::black_box;

// =============================================================================
// Test Data Generation
// =============================================================================

/// Enum with `size` members, alternating string and numeric values.
fn mixed_enum(size: usize) -> EnumLike {
    EnumLike::from_members((0..size).map(|i| {
        let name = format!("Member{i}");
        if i % 2 == 0 {
            EnumMember::new(name, format!("member_{i}"))
        } else {
            EnumMember::new(name, i as u64)
        }
    }))
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_values");
    for size in [4, 32, 256] {
        let enum_like = mixed_enum(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &enum_like, |b, e| {
            b.iter(|| partition(black_box(e).extract_values()));
        });
    }
    group.finish();
}

fn bench_build_schema(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_schema");
    let enum_like = mixed_enum(32);
    for version in [OpenApiVersion::V3_0_3, OpenApiVersion::V3_1_0] {
        let components = ComponentsObject::new(version);
        group.bench_with_input(
            BenchmarkId::from_parameter(version),
            &components,
            |b, components| {
                b.iter(|| build_schema(black_box(&enum_like), black_box(components)));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_extract, bench_build_schema);
criterion_main!(benches);
