//! Signature Benchmark
//!
//! Measures parse + reduce throughput for representative compiler output.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rpcdoc::signature::{MethodSignature, build_type_tree, parameter_type_trees};

// =============================================================================
// Test Signatures
// =============================================================================

const SIMPLE_SIGNATURE: &str = "(Lcom/example/Foo;)Lcom/example/Bar;";

const GENERIC_SIGNATURE: &str = "(Ljava/util/List<Lcom/example/Foo;>;[Lcom/example/Bar;)Ljava/util/Map<Ljava/lang/String;Lcom/example/Page<Lcom/example/Invoice;>;>;";

const BOUNDED_SIGNATURE: &str = "<T:Ljava/lang/Object;U::Ljava/lang/Comparable<TU;>;>(Ljava/util/Map<+TT;-TU;>;Ljava/util/List<*>;)Ljava/util/Optional<TT;>;^Ljava/io/IOException;";

fn bench_parameter_trees(c: &mut Criterion) {
    let mut group = c.benchmark_group("parameter_type_trees");
    for (name, signature) in [
        ("simple", SIMPLE_SIGNATURE),
        ("generic", GENERIC_SIGNATURE),
        ("bounded", BOUNDED_SIGNATURE),
    ] {
        group.throughput(Throughput::Bytes(signature.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), signature, |b, sig| {
            b.iter(|| black_box(parameter_type_trees(Some(black_box(sig)))))
        });
    }
    group.finish();
}

fn bench_return_tree(c: &mut Criterion) {
    c.bench_function("return_type_tree", |b| {
        b.iter(|| {
            let sig = MethodSignature::parse(black_box(GENERIC_SIGNATURE));
            black_box(sig.map(|sig| build_type_tree(&sig.return_type)))
        })
    });
}

criterion_group!(benches, bench_parameter_trees, bench_return_tree);

criterion_main!(benches);
