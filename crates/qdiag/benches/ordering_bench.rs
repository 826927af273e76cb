//! Benchmarks for natural ordering and diagram info dispatch
//!
//! Run with: cargo bench -p qdiag

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qdiag::{
    DiagramAnswer, DiagramInfo, DiagramRequest, Diagrammable, NamedQubit, SupportsDiagramInfo,
    diagram_info, diagram_info_or, natural_order_key,
};

/// Benchmark key construction for names of growing length
fn bench_natural_order_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("natural_order_key");

    for segments in &[1, 4, 16, 64] {
        let name: String = (0..*segments).map(|i| format!("q{i}_")).collect();
        group.bench_with_input(BenchmarkId::new("segments", segments), &name, |b, name| {
            b.iter(|| natural_order_key(black_box(name)));
        });
    }

    group.finish();
}

/// Benchmark sorting named qubits
fn bench_sort_qubits(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_named_qubits");

    for num_qubits in &[10, 100, 1000] {
        let qubits: Vec<NamedQubit> = (0..*num_qubits)
            .rev()
            .map(|i| NamedQubit::new(format!("anc{i}")))
            .collect();
        group.bench_with_input(
            BenchmarkId::new("sort", num_qubits),
            &qubits,
            |b, qubits| {
                b.iter(|| {
                    let mut sorted = qubits.clone();
                    sorted.sort();
                    sorted
                });
            },
        );
    }

    group.finish();
}

struct Hadamard;

impl SupportsDiagramInfo for Hadamard {
    fn diagram_info(&self, _request: &DiagramRequest) -> DiagramAnswer {
        "H".into()
    }
}

impl Diagrammable for Hadamard {
    fn as_diagram_info(&self) -> Option<&dyn SupportsDiagramInfo> {
        Some(self)
    }
}

struct Opaque;

impl Diagrammable for Opaque {}

/// Benchmark dispatch through the primary capability and the default path
fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");

    group.bench_function("primary", |b| {
        b.iter(|| diagram_info(black_box(&Hadamard), None));
    });

    group.bench_function("default", |b| {
        let fallback = DiagramInfo::single("?");
        b.iter(|| diagram_info_or(black_box(&Opaque), None, fallback.clone()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_natural_order_key,
    bench_sort_qubits,
    bench_dispatch
);
criterion_main!(benches);
