//! Parser benchmarks.
//!
//! Run with: `cargo bench --package ifjc-par`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use ifjc_lex::Lexer;
use ifjc_par::Parser;

fn parse_class_count(source: &str) -> usize {
    let stream = Lexer::new(source).tokenize().expect("lexing failed");
    Parser::new(stream)
        .parse()
        .map(|program| program.classes.len())
        .unwrap_or(0)
}

fn bench_parser_statements(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser");

    let source = "import \"ifj25\" for Ifj\nclass Main {\nstatic main() {\nvar x = 1 + 2\nIfj.write(x)\n}\n}\n";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("small_program", |b| {
        b.iter(|| parse_class_count(black_box(source)))
    });

    group.finish();
}

fn bench_parser_expressions(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_expressions");

    let long_sum = format!(
        "class C {{\nstatic main() {{\nvar x = {}\n}}\n}}\n",
        (1..=50).map(|i| i.to_string()).collect::<Vec<_>>().join(" + ")
    );
    let nested = format!(
        "class C {{\nstatic main() {{\nvar x = {}1+2{}\n}}\n}}\n",
        "(".repeat(50),
        ")".repeat(50)
    );

    group.bench_function("long_operator_chain", |b| {
        b.iter(|| parse_class_count(black_box(&long_sum)))
    });

    group.bench_function("deep_parentheses", |b| {
        b.iter(|| parse_class_count(black_box(&nested)))
    });

    group.finish();
}

fn bench_parser_control_flow(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_control_flow");

    let source = r#"
class Main {
    static main() {
        var i = 0
        while (i < 100) {
            if (i < 50) {
                i = i + 1
            } else {
                i = i + 2
            }
        }
    }
}
"#;

    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("loops_and_branches", |b| {
        b.iter(|| parse_class_count(black_box(source)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parser_statements,
    bench_parser_expressions,
    bench_parser_control_flow
);
criterion_main!(benches);
