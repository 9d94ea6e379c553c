use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use routetrie::{validate, Tree};

const TEMPLATES: &[&str] = &[
    "/",
    "/home",
    "/users/:id",
    "/users/:id/posts/:post_id",
    "/product/:pid/review",
    "/api/v1/resource",
    "/assets/*filepath",
    "/download/*file",
];

fn validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");
    for template in TEMPLATES {
        group.throughput(Throughput::Bytes(template.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(template), template, |b, t| {
            b.iter(|| validate(black_box(t)))
        });
    }
    group.finish();
}

fn insertion(c: &mut Criterion) {
    c.bench_function("insert route table", |b| {
        b.iter(|| {
            let mut tree = Tree::new();
            for (i, template) in TEMPLATES.iter().enumerate() {
                tree.insert(black_box(template), i).unwrap();
            }
            tree
        })
    });
}

criterion_group!(benches, validation, insertion);
criterion_main!(benches);
