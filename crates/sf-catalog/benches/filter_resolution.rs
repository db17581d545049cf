//! Benchmarks for category tree loading and filter resolution.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sf_catalog::{CategoryTree, parse_json, resolve, resolve_scoped};

/// Build a JSON snapshot with `breadth` top-level categories of `children` subcategories each.
fn create_snapshot(breadth: usize, children: usize) -> String {
    let categories: Vec<String> = (0..breadth)
        .map(|i| {
            let subcategories: Vec<String> = (0..children)
                .map(|j| {
                    format!(r#"{{ "id": "{i}-{j}", "slug": "cat-{i}-sub-{j}", "name": "Sub {j}" }}"#)
                })
                .collect();
            format!(
                r#"{{ "id": "{i}", "slug": "cat-{i}", "name": "Category {i}", "subcategories": [{}] }}"#,
                subcategories.join(",")
            )
        })
        .collect();
    format!("[{}]", categories.join(","))
}

fn load_tree(breadth: usize, children: usize) -> CategoryTree {
    parse_json(&create_snapshot(breadth, children)).unwrap()
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    for (breadth, children) in [(10, 5), (50, 20), (200, 50)] {
        let tree = load_tree(breadth, children);

        group.bench_with_input(
            BenchmarkId::new("parent_hit", format!("b{breadth}_c{children}")),
            &tree,
            |b, tree| b.iter(|| resolve(tree, Some("cat-3"))),
        );
    }

    let tree = load_tree(50, 20);

    group.bench_function("miss", |b| b.iter(|| resolve(&tree, Some("nonexistent"))));

    group.bench_function("unconstrained", |b| b.iter(|| resolve(&tree, None)));

    group.bench_function("scoped", |b| {
        b.iter(|| resolve_scoped(&tree, "cat-3", "cat-3-sub-7"))
    });

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_snapshot");

    for (breadth, children, label) in [(10, 5, "small"), (50, 20, "medium"), (200, 50, "large")] {
        let snapshot = create_snapshot(breadth, children);

        group.bench_function(label, |b| b.iter(|| parse_json(&snapshot).unwrap()));
    }

    group.finish();
}

criterion_group!(benches, bench_resolve, bench_parse);
criterion_main!(benches);
