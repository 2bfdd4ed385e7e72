use borderroute_lib::{find_route, load_border_graph, BorderGraph};
use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use std::hint::black_box;
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/countries.json")
}

static GRAPH: Lazy<BorderGraph> =
    Lazy::new(|| load_border_graph(&fixture_path()).expect("fixture loads"));

fn benchmark_pathfinding(c: &mut Criterion) {
    let graph = &*GRAPH;

    c.bench_function("bfs_cze_ita", |b| {
        b.iter(|| {
            let route = find_route(graph, "CZE", "ITA").expect("route exists");
            black_box(route.hop_count())
        });
    });

    c.bench_function("bfs_prt_rus", |b| {
        b.iter(|| {
            let route = find_route(graph, "PRT", "RUS").expect("route exists");
            black_box(route.codes().len())
        });
    });

    c.bench_function("bfs_unreachable_cze_isl", |b| {
        b.iter(|| black_box(find_route(graph, "CZE", "ISL").is_err()));
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
