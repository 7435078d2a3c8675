//! 最短路径基准测试

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graphpath::algorithm::shortest_paths;
use graphpath::graph::{Edge, Graph, Vertex};

/// 网格图：每个顶点连接右侧和下方的邻居
fn grid(side: u32) -> Graph<u32> {
    let id = |row: u32, col: u32| Vertex::new(row * side + col);
    let mut edges = Vec::new();
    for row in 0..side {
        for col in 0..side {
            if col + 1 < side {
                edges.push(Edge::new(id(row, col), id(row, col + 1), u64::from((row + col) % 7)));
            }
            if row + 1 < side {
                edges.push(Edge::new(id(row, col), id(row + 1, col), u64::from((row * col) % 5 + 1)));
            }
        }
    }
    Graph::undirected((0..side * side).map(Vertex::new), edges).expect("grid is consistent")
}

fn bench_shortest_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_paths");
    for side in [10u32, 50, 100] {
        let graph = grid(side);
        group.bench_with_input(BenchmarkId::from_parameter(side * side), &graph, |b, graph| {
            b.iter(|| shortest_paths(black_box(graph), &Vertex::new(0)).expect("start exists"))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_shortest_paths);
criterion_main!(benches);
