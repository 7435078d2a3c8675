//! 图算法模块
//!
//! 包含 Dijkstra 最短路径、BFS/DFS 遍历和 Prim 最小生成树

mod dijkstra;
mod mst;
mod search;

pub use dijkstra::{shortest_paths, DijkstraStats, Frontier, ShortestPaths};
pub use mst::{prim, SpanningTree};
pub use search::{bfs, dfs};
