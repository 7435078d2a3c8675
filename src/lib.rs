//! GraphPath - 不可变加权图上的单源最短路径引擎
//!
//! - 一次性构建、构建后只读的图模型，构建时校验边端点
//! - Dijkstra 最短路径：二叉堆优先队列，按 (距离, 顶点负载) 确定出队顺序
//! - BFS/DFS 遍历与 Prim 最小生成树
//! - JSON 图描述导入

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;
pub mod import;

// 重导出常用类型
pub use algorithm::{shortest_paths, ShortestPaths};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, Vertex, VertexDistance};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
