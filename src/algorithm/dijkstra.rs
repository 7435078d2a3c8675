//! Dijkstra 单源最短路径
//!
//! 优先队列按 `(累计距离, 顶点负载)` 升序出队，负载作为平局裁决键保证输出确定。
//! 采用惰性删除：同一顶点的旧候选不做 decrease-key，出队时若顶点已确定则丢弃。
//! 所有顶点确定后立即退出，队列中剩余的过期条目不再出队

use crate::error::Result;
use crate::graph::{Graph, Vertex, VertexData, Weight};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};
use tracing::{debug, trace};

/// 优先队列条目
///
/// 字段顺序即排序键：先距离，后顶点负载
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierEntry<T> {
    distance: Weight,
    vertex: Vertex<T>,
}

/// 最小优先队列（二叉堆）
#[derive(Debug)]
pub struct Frontier<T> {
    heap: BinaryHeap<Reverse<FrontierEntry<T>>>,
}

impl<T: Ord> Frontier<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    /// 入队候选
    pub fn push(&mut self, vertex: Vertex<T>, distance: Weight) {
        self.heap.push(Reverse(FrontierEntry { distance, vertex }));
    }

    /// 取出距离最小的候选，距离相同时负载较小者优先
    pub fn pop(&mut self) -> Option<(Vertex<T>, Weight)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.vertex, entry.distance))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T: Ord> Default for Frontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// 运行统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DijkstraStats {
    /// 入队次数（含起点）
    pub pushed: usize,
    /// 出队时因顶点已确定而丢弃的条目数
    pub stale_skipped: usize,
    /// 退出时仍留在队列中的条目数
    pub abandoned: usize,
}

/// 最短路径结果
///
/// `visited_order` 与 `distances` 等长且按下标对齐，顺序即确定顺序
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPaths<T> {
    visited_order: Vec<Vertex<T>>,
    distances: Vec<Weight>,
    stats: DijkstraStats,
}

impl<T> ShortestPaths<T> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            visited_order: Vec::with_capacity(capacity),
            distances: Vec::with_capacity(capacity),
            stats: DijkstraStats::default(),
        }
    }

    /// 按确定顺序排列的顶点
    pub fn visited_order(&self) -> &[Vertex<T>] {
        &self.visited_order
    }

    /// 与 `visited_order` 对齐的最短距离
    pub fn distances(&self) -> &[Weight] {
        &self.distances
    }

    pub fn stats(&self) -> &DijkstraStats {
        &self.stats
    }

    /// 遍历 (顶点, 距离)
    pub fn iter(&self) -> impl Iterator<Item = (&Vertex<T>, Weight)> {
        self.visited_order
            .iter()
            .zip(self.distances.iter().copied())
    }

    /// 已确定的顶点数量
    pub fn len(&self) -> usize {
        self.visited_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visited_order.is_empty()
    }

    pub fn into_parts(self) -> (Vec<Vertex<T>>, Vec<Weight>) {
        (self.visited_order, self.distances)
    }
}

impl<T: PartialEq> ShortestPaths<T> {
    /// 查询某顶点的最短距离，不可达时返回 `None`
    pub fn distance_to(&self, vertex: &Vertex<T>) -> Option<Weight> {
        self.visited_order
            .iter()
            .position(|v| v == vertex)
            .map(|i| self.distances[i])
    }
}

/// 计算从 `start` 出发到所有可达顶点的最短距离
///
/// `start` 不在图中时返回 [`crate::Error::VertexNotFound`]。不可达顶点不出现在结果中
pub fn shortest_paths<T: VertexData>(
    graph: &Graph<T>,
    start: &Vertex<T>,
) -> Result<ShortestPaths<T>> {
    graph.require(start)?;

    let total = graph.len();
    let mut settled: HashSet<Vertex<T>> = HashSet::with_capacity(total);
    let mut frontier = Frontier::new();
    let mut result = ShortestPaths::with_capacity(total);

    frontier.push(start.clone(), 0);
    result.stats.pushed += 1;

    while settled.len() < total {
        let Some((vertex, distance)) = frontier.pop() else {
            break;
        };

        if settled.contains(&vertex) {
            result.stats.stale_skipped += 1;
            continue;
        }

        trace!(vertex = ?vertex.data(), distance, "settled");
        settled.insert(vertex.clone());

        for neighbor in graph.neighbors(&vertex)? {
            if !settled.contains(neighbor.vertex()) {
                frontier.push(
                    neighbor.vertex().clone(),
                    distance.saturating_add(neighbor.distance()),
                );
                result.stats.pushed += 1;
            }
        }

        result.visited_order.push(vertex);
        result.distances.push(distance);
    }

    result.stats.abandoned = frontier.len();

    debug!(
        start = ?start.data(),
        settled = result.len(),
        total,
        pushed = result.stats.pushed,
        stale_skipped = result.stats.stale_skipped,
        abandoned = result.stats.abandoned,
        "shortest paths computed"
    );

    Ok(result)
}
