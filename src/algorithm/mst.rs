//! Prim 最小生成树
//!
//! 使用带 decrease-key 的索引优先队列：每个树外顶点在队列中只有一个条目，
//! 优先级为 `(连接权重, 顶点, 树内端点)`，发现更轻的连接边时原地更新

use crate::error::{Error, Result};
use crate::graph::{Edge, Graph, Vertex, VertexData, Weight};
use priority_queue::PriorityQueue;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::HashSet;

/// 最小生成树
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanningTree<T> {
    /// 树边（父 -> 子），按加入顺序
    pub edges: Vec<Edge<T>>,
    /// 总权重
    pub total_weight: Weight,
}

type Candidates<T> = PriorityQueue<Vertex<T>, Reverse<(Weight, Vertex<T>, Vertex<T>)>>;

/// 从 `start` 开始运行 Prim 算法
///
/// 只接受无向图。图不连通时不存在生成树，返回 `Ok(None)`
pub fn prim<T: VertexData>(graph: &Graph<T>, start: &Vertex<T>) -> Result<Option<SpanningTree<T>>> {
    if graph.is_directed() {
        return Err(Error::DirectedGraph("Prim".to_string()));
    }
    graph.require(start)?;

    let mut in_tree = HashSet::with_capacity(graph.len());
    let mut candidates: Candidates<T> = PriorityQueue::new();
    let mut tree = SpanningTree {
        edges: Vec::with_capacity(graph.len().saturating_sub(1)),
        total_weight: 0,
    };

    in_tree.insert(start.clone());
    relax(graph, start, &in_tree, &mut candidates)?;

    while in_tree.len() < graph.len() {
        let Some((vertex, Reverse((weight, _, parent)))) = candidates.pop() else {
            break;
        };

        in_tree.insert(vertex.clone());
        relax(graph, &vertex, &in_tree, &mut candidates)?;

        tree.total_weight = tree.total_weight.saturating_add(weight);
        tree.edges.push(Edge::new(parent, vertex, weight));
    }

    if in_tree.len() < graph.len() {
        return Ok(None);
    }
    Ok(Some(tree))
}

/// 用 `vertex` 的邻边更新树外顶点的最轻连接
fn relax<T: VertexData>(
    graph: &Graph<T>,
    vertex: &Vertex<T>,
    in_tree: &HashSet<Vertex<T>>,
    candidates: &mut Candidates<T>,
) -> Result<()> {
    for neighbor in graph.neighbors(vertex)? {
        let target = neighbor.vertex();
        if !in_tree.contains(target) {
            // 优先级越大越先出队，Reverse 使更轻的边优先级更高
            candidates.push_increase(
                target.clone(),
                Reverse((neighbor.distance(), target.clone(), vertex.clone())),
            );
        }
    }
    Ok(())
}
