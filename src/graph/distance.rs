//! 顶点距离对
//!
//! 既用作邻接表条目（距离 = 边权重），也用作优先队列条目（距离 = 到源点的累计距离）

use crate::graph::edge::Weight;
use crate::graph::vertex::Vertex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// 顶点与距离
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VertexDistance<T> {
    vertex: Vertex<T>,
    distance: Weight,
}

impl<T> VertexDistance<T> {
    pub fn new(vertex: Vertex<T>, distance: Weight) -> Self {
        Self { vertex, distance }
    }

    pub fn vertex(&self) -> &Vertex<T> {
        &self.vertex
    }

    pub fn distance(&self) -> Weight {
        self.distance
    }

    /// 仅按距离比较，忽略顶点
    pub fn cmp_by_distance(&self, other: &Self) -> Ordering {
        self.distance.cmp(&other.distance)
    }

    /// 距离是否相同（顶点可以不同）
    pub fn same_distance(&self, other: &Self) -> bool {
        self.distance == other.distance
    }

    pub fn into_parts(self) -> (Vertex<T>, Weight) {
        (self.vertex, self.distance)
    }
}
