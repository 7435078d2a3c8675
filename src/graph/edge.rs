//! 边定义
//!
//! 边是一对顶点加上非负整数权重。结构相等（端点与权重都相同）用于集合去重；
//! 仅按权重比较的语义以命名方法单独提供，只在需要按权重排序的地方使用

use crate::graph::vertex::Vertex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// 边权重（非负）
pub type Weight = u64;

/// 边
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<T> {
    /// 起点
    u: Vertex<T>,
    /// 终点
    v: Vertex<T>,
    /// 权重
    weight: Weight,
}

impl<T> Edge<T> {
    /// 创建新边
    pub fn new(u: Vertex<T>, v: Vertex<T>, weight: Weight) -> Self {
        Self { u, v, weight }
    }

    /// 获取起点
    pub fn u(&self) -> &Vertex<T> {
        &self.u
    }

    /// 获取终点
    pub fn v(&self) -> &Vertex<T> {
        &self.v
    }

    /// 获取权重
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// 仅按权重比较，忽略端点
    pub fn cmp_by_weight(&self, other: &Self) -> Ordering {
        self.weight.cmp(&other.weight)
    }

    /// 两条边权重是否相同（端点可以不同）
    pub fn same_weight(&self, other: &Self) -> bool {
        self.weight == other.weight
    }

    /// 交换端点得到反向边
    pub fn reversed(&self) -> Self
    where
        T: Clone,
    {
        Self::new(self.v.clone(), self.u.clone(), self.weight)
    }
}
