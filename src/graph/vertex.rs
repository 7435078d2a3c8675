//! 顶点定义
//!
//! 顶点只包装一个负载（标签/数据），相等性与哈希完全由负载决定

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// 可作为顶点负载的类型
///
/// 需要 `Ord` 用于优先队列的平局裁决，`Hash + Eq` 用于集合成员判断，
/// `Debug` 用于错误信息中标识顶点
pub trait VertexData: Clone + Eq + Hash + Ord + fmt::Debug {}

impl<T: Clone + Eq + Hash + Ord + fmt::Debug> VertexData for T {}

/// 顶点
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vertex<T> {
    data: T,
}

impl<T> Vertex<T> {
    /// 创建新顶点
    pub fn new(data: T) -> Self {
        Self { data }
    }

    /// 获取负载
    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn into_data(self) -> T {
        self.data
    }
}

impl<T> From<T> for Vertex<T> {
    fn from(data: T) -> Self {
        Self::new(data)
    }
}

impl<T: fmt::Display> fmt::Display for Vertex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.data.fmt(f)
    }
}
