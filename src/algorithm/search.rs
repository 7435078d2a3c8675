//! 广度优先与深度优先遍历
//!
//! 邻居按邻接表顺序（即输入边的顺序）访问，因此遍历顺序是确定的

use crate::error::Result;
use crate::graph::{Graph, Vertex, VertexData};
use std::collections::{HashSet, VecDeque};

/// BFS，返回访问顺序
///
/// 顶点在入队时即标记为已访问
pub fn bfs<T: VertexData>(graph: &Graph<T>, start: &Vertex<T>) -> Result<Vec<Vertex<T>>> {
    graph.require(start)?;

    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    let mut order = Vec::new();

    visited.insert(start.clone());
    order.push(start.clone());
    queue.push_back(start.clone());

    while let Some(current) = queue.pop_front() {
        for neighbor in graph.neighbors(&current)? {
            let vertex = neighbor.vertex();
            if visited.insert(vertex.clone()) {
                order.push(vertex.clone());
                queue.push_back(vertex.clone());
            }
        }
    }

    Ok(order)
}

/// DFS，返回访问顺序
///
/// 与递归先序遍历的顺序一致，使用显式栈避免深图导致栈溢出
pub fn dfs<T: VertexData>(graph: &Graph<T>, start: &Vertex<T>) -> Result<Vec<Vertex<T>>> {
    graph.require(start)?;

    let mut visited = HashSet::new();
    let mut stack = vec![start.clone()];
    let mut order = Vec::new();

    while let Some(current) = stack.pop() {
        if !visited.insert(current.clone()) {
            continue;
        }

        // 逆序压栈，使第一个邻居最先出栈
        for neighbor in graph.neighbors(&current)?.iter().rev() {
            if !visited.contains(neighbor.vertex()) {
                stack.push(neighbor.vertex().clone());
            }
        }

        order.push(current);
    }

    Ok(order)
}
