//! 图数据结构
//!
//! 图由完整的顶点集合和边集合一次性构建，构建后只读。
//! 邻接表在构建时派生：无向图的每条边在两个方向各产生一个条目，有向图只产生 `u -> v`

use super::distance::VertexDistance;
use super::edge::Edge;
use super::vertex::{Vertex, VertexData};
use crate::error::{Error, Result};
use indexmap::{IndexMap, IndexSet};
use tracing::debug;

/// 邻接表：顶点 -> 一跳可达的 (邻居, 边权重)
pub type Adjacency<T> = IndexMap<Vertex<T>, IndexSet<VertexDistance<T>>>;

/// 不可变图
#[derive(Debug, Clone)]
pub struct Graph<T> {
    /// 顶点集合
    vertices: IndexSet<Vertex<T>>,
    /// 边集合
    edges: IndexSet<Edge<T>>,
    /// 是否有向
    directed: bool,
    /// 邻接表
    adjacency: Adjacency<T>,
}

impl<T: VertexData> Graph<T> {
    /// 构建图
    ///
    /// 任一边的端点不在顶点集合中时返回 [`Error::GraphConsistency`]，不会产生部分构建的图
    pub fn new<V, E>(vertices: V, edges: E, directed: bool) -> Result<Self>
    where
        V: IntoIterator<Item = Vertex<T>>,
        E: IntoIterator<Item = Edge<T>>,
    {
        let vertices: IndexSet<Vertex<T>> = vertices.into_iter().collect();
        let edges: IndexSet<Edge<T>> = edges.into_iter().collect();

        let mut adjacency: Adjacency<T> = vertices
            .iter()
            .map(|v| (v.clone(), IndexSet::new()))
            .collect();

        for edge in &edges {
            for endpoint in [edge.u(), edge.v()] {
                if !vertices.contains(endpoint) {
                    return Err(Error::GraphConsistency(format!("{:?}", endpoint.data())));
                }
            }

            if let Some(neighbors) = adjacency.get_mut(edge.u()) {
                neighbors.insert(VertexDistance::new(edge.v().clone(), edge.weight()));
            }
            if !directed {
                if let Some(neighbors) = adjacency.get_mut(edge.v()) {
                    neighbors.insert(VertexDistance::new(edge.u().clone(), edge.weight()));
                }
            }
        }

        debug!(
            vertices = vertices.len(),
            edges = edges.len(),
            directed,
            "graph built"
        );

        Ok(Self {
            vertices,
            edges,
            directed,
            adjacency,
        })
    }

    /// 构建无向图
    pub fn undirected<V, E>(vertices: V, edges: E) -> Result<Self>
    where
        V: IntoIterator<Item = Vertex<T>>,
        E: IntoIterator<Item = Edge<T>>,
    {
        Self::new(vertices, edges, false)
    }

    /// 构建有向图
    pub fn directed<V, E>(vertices: V, edges: E) -> Result<Self>
    where
        V: IntoIterator<Item = Vertex<T>>,
        E: IntoIterator<Item = Edge<T>>,
    {
        Self::new(vertices, edges, true)
    }

    /// 获取顶点的邻居（一条边可达）及边权重
    pub fn neighbors(&self, vertex: &Vertex<T>) -> Result<&IndexSet<VertexDistance<T>>> {
        self.adjacency
            .get(vertex)
            .ok_or_else(|| Error::VertexNotFound(format!("{:?}", vertex.data())))
    }

    /// 顶点是否属于该图
    pub fn contains(&self, vertex: &Vertex<T>) -> bool {
        self.vertices.contains(vertex)
    }

    /// 要求顶点属于该图，否则返回 [`Error::VertexNotFound`]
    pub fn require(&self, vertex: &Vertex<T>) -> Result<()> {
        if self.contains(vertex) {
            Ok(())
        } else {
            Err(Error::VertexNotFound(format!("{:?}", vertex.data())))
        }
    }
}

impl<T> Graph<T> {
    /// 顶点数量
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// 边数量
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// 所有顶点（按输入顺序）
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<T>> {
        self.vertices.iter()
    }

    /// 所有边（按输入顺序）
    pub fn edges(&self) -> impl Iterator<Item = &Edge<T>> {
        self.edges.iter()
    }

    pub fn adjacency(&self) -> &Adjacency<T> {
        &self.adjacency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(label: &str) -> Vertex<String> {
        Vertex::new(label.to_string())
    }

    fn e(u: &str, w: &str, weight: u64) -> Edge<String> {
        Edge::new(v(u), v(w), weight)
    }

    fn neighbor_pairs(graph: &Graph<String>, label: &str) -> Vec<(String, u64)> {
        graph
            .neighbors(&v(label))
            .unwrap()
            .iter()
            .map(|n| (n.vertex().data().clone(), n.distance()))
            .collect()
    }

    #[test]
    fn test_graph_undirected_adjacency() {
        let graph = Graph::undirected(
            [v("A"), v("B"), v("C")],
            [e("A", "B", 4), e("B", "C", 2)],
        )
        .unwrap();

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert!(!graph.is_directed());

        assert_eq!(neighbor_pairs(&graph, "A"), vec![("B".to_string(), 4)]);
        assert_eq!(
            neighbor_pairs(&graph, "B"),
            vec![("A".to_string(), 4), ("C".to_string(), 2)]
        );
        assert_eq!(neighbor_pairs(&graph, "C"), vec![("B".to_string(), 2)]);
    }

    #[test]
    fn test_graph_directed_adjacency() {
        let graph = Graph::directed([v("A"), v("B")], [e("A", "B", 1)]).unwrap();

        assert!(graph.is_directed());
        assert_eq!(neighbor_pairs(&graph, "A"), vec![("B".to_string(), 1)]);
        assert!(neighbor_pairs(&graph, "B").is_empty());
    }

    #[test]
    fn test_duplicate_vertices_collapse() {
        let graph = Graph::undirected([v("A"), v("A"), v("B")], [e("A", "B", 1)]).unwrap();
        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn test_parallel_edges_keep_distinct_weights() {
        let graph = Graph::undirected(
            [v("A"), v("B")],
            [e("A", "B", 1), e("A", "B", 5), e("A", "B", 1)],
        )
        .unwrap();

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(
            neighbor_pairs(&graph, "A"),
            vec![("B".to_string(), 1), ("B".to_string(), 5)]
        );
    }

    #[test]
    fn test_missing_source_endpoint_fails() {
        let err = Graph::undirected([v("B")], [e("A", "B", 1)]).unwrap_err();
        match err {
            Error::GraphConsistency(vertex) => assert_eq!(vertex, "\"A\""),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_target_endpoint_fails() {
        let err = Graph::directed([v("A")], [e("A", "Z", 1)]).unwrap_err();
        assert!(matches!(err, Error::GraphConsistency(ref vertex) if vertex == "\"Z\""));
    }

    #[test]
    fn test_neighbors_of_unknown_vertex() {
        let graph = Graph::undirected([v("A")], Vec::<Edge<String>>::new()).unwrap();
        assert!(graph.contains(&v("A")));
        assert!(!graph.contains(&v("X")));
        assert!(graph.require(&v("A")).is_ok());
        assert!(matches!(graph.require(&v("X")), Err(Error::VertexNotFound(_))));
        assert!(matches!(
            graph.neighbors(&v("X")),
            Err(Error::VertexNotFound(_))
        ));
    }

    #[test]
    fn test_empty_graph() {
        let graph: Graph<u32> =
            Graph::undirected(Vec::<Vertex<u32>>::new(), Vec::<Edge<u32>>::new()).unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.vertices().count(), 0);
        assert_eq!(graph.edges().count(), 0);
    }
}
