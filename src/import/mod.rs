//! 数据导入模块
//!
//! 从 JSON 描述构建以字符串为负载的图

use crate::error::Result;
use crate::graph::{Edge, Graph, Vertex, Weight};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// 边记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub u: String,
    pub v: String,
    pub weight: Weight,
}

/// 图描述
///
/// ```json
/// {
///   "directed": false,
///   "vertices": ["A", "B"],
///   "edges": [{ "u": "A", "v": "B", "weight": 4 }]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDescription {
    #[serde(default)]
    pub directed: bool,
    pub vertices: Vec<String>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl GraphDescription {
    /// 从 JSON 字符串解析
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// 构建图，顶点一致性由 [`Graph::new`] 校验
    pub fn into_graph(self) -> Result<Graph<String>> {
        let vertices = self.vertices.into_iter().map(Vertex::new);
        let edges = self
            .edges
            .into_iter()
            .map(|e| Edge::new(Vertex::new(e.u), Vertex::new(e.v), e.weight));
        Graph::new(vertices, edges, self.directed)
    }
}

/// 从 JSON 文件读取图描述并构建图
pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Graph<String>> {
    let reader = BufReader::new(File::open(path)?);
    let description: GraphDescription = serde_json::from_reader(reader)?;
    description.into_graph()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Write;

    const SMALL: &str = r#"{
        "vertices": ["A", "B", "C"],
        "edges": [
            { "u": "A", "v": "B", "weight": 1 },
            { "u": "B", "v": "C", "weight": 2 }
        ]
    }"#;

    #[test]
    fn test_parse_description() {
        let description = GraphDescription::from_json_str(SMALL).unwrap();
        assert!(!description.directed);
        assert_eq!(description.vertices, vec!["A", "B", "C"]);
        assert_eq!(
            description.edges[1],
            EdgeRecord {
                u: "B".to_string(),
                v: "C".to_string(),
                weight: 2,
            }
        );

        let graph = description.into_graph().unwrap();
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert!(!graph.is_directed());
    }

    #[test]
    fn test_load_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SMALL.as_bytes()).unwrap();

        let graph = load_json(file.path()).unwrap();
        let neighbors = graph.neighbors(&Vertex::new("B".to_string())).unwrap();
        assert_eq!(neighbors.len(), 2);
    }

    #[test]
    fn test_inconsistent_description() {
        let json = r#"{ "directed": true, "vertices": ["A"], "edges": [{ "u": "A", "v": "B", "weight": 1 }] }"#;
        let err = GraphDescription::from_json_str(json)
            .unwrap()
            .into_graph()
            .unwrap_err();
        assert!(matches!(err, Error::GraphConsistency(_)));
    }

    #[test]
    fn test_negative_weight_is_rejected_by_parser() {
        let json = r#"{ "vertices": ["A", "B"], "edges": [{ "u": "A", "v": "B", "weight": -1 }] }"#;
        assert!(matches!(
            GraphDescription::from_json_str(json),
            Err(Error::Serialization(_))
        ));
    }

    #[test]
    fn test_demo_scenarios() {
        let demos = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos");
        let start = Vertex::new("A".to_string());

        let graph = load_json(demos.join("scenario_one.json")).unwrap();
        let result = crate::algorithm::shortest_paths(&graph, &start).unwrap();
        assert_eq!(result.distances(), &[0, 3, 3, 4, 8, 9, 10, 11]);

        let graph = load_json(demos.join("scenario_two.json")).unwrap();
        let result = crate::algorithm::shortest_paths(&graph, &start).unwrap();
        assert_eq!(result.distances(), &[0, 1, 2, 2, 6]);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_json(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
