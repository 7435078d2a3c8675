//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("图不一致: 边引用了不在顶点集合中的顶点 {0}")]
    GraphConsistency(String),

    #[error("顶点不存在: {0}")]
    VertexNotFound(String),

    #[error("算法要求无向图: {0}")]
    DirectedGraph(String),

    #[error("序列化错误: {0}")]
    Serialization(String),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
