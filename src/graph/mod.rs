//! 图核心模块
//!
//! 定义顶点、边、顶点距离对和不可变图

mod distance;
mod edge;
mod graph;
mod vertex;

pub use distance::VertexDistance;
pub use edge::{Edge, Weight};
pub use graph::{Adjacency, Graph};
pub use vertex::{Vertex, VertexData};
