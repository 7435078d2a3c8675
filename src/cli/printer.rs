//! 结果打印器
//!
//! 提供表格、垂直和 JSON 格式的结果输出

use crate::algorithm::{ShortestPaths, SpanningTree};
use crate::error::Result;
use crate::graph::Vertex;
use clap::ValueEnum;
use prettytable::{format, row, Cell, Row, Table};
use std::fmt::Display;

/// 打印模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PrintMode {
    /// 表格模式
    #[default]
    Table,
    /// 垂直模式 (\G)
    Vertical,
    /// JSON
    Json,
}

/// 结果打印器
#[derive(Debug, Default)]
pub struct Printer {
    mode: PrintMode,
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    /// 设置打印模式
    pub fn set_mode(&mut self, mode: PrintMode) {
        self.mode = mode;
    }

    /// 打印最短路径结果
    pub fn shortest_paths<T: Display + serde::Serialize>(
        &self,
        result: &ShortestPaths<T>,
    ) -> Result<String> {
        if self.mode == PrintMode::Json {
            return Ok(serde_json::to_string_pretty(result)?);
        }

        let rows: Vec<Vec<String>> = result
            .iter()
            .enumerate()
            .map(|(i, (vertex, distance))| {
                vec![(i + 1).to_string(), vertex.to_string(), distance.to_string()]
            })
            .collect();
        Ok(self.print_result(&columns(&["#", "Vertex", "Distance"]), &rows))
    }

    /// 打印遍历顺序
    pub fn visit_order<T: Display + serde::Serialize>(&self, order: &[Vertex<T>]) -> Result<String> {
        if self.mode == PrintMode::Json {
            return Ok(serde_json::to_string_pretty(order)?);
        }

        let rows: Vec<Vec<String>> = order
            .iter()
            .enumerate()
            .map(|(i, vertex)| vec![(i + 1).to_string(), vertex.to_string()])
            .collect();
        Ok(self.print_result(&columns(&["#", "Vertex"]), &rows))
    }

    /// 打印最小生成树，`None` 表示图不连通
    pub fn spanning_tree<T: Display + serde::Serialize>(
        &self,
        tree: Option<&SpanningTree<T>>,
    ) -> Result<String> {
        if self.mode == PrintMode::Json {
            return Ok(serde_json::to_string_pretty(&tree)?);
        }

        let Some(tree) = tree else {
            return Ok("No spanning tree: graph is disconnected\n".to_string());
        };

        let rows: Vec<Vec<String>> = tree
            .edges
            .iter()
            .map(|e| vec![e.u().to_string(), e.v().to_string(), e.weight().to_string()])
            .collect();
        Ok(format!(
            "{}Total weight: {}\n",
            self.print_result(&columns(&["From", "To", "Weight"]), &rows),
            tree.total_weight
        ))
    }

    /// 打印通用结果
    pub fn print_result(&self, columns: &[String], rows: &[Vec<String>]) -> String {
        if columns.is_empty() || rows.is_empty() {
            return "Empty set\n".to_string();
        }

        let output = match self.mode {
            PrintMode::Table | PrintMode::Json => self.format_table(columns, rows),
            PrintMode::Vertical => self.format_vertical(columns, rows),
        };

        format!("{}{} row(s) in set\n", output, rows.len())
    }

    /// 表格格式
    fn format_table(&self, columns: &[String], rows: &[Vec<String>]) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        let header: Vec<Cell> = columns.iter().map(|c| Cell::new(c)).collect();
        table.set_titles(Row::new(header));

        for row_data in rows {
            let cells: Vec<Cell> = row_data.iter().map(|v| Cell::new(v)).collect();
            table.add_row(Row::new(cells));
        }

        table.to_string()
    }

    /// 垂直格式
    fn format_vertical(&self, columns: &[String], rows: &[Vec<String>]) -> String {
        let max_col_width = columns.iter().map(|c| c.len()).max().unwrap_or(0);
        let mut output = String::new();

        for (i, row_data) in rows.iter().enumerate() {
            output.push_str(&format!(
                "*************************** {}. row ***************************\n",
                i + 1
            ));

            for (j, col) in columns.iter().enumerate() {
                let value = row_data.get(j).map(|s| s.as_str()).unwrap_or("");
                output.push_str(&format!("{:>width$}: {}\n", col, value, width = max_col_width));
            }
        }

        output
    }

    /// 打印图统计信息
    pub fn print_stats(&self, vertex_count: usize, edge_count: usize, directed: bool) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Vertex Count", vertex_count.to_string()]);
        table.add_row(row!["Edge Count", edge_count.to_string()]);
        table.add_row(row!["Directed", directed.to_string()]);
        table.to_string()
    }
}

fn columns(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}
