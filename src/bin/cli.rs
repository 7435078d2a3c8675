//! GraphPath CLI 工具
//!
//! 从 JSON 图描述加载图并运行最短路径、遍历或最小生成树

use anyhow::Context;
use clap::{Parser, Subcommand};
use graphpath::algorithm::{bfs, dfs, prim, shortest_paths};
use graphpath::cli::{PrintMode, Printer};
use graphpath::graph::Vertex;
use graphpath::import;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "graphpath")]
#[command(version, about = "GraphPath 命令行工具")]
struct Args {
    /// 图描述文件（JSON）
    #[arg(short, long)]
    input: PathBuf,

    /// 输出格式
    #[arg(short, long, value_enum, default_value_t = PrintMode::Table, global = true)]
    format: PrintMode,

    /// 日志过滤器，覆盖 RUST_LOG（例: debug, graphpath=trace）
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Dijkstra 单源最短路径
    Dijkstra {
        /// 起点
        #[arg(short, long)]
        start: String,
    },
    /// 广度优先遍历
    Bfs {
        #[arg(short, long)]
        start: String,
    },
    /// 深度优先遍历
    Dfs {
        #[arg(short, long)]
        start: String,
    },
    /// Prim 最小生成树（仅无向图）
    Mst {
        #[arg(short, long)]
        start: String,
    },
    /// 显示图统计信息
    Stats,
}

fn init_tracing(log_level: Option<&str>) {
    let filter = match log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.log_level.as_deref());

    let input = &args.input;
    let graph = import::load_json(input)
        .with_context(|| format!("加载图失败: {}", input.display()))?;
    info!(
        path = %input.display(),
        vertices = graph.len(),
        edges = graph.edge_count(),
        "graph loaded"
    );

    let printer = Printer::new(args.format);
    let output = match &args.command {
        Command::Dijkstra { start } => {
            let result = shortest_paths(&graph, &Vertex::new(start.clone()))?;
            printer.shortest_paths(&result)?
        }
        Command::Bfs { start } => printer.visit_order(&bfs(&graph, &Vertex::new(start.clone()))?)?,
        Command::Dfs { start } => printer.visit_order(&dfs(&graph, &Vertex::new(start.clone()))?)?,
        Command::Mst { start } => {
            let tree = prim(&graph, &Vertex::new(start.clone()))?;
            printer.spanning_tree(tree.as_ref())?
        }
        Command::Stats => printer.print_stats(graph.len(), graph.edge_count(), graph.is_directed()),
    };

    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }

    Ok(())
}
