//! CLI surface: loads a fixture, resolves a cursor, runs the
//! engine, and prints the resulting graph as an indented tree or as JSON.

use std::cell::Cell;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::app::dto::{GraphDto, NodeDto};
use crate::app::engine::InsightEngine;

#[derive(Parser, Debug)]
#[command(author, version, about = "Backward data-flow analysis over a C# semantic fixture", long_about = None)]
pub struct Args {
    /// Path to a JSON fixture standing in for the semantic oracle.
    #[arg(long, value_name = "FILE")]
    pub fixture: PathBuf,

    /// File path of the cursor, as recorded by the fixture's token table.
    #[arg(long, value_name = "FILE")]
    pub file: String,

    /// 1-based line of the cursor position.
    #[arg(long)]
    pub line: u32,

    /// 1-based column of the cursor position.
    #[arg(long)]
    pub column: u32,

    /// Print the Driver API DTO as JSON instead of an indented tree.
    #[arg(long)]
    pub json: bool,

    /// Cancel the analysis after this many oracle-boundary checks, for
    /// exercising cancellation from the command line. Absent by default.
    #[arg(long, value_name = "N")]
    pub cancel_after: Option<u32>,
}

pub fn run(args: Args) -> Result<()> {
    let engine = InsightEngine::from_fixture_file(&args.fixture)?;
    let remaining = Cell::new(args.cancel_after.unwrap_or(0));
    let cancel_after_checks = move || {
        if remaining.get() == 0 {
            return false;
        }
        remaining.set(remaining.get() - 1);
        remaining.get() == 0
    };
    let cancelled: Option<&dyn Fn() -> bool> = args
        .cancel_after
        .map(|_| &cancel_after_checks as &dyn Fn() -> bool);
    match engine.analyze(&args.file, args.line, args.column, cancelled)? {
        None => {
            println!(
                "No analyzable symbol at {}:{}:{}",
                args.file, args.line, args.column
            );
            Ok(())
        }
        Some(graph) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&graph)?);
            } else {
                print_tree(&graph);
            }
            Ok(())
        }
    }
}

fn print_tree(graph: &GraphDto) {
    println!(
        "{} ({} total references)",
        graph.root, graph.total_references
    );
    let by_id: HashMap<&str, &NodeDto> = graph.nodes.iter().map(|n| (n.id.as_str(), n)).collect();
    let mut visited = HashSet::new();
    if let Some(root) = by_id.get(graph.root.as_str()) {
        print_node(root, &by_id, 0, &mut visited);
    }
}

fn print_node(node: &NodeDto, by_id: &HashMap<&str, &NodeDto>, depth: usize, visited: &mut HashSet<String>) {
    let indent = "  ".repeat(depth);
    println!(
        "{indent}{} : {} [{:?}] ({})",
        node.name,
        node.type_string,
        node.kind,
        node.location.location_string()
    );
    if !visited.insert(node.id.clone()) {
        return;
    }
    for edge in &node.edges {
        println!("{indent}  -{}->", edge.relation);
        if let Some(target) = by_id.get(edge.target.as_str()) {
            print_node(target, by_id, depth + 2, visited);
        }
    }
}
