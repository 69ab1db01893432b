use super::WeightedPath;
use crate::graph::RouteGraph;
use crate::search_config::SearchConfig;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;

struct DfsExplorer<'a> {
    graph: &'a RouteGraph,
    target: &'a str,
    max_depth: usize,
    path: Vec<String>,
    on_path: FxHashSet<String>,
    found: Vec<WeightedPath>,
}

impl<'a> DfsExplorer<'a> {
    fn new(graph: &'a RouteGraph, source: &str, target: &'a str, max_depth: usize) -> Self {
        let mut on_path = FxHashSet::default();
        on_path.insert(source.to_string());

        Self {
            graph,
            target,
            max_depth,
            path: vec![source.to_string()],
            on_path,
            found: Vec::new(),
        }
    }

    fn explore(&mut self, current: &str, cost: f64) {
        if self.path.len() > self.max_depth {
            return;
        }

        if current == self.target {
            self.found.push((cost, self.path.clone()));
            return;
        }

        let graph = self.graph;
        for edge in graph.outgoing(current) {
            if self.on_path.contains(&edge.to) {
                continue; // already on the current path
            }
            self.step_into(&edge.to);
            self.explore(&edge.to, cost + edge.weight);
            self.step_back();
        }
    }

    fn step_into(&mut self, node: &str) {
        self.path.push(node.to_string());
        self.on_path.insert(node.to_string());
    }

    fn step_back(&mut self) {
        if let Some(node) = self.path.pop() {
            self.on_path.remove(&node);
        }
    }
}

/// Exhaustive loop-free search between two airports, cheapest paths first.
/// A branch is abandoned once the path exceeds `config.max_depth` nodes or
/// reaches the target; parallel edges to the same neighbor are explored as
/// distinct branches. At most `config.max_paths` results survive the final
/// ascending-cost sort. Absent endpoints yield nothing, like unreachable
/// ones.
pub fn dfs_find_paths(
    graph: &RouteGraph,
    source: &str,
    target: &str,
    config: &SearchConfig,
) -> Vec<WeightedPath> {
    if !graph.contains_airport(source) || !graph.contains_airport(target) {
        return Vec::new();
    }

    let mut explorer = DfsExplorer::new(graph, source, target, config.max_depth);
    explorer.explore(source, 0.0);

    let mut paths = explorer.found;
    paths.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
    paths.truncate(config.max_paths);
    paths
}
