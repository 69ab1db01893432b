use super::PathResult;
use crate::graph::RouteGraph;
use rustc_hash::{FxHashMap, FxHashSet};
use std::{cmp::Ordering, collections::BinaryHeap, time::Instant};

#[derive(Clone)]
struct FrontierEntry {
    cost: f64,
    airport: String,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap (BinaryHeap is max-heap by default)
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
    }
}

struct DijkstraState {
    heap: BinaryHeap<FrontierEntry>,
    distances: FxHashMap<String, f64>,
    parent_map: FxHashMap<String, String>,
    visited: FxHashSet<String>,
}

impl DijkstraState {
    fn new(start: &str) -> Self {
        let mut heap = BinaryHeap::new();
        let mut distances = FxHashMap::default();

        heap.push(FrontierEntry {
            cost: 0.0,
            airport: start.to_string(),
        });
        distances.insert(start.to_string(), 0.0);

        Self {
            heap,
            distances,
            parent_map: FxHashMap::default(),
            visited: FxHashSet::default(),
        }
    }

    fn visit_neighbor(
        &mut self,
        neighbor: &str,
        current: &str,
        edge_weight: f64,
        current_cost: f64,
    ) {
        let new_cost = current_cost + edge_weight;

        if let Some(&existing_cost) = self.distances.get(neighbor) {
            if new_cost >= existing_cost {
                return;
            }
        }

        self.distances.insert(neighbor.to_string(), new_cost);
        self.parent_map.insert(neighbor.to_string(), current.to_string());
        self.heap.push(FrontierEntry {
            cost: new_cost,
            airport: neighbor.to_string(),
        });
    }
}

/// Minimum-weight path between two airports: first pop of the target wins,
/// which is correct because segment weights are never negative. Parallel
/// edges are pushed independently, so the cheaper one reaches the frontier
/// first. An absent source or target yields `None` exactly like an
/// unreachable one.
pub fn dijkstra_find_path(graph: &RouteGraph, source: &str, target: &str) -> PathResult {
    let search_timer = Instant::now();

    if !graph.contains_airport(source) || !graph.contains_airport(target) {
        return (None, 0, search_timer.elapsed().as_secs_f64());
    }

    let mut state = DijkstraState::new(source);

    while let Some(FrontierEntry {
        cost,
        airport: current,
    }) = state.heap.pop()
    {
        if current == target {
            let path = reconstruct_path(&state.parent_map, source, target);
            let elapsed_time = search_timer.elapsed().as_secs_f64();
            return (Some((cost, path)), state.visited.len(), elapsed_time);
        }

        if state.visited.contains(&current) {
            continue;
        }
        state.visited.insert(current.clone());

        for edge in graph.outgoing(&current) {
            state.visit_neighbor(&edge.to, &current, edge.weight, cost);
        }
    }

    let elapsed_time = search_timer.elapsed().as_secs_f64();
    (None, state.visited.len(), elapsed_time)
}

fn reconstruct_path(
    parent_map: &FxHashMap<String, String>,
    start: &str,
    target: &str,
) -> Vec<String> {
    let mut path = Vec::new();
    let mut current = target.to_string();

    // Every popped node except the start has a parent entry by the time
    // the target is reached, so the walk back always terminates.
    while current != start {
        let parent = parent_map[&current].clone();
        path.push(current);
        current = parent;
    }

    path.push(start.to_string());
    path.reverse();
    path
}
