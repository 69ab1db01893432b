use crate::criterion::Criterion;
use crate::record::FlightRecord;
use crate::weights::WeightPolicy;
use chrono::NaiveDate;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

/// One flight segment: a single hop of a record, carrying its own copy of
/// the owning record's metadata so records can be discarded after the
/// build. The segment's source code is the adjacency key it is filed under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentEdge {
    pub to: String,
    pub weight: f64,
    pub airline: String,
    pub dep_time: String,
    pub date: NaiveDate,
    /// Per-segment share of the record's total duration.
    pub duration_mins: u32,
    /// Per-segment share of the record's total price.
    pub price: f64,
    /// Intermediate stop codes of the whole record, " > "-joined.
    pub stops: String,
    /// Full node sequence of the record, " -> "-joined.
    pub route: String,
    /// Original route text of the record, the itinerary dedup key.
    pub route_text: String,
    pub total_duration_mins: u32,
    pub total_price: f64,
    pub total_stops: u32,
}

/// Directed weighted multigraph over airport codes. Nodes appear the first
/// time an edge references them; parallel edges between the same pair
/// accumulate. Built fresh per query and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    adjacency: FxHashMap<String, Vec<SegmentEdge>>,
    airports: Vec<String>,
    airport_set: FxHashSet<String>,
    edge_count: usize,
}

impl RouteGraph {
    /// Builds the graph for one query: one edge per consecutive pair of
    /// every record's node sequence, weighted under `criterion`. Records
    /// with fewer than two distinct nodes contribute nothing. The input
    /// slice is left untouched.
    pub fn build(records: &[FlightRecord], criterion: Criterion) -> Self {
        let policy = WeightPolicy::from_records(criterion, records);
        let mut graph = RouteGraph::default();

        for record in records {
            let nodes = record.node_sequence();
            if !has_two_distinct(&nodes) {
                continue; // malformed row, skipped silently
            }

            let weight = policy.segment_weight(record);
            let duration_share = record.duration_share();
            let price_share = record.price_share();
            let stops = nodes[1..nodes.len() - 1].join(" > ");
            let route = nodes.join(" -> ");

            for pair in nodes.windows(2) {
                graph.insert_edge(
                    &pair[0],
                    SegmentEdge {
                        to: pair[1].clone(),
                        weight,
                        airline: record.airline.clone(),
                        dep_time: record.dep_time.clone(),
                        date: record.date,
                        duration_mins: duration_share,
                        price: price_share,
                        stops: stops.clone(),
                        route: route.clone(),
                        route_text: record.route_text.clone(),
                        total_duration_mins: record.duration_mins,
                        total_price: record.price,
                        total_stops: record.total_stops,
                    },
                );
            }
        }

        graph
    }

    fn insert_edge(&mut self, from: &str, edge: SegmentEdge) {
        self.register_airport(from);
        self.register_airport(&edge.to);
        self.adjacency
            .entry(from.to_string())
            .or_default()
            .push(edge);
        self.edge_count += 1;
    }

    fn register_airport(&mut self, code: &str) {
        if self.airport_set.insert(code.to_string()) {
            self.airports.push(code.to_string());
        }
    }

    pub fn contains_airport(&self, code: &str) -> bool {
        self.airport_set.contains(code)
    }

    /// Airport codes in first-seen order.
    pub fn airports(&self) -> impl Iterator<Item = &str> {
        self.airports.iter().map(String::as_str)
    }

    pub fn airport_count(&self) -> usize {
        self.airports.len()
    }

    /// Outgoing segments of `code` in insertion order; empty for codes the
    /// graph has never seen.
    pub fn outgoing(&self, code: &str) -> &[SegmentEdge] {
        self.adjacency.get(code).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The canonical edge for an exact (from, to) pair: the first one
    /// inserted for that pair. Parallel edges inserted later stay reachable
    /// through `outgoing`.
    pub fn edge_between(&self, from: &str, to: &str) -> Option<&SegmentEdge> {
        self.outgoing(from).iter().find(|edge| edge.to == to)
    }

    /// Every (from, edge) pair, in deterministic order: airports in
    /// first-seen order, each airport's edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &SegmentEdge)> {
        self.airports.iter().flat_map(|code| {
            self.outgoing(code)
                .iter()
                .map(move |edge| (code.as_str(), edge))
        })
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

fn has_two_distinct(nodes: &[String]) -> bool {
    nodes
        .first()
        .is_some_and(|first| nodes.iter().any(|node| node != first))
}
