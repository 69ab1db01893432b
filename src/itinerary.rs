use crate::graph::RouteGraph;
use chrono::NaiveDate;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// One hop of an itinerary with the metadata of the segment it rides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: String,
    pub to: String,
    pub airline: String,
    pub dep_time: String,
    pub date: NaiveDate,
    pub duration_mins: u32,
    pub price: f64,
    pub stops: String,
    pub route: String,
    pub route_text: String,
}

/// An ordered run of segments from a start airport to an end airport. The
/// totals are copied from the record backing the final hop, not recomputed
/// from per-segment shares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    pub segments: Vec<Segment>,
    pub total_duration_mins: u32,
    pub total_price: f64,
    pub total_stops: u32,
    /// Dedup key: the original route text of the first segment.
    pub route_text: String,
}

/// Resolves a node path against the graph. Each consecutive pair takes its
/// canonical edge (the first one inserted for that pair). Returns `None`
/// for paths shorter than two nodes or when a pair has no edge; the latter
/// cannot happen for paths the search engines produced over the same
/// graph. Pure: the same inputs always assemble the same itinerary.
pub fn assemble_itinerary(graph: &RouteGraph, node_path: &[String]) -> Option<Itinerary> {
    if node_path.len() < 2 {
        return None;
    }

    let mut segments = Vec::with_capacity(node_path.len() - 1);
    let mut record_totals = (0u32, 0.0f64, 0u32);

    for pair in node_path.windows(2) {
        let edge = graph.edge_between(&pair[0], &pair[1])?;
        record_totals = (edge.total_duration_mins, edge.total_price, edge.total_stops);
        segments.push(Segment {
            from: pair[0].clone(),
            to: edge.to.clone(),
            airline: edge.airline.clone(),
            dep_time: edge.dep_time.clone(),
            date: edge.date,
            duration_mins: edge.duration_mins,
            price: edge.price,
            stops: edge.stops.clone(),
            route: edge.route.clone(),
            route_text: edge.route_text.clone(),
        });
    }

    let route_text = segments[0].route_text.clone();
    let (total_duration_mins, total_price, total_stops) = record_totals;

    Some(Itinerary {
        segments,
        total_duration_mins,
        total_price,
        total_stops,
        route_text,
    })
}

/// Collapses itineraries that resolve to the same source route: the first
/// one per distinct route text survives, in discovery order.
pub fn dedup_itineraries(itineraries: Vec<Itinerary>) -> Vec<Itinerary> {
    let mut seen_routes = FxHashSet::default();
    itineraries
        .into_iter()
        .filter(|itinerary| seen_routes.insert(itinerary.route_text.clone()))
        .collect()
}
