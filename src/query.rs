use crate::criterion::Criterion;
use crate::graph::RouteGraph;
use crate::itinerary::{Itinerary, assemble_itinerary, dedup_itineraries};
use crate::pathfinding::{dfs_find_paths, dijkstra_find_path};
use crate::record::FlightRecord;
use crate::search_config::SearchConfig;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Journey dates a query considers, starting at the query date.
pub const SEARCH_WINDOW_DAYS: u64 = 6;

/// One routing question: endpoints, journey date and optimization target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteQuery {
    pub source: String,
    pub destination: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub criterion: Criterion,
}

/// Search statistics surfaced alongside the results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchStats {
    pub airports_visited: usize,
    pub duration_ms: u64,
}

/// Everything one query produces: deduplicated itineraries (shortest-path
/// result first when found), the graph that was searched (handed to the
/// external renderer) and search statistics.
#[derive(Debug, Clone)]
pub struct RouteSearch {
    pub itineraries: Vec<Itinerary>,
    pub graph: RouteGraph,
    pub stats: SearchStats,
}

/// Candidate records for a query: journey date inside the six-day window
/// starting at the query date, both endpoints matching after trimming,
/// case-insensitive.
pub fn filter_records(records: &[FlightRecord], query: &RouteQuery) -> Vec<FlightRecord> {
    let window_end = query
        .date
        .checked_add_days(Days::new(SEARCH_WINDOW_DAYS - 1))
        .unwrap_or(query.date);
    records
        .iter()
        .filter(|record| {
            record.date >= query.date
                && record.date <= window_end
                && matches_endpoints(record, query)
        })
        .cloned()
        .collect()
}

/// Records departing exactly on the query date with matching endpoints.
pub fn records_on_date(records: &[FlightRecord], query: &RouteQuery) -> Vec<FlightRecord> {
    records
        .iter()
        .filter(|record| record.date == query.date && matches_endpoints(record, query))
        .cloned()
        .collect()
}

fn matches_endpoints(record: &FlightRecord, query: &RouteQuery) -> bool {
    record.source.trim().eq_ignore_ascii_case(query.source.trim())
        && record
            .destination
            .trim()
            .eq_ignore_ascii_case(query.destination.trim())
}

/// Runs the whole pipeline for one query: filter the candidate records,
/// build the request-scoped graph, take the shortest path first, then the
/// bounded enumeration, assemble every node path that spans at least two
/// nodes and collapse duplicates by source route.
pub fn find_routes(
    records: &[FlightRecord],
    query: &RouteQuery,
    config: &SearchConfig,
) -> RouteSearch {
    let pipeline_timer = Instant::now();

    let candidates = filter_records(records, query);
    let graph = RouteGraph::build(&candidates, query.criterion);

    let source = query.source.trim();
    let destination = query.destination.trim();

    let (best, airports_visited, _) = dijkstra_find_path(&graph, source, destination);

    let mut itineraries = Vec::new();
    if let Some((_, path)) = best {
        if path.len() > 1 {
            if let Some(itinerary) = assemble_itinerary(&graph, &path) {
                itineraries.push(itinerary);
            }
        }
    }

    for (_, path) in dfs_find_paths(&graph, source, destination, config) {
        if path.len() > 1 {
            if let Some(itinerary) = assemble_itinerary(&graph, &path) {
                itineraries.push(itinerary);
            }
        }
    }

    let itineraries = dedup_itineraries(itineraries);

    RouteSearch {
        itineraries,
        graph,
        stats: SearchStats {
            airports_visited,
            duration_ms: pipeline_timer.elapsed().as_millis() as u64,
        },
    }
}
